//! Account-scoped persistent key/value storage. Keys and values are
//! opaque byte strings; the host imposes no structure on either.

use pvm_interface::SyscallCode;

use crate::syscalls::syscall;

/// Upserts `value[0..value_len)` under `key[0..key_len)`. Any prior value
/// for the key is overwritten.
///
/// # Safety
/// `key` must be valid for reads of `key_len` bytes and `value` for reads
/// of `value_len` bytes. Zero lengths are accepted.
pub unsafe fn sys_save(key: *const u8, key_len: usize, value: *const u8, value_len: usize) -> u64 {
  syscall(
    SyscallCode::Save,
    [
      key as u64,
      key_len as u64,
      value as u64,
      value_len as u64,
      0,
      0,
    ],
  )
}

/// Looks up `key[0..key_len)`. On success the host writes up to
/// `value_cap` bytes of the stored value into `value` and stores the
/// value's true length into `actual_len`; a true length larger than
/// `value_cap` means the read was truncated. A missing key returns
/// `status::NOT_FOUND` and leaves both output locations untouched.
///
/// # Safety
/// `key` must be valid for reads of `key_len` bytes, `value` for writes
/// of `value_cap` bytes, and `actual_len` for a `u64` write.
pub unsafe fn sys_load(
  key: *const u8,
  key_len: usize,
  value: *mut u8,
  value_cap: usize,
  actual_len: *mut u64,
) -> u64 {
  syscall(
    SyscallCode::Load,
    [
      key as u64,
      key_len as u64,
      value as u64,
      value_cap as u64,
      actual_len as u64,
      0,
    ],
  )
}
