//! Output staging and diagnostics.

use pvm_interface::SyscallCode;

use crate::syscalls::syscall;

/// Stages `data[0..len)` as the execution's return value. The host keeps
/// a single output slot, so a later call replaces an earlier one; only
/// the payload staged last is observable.
///
/// # Safety
/// `data` must be valid for reads of `len` bytes.
pub unsafe fn sys_ret(data: *const u8, len: usize) -> u64 {
  syscall(SyscallCode::Ret, [data as u64, len as u64, 0, 0, 0, 0])
}

/// Sends `message[0..len)` to the host's log. Best effort: the status
/// word reports failure but callers must not depend on delivery.
///
/// # Safety
/// `message` must be valid for reads of `len` bytes.
pub unsafe fn sys_debug(message: *const u8, len: usize) -> u64 {
  syscall(SyscallCode::Debug, [message as u64, len as u64, 0, 0, 0, 0])
}
