//! Account-scoped persistent storage.
//!
//! The store lives on the host side and outlives the execution; nothing
//! is cached or buffered here. Keys are compared by exact byte equality
//! and both keys and values may be empty.

use pvm_interface::status;
use pvm_vm::syscalls;

use crate::error::StorageError;

/// Upserts `value` under `key`, overwriting any prior value.
pub fn save(key: &[u8], value: &[u8]) -> Result<(), StorageError> {
  let status_word =
    unsafe { syscalls::sys_save(key.as_ptr(), key.len(), value.as_ptr(), value.len()) };
  match status_word {
    status::SUCCESS => Ok(()),
    code => Err(StorageError::Host(code)),
  }
}

/// Fills `out` with as much of the stored value as fits and returns the
/// value's true length. A return larger than `out.len()` means the read
/// was truncated; the first `out.len()` bytes are still valid.
pub fn load(key: &[u8], out: &mut [u8]) -> Result<usize, StorageError> {
  let mut actual: u64 = 0;
  let status_word = unsafe {
    syscalls::sys_load(key.as_ptr(), key.len(), out.as_mut_ptr(), out.len(), &mut actual)
  };
  match status_word {
    status::SUCCESS => Ok(actual as usize),
    status::NOT_FOUND => Err(StorageError::NotFound),
    code => Err(StorageError::Host(code)),
  }
}

/// Loads the whole value: probes the size with an empty buffer, then
/// fetches exactly that many bytes. Two syscalls, no truncation.
pub fn load_to_vec(key: &[u8]) -> Result<Vec<u8>, StorageError> {
  let len = load(key, &mut [])?;
  let mut value = vec![0u8; len];
  load(key, &mut value)?;
  Ok(value)
}
