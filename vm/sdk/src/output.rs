//! Return-data staging. The host keeps one output slot per execution;
//! staging again replaces the previous payload, and the payload staged
//! last is the only one the host surfaces to the caller.

use serde::Serialize;

use crate::context::check;
use crate::error::{OutputError, SyscallFailure};

/// Stages `data` as the execution's return value. Last call wins.
pub fn stage(data: &[u8]) -> Result<(), SyscallFailure> {
  check(unsafe { pvm_vm::syscalls::sys_ret(data.as_ptr(), data.len()) })
}

/// Stages a 64-bit integer, encoded as 8 big-endian bytes.
pub fn stage_u64(value: u64) -> Result<(), SyscallFailure> {
  stage(&value.to_be_bytes())
}

/// Stages any serializable value, bincode-encoded. Pure data transform
/// in front of [`stage`]; no extra host interaction.
pub fn stage_value<T: Serialize>(value: &T) -> Result<(), OutputError> {
  let encoded = bincode::serialize(value)?;
  stage(&encoded)?;
  Ok(())
}
