use thiserror::Error;

/// A context or output syscall came back with a nonzero status. The
/// destination buffer is unspecified and is never surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("host returned status {0}")]
pub struct SyscallFailure(pub u64);

/// Storage operation failures. Codes are local to the storage operations;
/// a short read is NOT an error (see [`crate::load`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StorageError {
  /// The key has never been saved.
  #[error("key not found")]
  NotFound,
  /// The host rejected the operation, e.g. for resource limits.
  #[error("host rejected the operation (status {0})")]
  Host(u64),
}

/// Failures while staging typed output.
#[derive(Debug, Error)]
pub enum OutputError {
  #[error("output encoding failed: {0}")]
  Encode(#[from] bincode::Error),
  #[error(transparent)]
  Syscall(#[from] SyscallFailure),
}
