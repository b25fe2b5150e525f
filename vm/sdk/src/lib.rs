//! Safe, typed access to the PVM host syscalls.
//!
//! Fixed-size results come back as [`pvm_interface::Address`] and
//! [`pvm_interface::Word`] values, so a guest can never hand the host an
//! undersized buffer. Every fallible operation surfaces the host's status
//! word as a typed error; nothing panics and nothing is retried.
//!
//! ```ignore
//! use pvm_vm_sdk::{context, output, storage};
//!
//! storage::save(b"counter", &1u64.to_be_bytes())?;
//! let me = context::address()?;
//! output::stage_u64(context::balance(&me)?.as_u64())?;
//! ```

mod context;
mod debug;
mod error;
mod output;
mod storage;

pub use context::*;
pub use debug::debug;
pub use error::{OutputError, StorageError, SyscallFailure};
pub use output::{stage, stage_u64, stage_value};
pub use storage::{load, load_to_vec, save};
