//! Guest-side syscall layer for the PVM host.
//!
//! Everything here marshals arguments into the six-register trap
//! convention and forwards whatever status word the host hands back.
//! Typed, safe wrappers live one level up in `pvm-vm-sdk`; this crate is
//! deliberately pointer-shaped so the register contract stays visible.
//!
//! On targets other than the RISC-V guest the trap routes into an
//! in-process [`pvm_interface::HostInterface`] (see [`mock`]), so the
//! exact same marshalling code runs under `cargo test`.

use cfg_if::cfg_if;

pub mod syscalls;

cfg_if! {
  if #[cfg(not(target_arch = "riscv64"))] {
    pub mod mock;
  }
}

pub mod types {
  pub use pvm_interface::*;
}
