#[cfg(target_arch = "riscv64")]
use core::arch::asm;

use pvm_interface::SyscallCode;

/// Issues the trap: `a7` selects the operation, `a0`..`a5` carry the
/// arguments, and the host's status word comes back in `a0`. The call is
/// fully synchronous; control does not return until the host is done.
///
/// This is the only place the platform trap instruction appears. Every
/// higher-level operation goes through here. The status word is forwarded
/// verbatim; this function never panics.
///
/// # Safety
///
/// Any argument the selected operation treats as a pointer must be valid
/// for the access that operation performs (see the `sys_*` wrappers for
/// the per-operation buffer contracts). The host never retains a pointer
/// past the call.
pub unsafe fn syscall(code: SyscallCode, args: [u64; 6]) -> u64 {
  #[cfg(target_arch = "riscv64")]
  {
    let mut status = args[0];
    asm!(
      "ecall",
      inout("a0") status,
      in("a1") args[1],
      in("a2") args[2],
      in("a3") args[3],
      in("a4") args[4],
      in("a5") args[5],
      in("a7") code as u32 as u64,
    );
    status
  }

  #[cfg(not(target_arch = "riscv64"))]
  {
    crate::mock::dispatch(code, args)
  }
}
