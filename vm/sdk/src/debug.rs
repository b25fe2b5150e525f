/// Best-effort host-visible logging.
///
/// The status word is deliberately discarded: debug output must never
/// influence program behavior, and a host that drops the message is
/// within its rights.
pub fn debug(message: &str) {
  let _ = unsafe { pvm_vm::syscalls::sys_debug(message.as_ptr(), message.len()) };
}
