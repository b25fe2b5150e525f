//! In-process host used on every target except the RISC-V guest.
//!
//! [`dispatch`] reproduces the host's side of the register contract —
//! which registers it reads, which guest buffers it writes, and which
//! status words it returns — against a [`HostInterface`] held in a
//! thread-local, so `cargo test` exercises the marshalling in
//! [`crate::syscalls`] byte for byte.

use std::cell::RefCell;
use std::ptr;
use std::slice;

use pvm_interface::{status, Address, HostInterface, MockHost, SyscallCode, Word, ADDRESS_LENGTH};

thread_local! {
  static HOST: RefCell<Box<dyn HostInterface>> = RefCell::new(Box::new(MockHost::new()));
}

/// Replaces this thread's host. Each test thread starts with a default
/// [`MockHost`].
pub fn install_host(host: Box<dyn HostInterface>) {
  HOST.with(|cell| *cell.borrow_mut() = host);
}

/// Runs `f` against this thread's host, e.g. to seed storage or inspect
/// staged return data after the fact.
pub fn with_host<R>(f: impl FnOnce(&mut dyn HostInterface) -> R) -> R {
  HOST.with(|cell| f(cell.borrow_mut().as_mut()))
}

/// The host's half of [`crate::syscalls::syscall`] for off-target builds.
///
/// # Safety
/// Pointer-carrying arguments must satisfy the same buffer contracts the
/// real host requires; see the `sys_*` wrappers.
pub(crate) unsafe fn dispatch(code: SyscallCode, args: [u64; 6]) -> u64 {
  HOST.with(|cell| {
    let mut host = cell.borrow_mut();
    let host = host.as_mut();
    match code {
      SyscallCode::Debug => {
        let message = read_bytes(args[0], args[1]);
        host.debug(&String::from_utf8_lossy(&message));
        status::SUCCESS
      }
      SyscallCode::Ret => {
        host.set_return(read_bytes(args[0], args[1]));
        status::SUCCESS
      }
      SyscallCode::Save => {
        let key = read_bytes(args[0], args[1]);
        let value = read_bytes(args[2], args[3]);
        host.storage_set(&key, &value);
        status::SUCCESS
      }
      SyscallCode::Load => {
        let key = read_bytes(args[0], args[1]);
        match host.storage_get(&key) {
          None => status::NOT_FOUND,
          Some(value) => {
            let cap = args[3] as usize;
            let n = value.len().min(cap);
            if n > 0 {
              ptr::copy_nonoverlapping(value.as_ptr(), args[2] as *mut u8, n);
            }
            *(args[4] as *mut u64) = value.len() as u64;
            status::SUCCESS
          }
        }
      }
      SyscallCode::Address => write_address(args[0], host.address()),
      SyscallCode::Balance => {
        let address = read_address(args[0]);
        write_word(args[1], host.balance(&address))
      }
      SyscallCode::Origin => write_address(args[0], host.origin()),
      SyscallCode::Caller => write_address(args[0], host.caller()),
      SyscallCode::CallValue => write_word(args[0], host.call_value()),
      SyscallCode::BlockHash => write_word(args[1], host.block_hash(args[0])),
      SyscallCode::Coinbase => write_address(args[0], host.coinbase()),
      SyscallCode::Timestamp => {
        *(args[0] as *mut u64) = host.timestamp();
        status::SUCCESS
      }
      SyscallCode::Number => write_word(args[0], host.block_number()),
      SyscallCode::Difficulty => write_word(args[0], host.difficulty()),
      SyscallCode::GasLimit => {
        *(args[0] as *mut u64) = host.gas_limit();
        status::SUCCESS
      }
    }
  })
}

unsafe fn read_bytes(ptr: u64, len: u64) -> Vec<u8> {
  if len == 0 {
    return Vec::new();
  }
  slice::from_raw_parts(ptr as *const u8, len as usize).to_vec()
}

unsafe fn read_address(ptr: u64) -> Address {
  let mut bytes = [0u8; ADDRESS_LENGTH];
  ptr::copy_nonoverlapping(ptr as *const u8, bytes.as_mut_ptr(), ADDRESS_LENGTH);
  Address(bytes)
}

unsafe fn write_address(ptr: u64, address: Address) -> u64 {
  ptr::copy_nonoverlapping(
    address.as_bytes().as_ptr(),
    ptr as *mut u8,
    ADDRESS_LENGTH,
  );
  status::SUCCESS
}

unsafe fn write_word(ptr: u64, word: Word) -> u64 {
  ptr::copy_nonoverlapping(
    word.as_bytes().as_ptr(),
    ptr as *mut u8,
    pvm_interface::WORD_LENGTH,
  );
  status::SUCCESS
}

#[cfg(test)]
mod tests {
  use pvm_interface::{status, Address, MockHost, Word, ADDRESS_LENGTH, WORD_LENGTH};

  use super::{install_host, with_host};
  use crate::syscalls;

  fn account(tail: u8) -> Address {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - 1] = tail;
    Address(bytes)
  }

  #[test]
  fn save_load_round_trip_at_the_register_level() {
    let key = b"Test: save_k";
    let value = b"Test: save_v";
    let status_word =
      unsafe { syscalls::sys_save(key.as_ptr(), key.len(), value.as_ptr(), value.len()) };
    assert_eq!(status_word, status::SUCCESS);

    let mut out = [0u8; 20];
    let mut actual: u64 = 0;
    let status_word = unsafe {
      syscalls::sys_load(key.as_ptr(), key.len(), out.as_mut_ptr(), out.len(), &mut actual)
    };
    assert_eq!(status_word, status::SUCCESS);
    assert_eq!(actual, 12);
    assert_eq!(&out[..12], value);
  }

  #[test]
  fn load_missing_key_is_not_found_and_writes_nothing() {
    let mut out = [0xaau8; 8];
    let mut actual: u64 = u64::MAX;
    let status_word = unsafe {
      syscalls::sys_load(b"absent".as_ptr(), 6, out.as_mut_ptr(), out.len(), &mut actual)
    };
    assert_eq!(status_word, status::NOT_FOUND);
    assert_eq!(out, [0xaau8; 8]);
    assert_eq!(actual, u64::MAX);
  }

  #[test]
  fn load_reports_true_length_past_capacity() {
    let value = [7u8; 40];
    unsafe { syscalls::sys_save(b"k".as_ptr(), 1, value.as_ptr(), value.len()) };

    let mut out = [0u8; 8];
    let mut actual: u64 = 0;
    let status_word =
      unsafe { syscalls::sys_load(b"k".as_ptr(), 1, out.as_mut_ptr(), out.len(), &mut actual) };
    assert_eq!(status_word, status::SUCCESS);
    assert_eq!(actual, 40);
    assert_eq!(out, [7u8; 8]);
  }

  #[test]
  fn ret_replaces_previous_payload() {
    unsafe {
      syscalls::sys_ret(b"A".as_ptr(), 1);
      syscalls::sys_ret(b"B".as_ptr(), 1);
    }
    let output = with_host(|host| host.return_data());
    assert_eq!(output, Some(b"B".to_vec()));
  }

  #[test]
  fn accessors_fill_exactly_their_declared_sizes() {
    install_host(Box::new(
      MockHost::new()
        .with_address(account(1))
        .with_call_value(Word::from_u64(5)),
    ));

    // Sentinel bytes past the declared length must survive the write.
    let mut addr = [0xeeu8; ADDRESS_LENGTH + 4];
    let status_word = unsafe { syscalls::sys_address(addr.as_mut_ptr()) };
    assert_eq!(status_word, status::SUCCESS);
    assert_eq!(addr[ADDRESS_LENGTH - 1], 1);
    assert_eq!(&addr[ADDRESS_LENGTH..], &[0xeeu8; 4]);

    let mut value = [0xeeu8; WORD_LENGTH + 4];
    let status_word = unsafe { syscalls::sys_callvalue(value.as_mut_ptr()) };
    assert_eq!(status_word, status::SUCCESS);
    assert_eq!(value[WORD_LENGTH - 1], 5);
    assert_eq!(&value[WORD_LENGTH..], &[0xeeu8; 4]);
  }

  #[test]
  fn scalar_accessors_store_u64() {
    install_host(Box::new(
      MockHost::new().with_timestamp(9).with_gas_limit(100_000),
    ));

    let mut timestamp: u64 = 0;
    assert_eq!(unsafe { syscalls::sys_timestamp(&mut timestamp) }, 0);
    assert_eq!(timestamp, 9);

    let mut gas_limit: u64 = 0;
    assert_eq!(unsafe { syscalls::sys_gaslimit(&mut gas_limit) }, 0);
    assert_eq!(gas_limit, 100_000);
  }

  #[test]
  fn debug_reaches_the_host() {
    // Delivery is best-effort; only the status contract is asserted.
    let message = "Testing: debug";
    let status_word = unsafe { syscalls::sys_debug(message.as_ptr(), message.len()) };
    assert_eq!(status_word, status::SUCCESS);
  }
}
