//! Typed context and chain-fact accessors. Each is a pure read: repeating
//! a call within one execution returns a bit-identical value.

use pvm_interface::{Address, RawStatus, Word, ADDRESS_LENGTH, WORD_LENGTH};
use pvm_vm::syscalls;

use crate::error::SyscallFailure;

pub(crate) fn check(status_word: u64) -> Result<(), SyscallFailure> {
  let status = RawStatus(status_word);
  if status.is_success() {
    Ok(())
  } else {
    Err(SyscallFailure(status.code()))
  }
}

/// Address of the executing account.
pub fn address() -> Result<Address, SyscallFailure> {
  let mut bytes = [0u8; ADDRESS_LENGTH];
  check(unsafe { syscalls::sys_address(bytes.as_mut_ptr()) })?;
  Ok(Address(bytes))
}

/// Balance of an arbitrary account.
pub fn balance(address: &Address) -> Result<Word, SyscallFailure> {
  let mut bytes = [0u8; WORD_LENGTH];
  check(unsafe { syscalls::sys_balance(address.as_bytes().as_ptr(), bytes.as_mut_ptr()) })?;
  Ok(Word(bytes))
}

/// Account that initiated the top-level call chain.
pub fn origin() -> Result<Address, SyscallFailure> {
  let mut bytes = [0u8; ADDRESS_LENGTH];
  check(unsafe { syscalls::sys_origin(bytes.as_mut_ptr()) })?;
  Ok(Address(bytes))
}

/// Immediate invoker of the current execution.
pub fn caller() -> Result<Address, SyscallFailure> {
  let mut bytes = [0u8; ADDRESS_LENGTH];
  check(unsafe { syscalls::sys_caller(bytes.as_mut_ptr()) })?;
  Ok(Address(bytes))
}

/// Amount attached to the current invocation.
pub fn call_value() -> Result<Word, SyscallFailure> {
  let mut bytes = [0u8; WORD_LENGTH];
  check(unsafe { syscalls::sys_callvalue(bytes.as_mut_ptr()) })?;
  Ok(Word(bytes))
}

/// Hash of the historical block at `number`.
pub fn block_hash(number: u64) -> Result<Word, SyscallFailure> {
  let mut bytes = [0u8; WORD_LENGTH];
  check(unsafe { syscalls::sys_blockhash(number, bytes.as_mut_ptr()) })?;
  Ok(Word(bytes))
}

/// Block proposer's address.
pub fn coinbase() -> Result<Address, SyscallFailure> {
  let mut bytes = [0u8; ADDRESS_LENGTH];
  check(unsafe { syscalls::sys_coinbase(bytes.as_mut_ptr()) })?;
  Ok(Address(bytes))
}

/// Current block time.
pub fn timestamp() -> Result<u64, SyscallFailure> {
  let mut value: u64 = 0;
  check(unsafe { syscalls::sys_timestamp(&mut value) })?;
  Ok(value)
}

/// Current block height.
pub fn block_number() -> Result<Word, SyscallFailure> {
  let mut bytes = [0u8; WORD_LENGTH];
  check(unsafe { syscalls::sys_number(bytes.as_mut_ptr()) })?;
  Ok(Word(bytes))
}

/// Current block difficulty.
pub fn difficulty() -> Result<Word, SyscallFailure> {
  let mut bytes = [0u8; WORD_LENGTH];
  check(unsafe { syscalls::sys_difficulty(bytes.as_mut_ptr()) })?;
  Ok(Word(bytes))
}

/// Current block's gas ceiling.
pub fn gas_limit() -> Result<u64, SyscallFailure> {
  let mut value: u64 = 0;
  check(unsafe { syscalls::sys_gaslimit(&mut value) })?;
  Ok(value)
}

#[cfg(test)]
mod tests {
  use pvm_interface::{Address, MockHost, Word, ADDRESS_LENGTH};
  use pvm_vm::mock::install_host;

  fn account(tail: u8) -> Address {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - 1] = tail;
    Address(bytes)
  }

  // Mirrors the host's SDK smoke-test fixture: executing account ..01,
  // origin ..02, caller ..03, call value 5, block number 6, coinbase ..08,
  // timestamp 9, difficulty 10, and account ..01 seeded with balance 10.
  fn install_fixture() {
    install_host(Box::new(
      MockHost::new()
        .with_address(account(1))
        .with_origin(account(2))
        .with_caller(account(3))
        .with_coinbase(account(8))
        .with_call_value(Word::from_u64(5))
        .with_block_number(Word::from_u64(6))
        .with_timestamp(9)
        .with_difficulty(Word::from_u64(10))
        .with_gas_limit(8_000_000)
        .with_balance(account(1), Word::from_u64(10)),
    ));
  }

  #[test]
  fn context_addresses() {
    install_fixture();
    assert_eq!(super::address().unwrap(), account(1));
    assert_eq!(super::origin().unwrap(), account(2));
    assert_eq!(super::caller().unwrap(), account(3));
    assert_eq!(super::coinbase().unwrap(), account(8));
  }

  #[test]
  fn seeded_balance_lands_in_the_word_tail() {
    install_fixture();
    let balance = super::balance(&account(1)).unwrap();
    assert_eq!(balance.as_bytes()[31], 10);
    assert_eq!(balance.as_u64(), 10);
  }

  #[test]
  fn block_hash_fixture() {
    let hash = super::block_hash(7).unwrap();
    assert_eq!(hash.as_bytes()[31], 7);
  }

  #[test]
  fn block_facts() {
    install_fixture();
    assert_eq!(super::call_value().unwrap().as_u64(), 5);
    assert_eq!(super::block_number().unwrap().as_u64(), 6);
    assert_eq!(super::timestamp().unwrap(), 9);
    assert_eq!(super::difficulty().unwrap().as_u64(), 10);
    assert_eq!(super::gas_limit().unwrap(), 8_000_000);
  }

  #[test]
  fn accessors_are_idempotent() {
    install_fixture();
    assert_eq!(super::address().unwrap(), super::address().unwrap());
    assert_eq!(super::caller().unwrap(), super::caller().unwrap());
    assert_eq!(
      super::balance(&account(1)).unwrap(),
      super::balance(&account(1)).unwrap()
    );
    assert_eq!(super::block_hash(7).unwrap(), super::block_hash(7).unwrap());
  }

  #[test]
  fn mocked_host_drives_the_typed_accessor() {
    let mut host = pvm_interface::MockHostInterface::new();
    host.expect_address().times(2).returning(|| account(0x42));
    install_host(Box::new(host));

    assert_eq!(super::address().unwrap(), account(0x42));
    assert_eq!(super::address().unwrap(), account(0x42));
  }
}
