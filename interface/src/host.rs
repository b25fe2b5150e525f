//! The host's side of the trap boundary, one method per syscall, plus an
//! in-process implementation with the fixture conventions the host's own
//! test suite uses.

use std::collections::HashMap;

use crate::{Address, OutputSlot, Word};

/// Everything the host does on behalf of a guest. Storage is implicitly
/// scoped to the executing account; the trait never sees an address for
/// storage operations.
///
/// Mutating operations take `&mut self`; pure context reads take `&self`
/// and must return the same value for the whole execution.
#[mockall::automock]
pub trait HostInterface {
  fn address(&self) -> Address;
  fn balance(&self, address: &Address) -> Word;
  fn origin(&self) -> Address;
  fn caller(&self) -> Address;
  fn call_value(&self) -> Word;
  fn block_hash(&self, number: u64) -> Word;
  fn coinbase(&self) -> Address;
  fn timestamp(&self) -> u64;
  fn block_number(&self) -> Word;
  fn difficulty(&self) -> Word;
  fn gas_limit(&self) -> u64;
  fn storage_set(&mut self, key: &[u8], value: &[u8]);
  fn storage_get(&self, key: &[u8]) -> Option<Vec<u8>>;
  fn debug(&self, message: &str);
  fn set_return(&mut self, data: Vec<u8>);
  fn return_data(&self) -> Option<Vec<u8>>;
}

/// A self-contained host for tests and off-target builds.
///
/// Context fields are seeded through the `with_*` builders. Block hashes
/// follow the host test fixture convention: the hash of block `n` is the
/// word whose trailing bytes encode `n`.
#[derive(Debug, Default, Clone)]
pub struct MockHost {
  address: Address,
  caller: Address,
  origin: Address,
  coinbase: Address,
  call_value: Word,
  block_number: Word,
  difficulty: Word,
  timestamp: u64,
  gas_limit: u64,
  balances: HashMap<Address, Word>,
  storage: HashMap<Vec<u8>, Vec<u8>>,
  output: OutputSlot,
}

impl MockHost {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_address(mut self, address: Address) -> Self {
    self.address = address;
    self
  }

  pub fn with_caller(mut self, caller: Address) -> Self {
    self.caller = caller;
    self
  }

  pub fn with_origin(mut self, origin: Address) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_coinbase(mut self, coinbase: Address) -> Self {
    self.coinbase = coinbase;
    self
  }

  pub fn with_call_value(mut self, value: Word) -> Self {
    self.call_value = value;
    self
  }

  pub fn with_block_number(mut self, number: Word) -> Self {
    self.block_number = number;
    self
  }

  pub fn with_difficulty(mut self, difficulty: Word) -> Self {
    self.difficulty = difficulty;
    self
  }

  pub fn with_timestamp(mut self, timestamp: u64) -> Self {
    self.timestamp = timestamp;
    self
  }

  pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
    self.gas_limit = gas_limit;
    self
  }

  pub fn with_balance(mut self, address: Address, balance: Word) -> Self {
    self.balances.insert(address, balance);
    self
  }
}

impl HostInterface for MockHost {
  fn address(&self) -> Address {
    self.address
  }

  fn balance(&self, address: &Address) -> Word {
    self.balances.get(address).copied().unwrap_or_default()
  }

  fn origin(&self) -> Address {
    self.origin
  }

  fn caller(&self) -> Address {
    self.caller
  }

  fn call_value(&self) -> Word {
    self.call_value
  }

  fn block_hash(&self, number: u64) -> Word {
    Word::from_u64(number)
  }

  fn coinbase(&self) -> Address {
    self.coinbase
  }

  fn timestamp(&self) -> u64 {
    self.timestamp
  }

  fn block_number(&self) -> Word {
    self.block_number
  }

  fn difficulty(&self) -> Word {
    self.difficulty
  }

  fn gas_limit(&self) -> u64 {
    self.gas_limit
  }

  fn storage_set(&mut self, key: &[u8], value: &[u8]) {
    self.storage.insert(key.to_vec(), value.to_vec());
  }

  fn storage_get(&self, key: &[u8]) -> Option<Vec<u8>> {
    self.storage.get(key).cloned()
  }

  fn debug(&self, message: &str) {
    tracing::debug!(target: "pvm_mock_host", "{message}");
  }

  fn set_return(&mut self, data: Vec<u8>) {
    self.output.stage(data);
  }

  fn return_data(&self) -> Option<Vec<u8>> {
    self.output.peek().map(<[u8]>::to_vec)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn storage_upserts() {
    let mut host = MockHost::new();
    assert_eq!(host.storage_get(b"k"), None);
    host.storage_set(b"k", b"v1");
    host.storage_set(b"k", b"v2");
    assert_eq!(host.storage_get(b"k"), Some(b"v2".to_vec()));
  }

  #[test]
  fn unknown_account_has_zero_balance() {
    let host = MockHost::new();
    assert_eq!(host.balance(&Address([9u8; 20])), Word::default());
  }

  #[test]
  fn block_hash_fixture_encodes_the_number() {
    let host = MockHost::new();
    assert_eq!(host.block_hash(7).as_u64(), 7);
  }

  #[test]
  fn return_data_is_last_write() {
    let mut host = MockHost::new();
    assert_eq!(host.return_data(), None);
    host.set_return(b"a".to_vec());
    host.set_return(b"b".to_vec());
    assert_eq!(host.return_data(), Some(b"b".to_vec()));
  }
}
