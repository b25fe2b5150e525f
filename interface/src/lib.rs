//! # PVM Interface
//!
//! Wire-level types shared by both sides of the syscall boundary: the
//! fixed-size value shapes the host exchanges with guest programs, the
//! syscall number enumeration, status codes, and the host trait the
//! in-process mock implements.

use std::fmt;

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

pub mod host;
pub mod output;
mod syscall;

pub use host::{HostInterface, MockHost, MockHostInterface};
pub use output::OutputSlot;
pub use syscall::SyscallCode;

/// Byte length of an account address.
pub const ADDRESS_LENGTH: usize = 20;
/// Byte length of a word (balances, call value, block facts, hashes).
pub const WORD_LENGTH: usize = 32;

/// Raised by the checked conversions below when a slice is not exactly
/// the declared size of the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected exactly {expected} bytes, got {actual}")]
pub struct WrongLength {
  pub expected: usize,
  pub actual: usize,
}

/// A 20-byte account address, big-endian significant.
#[derive(
  Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize,
)]
pub struct Address(pub [u8; ADDRESS_LENGTH]);

impl Address {
  pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
    &self.0
  }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
  fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
    Address(bytes)
  }
}

impl TryFrom<&[u8]> for Address {
  type Error = WrongLength;

  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    let bytes: [u8; ADDRESS_LENGTH] = value.try_into().map_err(|_| WrongLength {
      expected: ADDRESS_LENGTH,
      actual: value.len(),
    })?;
    Ok(Address(bytes))
  }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

/// A 32-byte big-endian word.
#[derive(
  Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize,
)]
pub struct Word(pub [u8; WORD_LENGTH]);

impl Word {
  pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
    &self.0
  }

  /// The integer encoded big-endian into the trailing 8 bytes.
  pub fn from_u64(value: u64) -> Self {
    let mut bytes = [0u8; WORD_LENGTH];
    bytes[WORD_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
    Word(bytes)
  }

  /// The trailing 8 bytes, read big-endian. Higher bytes are ignored.
  pub fn as_u64(&self) -> u64 {
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&self.0[WORD_LENGTH - 8..]);
    u64::from_be_bytes(tail)
  }
}

impl From<[u8; WORD_LENGTH]> for Word {
  fn from(bytes: [u8; WORD_LENGTH]) -> Self {
    Word(bytes)
  }
}

impl TryFrom<&[u8]> for Word {
  type Error = WrongLength;

  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    let bytes: [u8; WORD_LENGTH] = value.try_into().map_err(|_| WrongLength {
      expected: WORD_LENGTH,
      actual: value.len(),
    })?;
    Ok(Word(bytes))
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

/// Raw status word returned in the result register by every syscall.
///
/// Zero is success; nonzero values are operation-local (see [`status`]),
/// there is no global failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawStatus(pub u64);

impl RawStatus {
  pub const SUCCESS: RawStatus = RawStatus(status::SUCCESS);

  pub fn is_success(self) -> bool {
    self.0 == status::SUCCESS
  }

  pub fn code(self) -> u64 {
    self.0
  }
}

/// Status codes used by the host. Each operation documents its own code
/// space; codes are only meaningful for the operation that returned them.
pub mod status {
  /// Returned by every operation on success.
  pub const SUCCESS: u64 = 0;
  /// Returned by `Load` when the key has never been saved. The output
  /// buffer is untouched.
  pub const NOT_FOUND: u64 = 1;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn address_conversion_checks_length() {
    let short = [0u8; ADDRESS_LENGTH - 1];
    let long = [0u8; ADDRESS_LENGTH + 1];
    assert_eq!(
      Address::try_from(&short[..]),
      Err(WrongLength {
        expected: ADDRESS_LENGTH,
        actual: ADDRESS_LENGTH - 1
      })
    );
    assert_eq!(
      Address::try_from(&long[..]),
      Err(WrongLength {
        expected: ADDRESS_LENGTH,
        actual: ADDRESS_LENGTH + 1
      })
    );
    let exact = [7u8; ADDRESS_LENGTH];
    assert_eq!(Address::try_from(&exact[..]), Ok(Address(exact)));
  }

  #[test]
  fn word_u64_is_big_endian_in_the_tail() {
    let word = Word::from_u64(0x0102_0304);
    assert_eq!(word.0[WORD_LENGTH - 1], 0x04);
    assert_eq!(word.0[WORD_LENGTH - 4], 0x01);
    assert!(word.0[..WORD_LENGTH - 8].iter().all(|b| *b == 0));
    assert_eq!(word.as_u64(), 0x0102_0304);
  }

  #[test]
  fn word_conversion_checks_length() {
    let short = [0u8; WORD_LENGTH - 1];
    assert!(Word::try_from(&short[..]).is_err());
    let exact = [9u8; WORD_LENGTH];
    assert_eq!(Word::try_from(&exact[..]), Ok(Word(exact)));
  }

  #[test]
  fn display_is_hex() {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - 1] = 0xff;
    assert_eq!(
      Address(bytes).to_string(),
      "0x00000000000000000000000000000000000000ff"
    );
  }

  #[test]
  fn raw_status_success() {
    assert!(RawStatus(0).is_success());
    assert!(!RawStatus(status::NOT_FOUND).is_success());
    assert_eq!(RawStatus::SUCCESS.code(), 0);
  }
}
