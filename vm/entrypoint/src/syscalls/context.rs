//! Context and chain-fact queries. Each writes into a caller-owned buffer
//! of the entity's fixed size and returns the raw status word; on a
//! nonzero status the buffer contents are undefined.

use pvm_interface::SyscallCode;

use crate::syscalls::syscall;

/// Writes the executing account's address into `address`.
///
/// # Safety
/// `address` must be valid for writes of 20 bytes.
pub unsafe fn sys_address(address: *mut u8) -> u64 {
  syscall(SyscallCode::Address, [address as u64, 0, 0, 0, 0, 0])
}

/// Writes the balance of the account at `address` into `value`.
///
/// # Safety
/// `address` must be valid for reads of 20 bytes and `value` for writes
/// of 32 bytes.
pub unsafe fn sys_balance(address: *const u8, value: *mut u8) -> u64 {
  syscall(
    SyscallCode::Balance,
    [address as u64, value as u64, 0, 0, 0, 0],
  )
}

/// Writes the address that initiated the top-level call chain.
///
/// # Safety
/// `address` must be valid for writes of 20 bytes.
pub unsafe fn sys_origin(address: *mut u8) -> u64 {
  syscall(SyscallCode::Origin, [address as u64, 0, 0, 0, 0, 0])
}

/// Writes the address of the immediate invoker.
///
/// # Safety
/// `address` must be valid for writes of 20 bytes.
pub unsafe fn sys_caller(address: *mut u8) -> u64 {
  syscall(SyscallCode::Caller, [address as u64, 0, 0, 0, 0, 0])
}

/// Writes the amount attached to the current invocation.
///
/// # Safety
/// `value` must be valid for writes of 32 bytes.
pub unsafe fn sys_callvalue(value: *mut u8) -> u64 {
  syscall(SyscallCode::CallValue, [value as u64, 0, 0, 0, 0, 0])
}

/// Writes the hash of block `number` into `hash`.
///
/// # Safety
/// `hash` must be valid for writes of 32 bytes.
pub unsafe fn sys_blockhash(number: u64, hash: *mut u8) -> u64 {
  syscall(SyscallCode::BlockHash, [number, hash as u64, 0, 0, 0, 0])
}

/// Writes the block proposer's address.
///
/// # Safety
/// `address` must be valid for writes of 20 bytes.
pub unsafe fn sys_coinbase(address: *mut u8) -> u64 {
  syscall(SyscallCode::Coinbase, [address as u64, 0, 0, 0, 0, 0])
}

/// Stores the current block time into `timestamp`.
///
/// # Safety
/// `timestamp` must be valid for a `u64` write.
pub unsafe fn sys_timestamp(timestamp: *mut u64) -> u64 {
  syscall(SyscallCode::Timestamp, [timestamp as u64, 0, 0, 0, 0, 0])
}

/// Writes the current block height.
///
/// # Safety
/// `number` must be valid for writes of 32 bytes.
pub unsafe fn sys_number(number: *mut u8) -> u64 {
  syscall(SyscallCode::Number, [number as u64, 0, 0, 0, 0, 0])
}

/// Writes the current block difficulty.
///
/// # Safety
/// `difficulty` must be valid for writes of 32 bytes.
pub unsafe fn sys_difficulty(difficulty: *mut u8) -> u64 {
  syscall(SyscallCode::Difficulty, [difficulty as u64, 0, 0, 0, 0, 0])
}

/// Stores the current block's gas ceiling into `gas_limit`.
///
/// # Safety
/// `gas_limit` must be valid for a `u64` write.
pub unsafe fn sys_gaslimit(gas_limit: *mut u64) -> u64 {
  syscall(SyscallCode::GasLimit, [gas_limit as u64, 0, 0, 0, 0, 0])
}
