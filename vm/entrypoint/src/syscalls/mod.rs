mod trap;
pub use trap::syscall;

mod context;
pub use context::*;

mod storage;
pub use storage::*;

mod output;
pub use output::*;
