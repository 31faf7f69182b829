//! Exit code constants for the lsedit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Settings could not be read, parsed or written
//! - 3: Command template could not be resolved
//! - 4: Editor process could not be started

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Settings file unreadable, malformed, or not writable.
pub const CONFIG_ERROR: i32 = 2;

/// Template is empty or resolves to no executable.
pub const RESOLVE_FAILURE: i32 = 3;

/// Process creation failed.
pub const LAUNCH_FAILURE: i32 = 4;
