//! Exit code constants for the mercato CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing files)
//! - 2: Configuration failure (malformed brief, out-of-set values)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing brief file, or unwritable output.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: malformed brief file or an out-of-set enum value.
pub const CONFIG_FAILURE: i32 = 2;
