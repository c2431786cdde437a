//! Exit code constants for the envcreate CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable base directory)
//! - 2: Validation failure (prompt attempts exhausted)
//! - 3: Field table configuration error
//! - 4: Prompt/terminal failure
//! - 5: Filesystem write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable working directory.
pub const USER_ERROR: i32 = 1;

/// Validation failure: an answer was rejected more times than allowed.
pub const VALIDATION_FAILURE: i32 = 2;

/// Configuration error: the field table is malformed.
pub const CONFIG_ERROR: i32 = 3;

/// Prompt failure: the terminal could not be read from or written to.
pub const PROMPT_FAILURE: i32 = 4;

/// Write failure: the generated file could not be written.
pub const WRITE_FAILURE: i32 = 5;
