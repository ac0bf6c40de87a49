//! Exit codes for the actiongen binary.

/// Every selected command generated successfully.
pub const EXIT_SUCCESS: i32 = 0;

/// The run failed, or at least one command failed to generate.
pub const EXIT_ERROR: i32 = 1;
