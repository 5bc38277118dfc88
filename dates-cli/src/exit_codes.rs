//! Process exit codes.
//!
//! A wrong number of arguments is rejected by clap itself, which exits with 2.

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1; // Open, read, write or seen-set capacity failure
