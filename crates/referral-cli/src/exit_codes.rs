//! Exit codes for the `referral` binary.
//! A failed evaluation still exits with SUCCESS; only generation decides the outcome.

pub const SUCCESS: i32 = 0;
pub const GENERATION_FAILED: i32 = 1; // Composer produced an empty email
pub const CONFIG_ERROR: i32 = 2; // Unreadable config or input file, bad arguments
