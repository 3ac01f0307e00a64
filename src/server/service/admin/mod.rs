//! Administrative services.
//!
//! Currently only the one-time code used to register the first admin account.

pub mod code;
