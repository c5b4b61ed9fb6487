//! Row structs.
//!
//! Rows serialize straight to the wire format; date and time columns go
//! through the codec in [`wire`].

pub mod session;
pub mod session_exercise;
pub mod wire;
