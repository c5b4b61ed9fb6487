//! Domain logic for the boxing training log.
//!
//! Everything in this crate is pure: payload normalization, exercise variant
//! validation, weight unit conversion and the date/time codec used at the
//! wire and storage boundaries. No I/O happens here.

pub mod error;
pub mod exercise;
pub mod normalize;
pub mod session;
pub mod temporal;
pub mod types;
pub mod units;
