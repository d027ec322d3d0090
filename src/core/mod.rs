//! Core gateway functionality
//!
//! The rate limiter is the designed core; billing is a thin pass-through to
//! the external payment provider.

pub mod billing;
pub mod rate_limiter;
