//! SOLID principle examples.
//!
//! `srp` splits each workflow into single-purpose types; `dip` injects
//! behavior through traits instead of constructing concrete types inline.

pub mod dip;
pub mod srp;
