//! Win verification.

pub mod policy;

pub use policy::{has_complete_line, ClaimPolicy, LineOnly, MarkAndProve, Verdict};
