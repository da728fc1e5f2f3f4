//! Property-based tests for the closure and acceptance laws.
//!
//! Run with: `cargo test --test property`

mod closure_laws;
