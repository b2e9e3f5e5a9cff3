//! Test-only crate; see `tests/source_invariants.rs`.
