//! Collection types for the IBMF crates.
//!
//! Glyph tables and kerning caches are keyed by small integers, so the
//! crates use AHash instead of SipHash everywhere.

pub use ahash::AHashMap as HashMap;
