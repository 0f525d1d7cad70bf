//! # Clean Code & Design Patterns
//!
//! This crate contains isolated, self-contained modules illustrating clean
//! code rules and textbook design patterns in idiomatic Rust. The modules
//! share no state and do not compose with each other.
//!
//! ## Patterns Covered
//!
//! 1. **Clean Code Rules** - naming, small functions, magic numbers,
//!    comments, parameter counts, explicit errors, nesting depth
//! 2. **Singleton** - a shared registry behind one process-wide instance
//! 3. **Factory** - tag-dispatched construction of immutable records
//! 4. **Observer** - synchronous, in-order event notification
//! 5. **Strategy** - runtime-swappable behavior behind one call shape
//! 6. **Decorator** - incremental behavior via nested wrapping
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_clean_code
//! cargo run --bin p2_creational
//! cargo run --bin p3_structural
//! cargo run --bin p4_behavioral
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the per-module error types
//! - `serde` / `serde_json` - Typed JSON mapping and the registry's scalar values
//! - `tracing` - Warning log when a subscriber fails during notification
//! - `colored` - Section headers in the demo binaries

pub mod clean_code;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod registry;
pub mod strategy;
