//! Classic object-oriented design patterns, rendered as small Rust modules.
//!
//! Each module is a self-contained study of one pattern with console-visible
//! behavior, built for reading side by side:
//!
//! - [`strategy`] — interchangeable algorithms behind one owning holder
//! - [`factory`] — creators that allocate one task variant per call
//! - [`state`] — a holder whose requests follow its current mode
//! - [`singleton`] — one lazily created process-wide instance
//! - [`adapter`] — a target-compatible wrapper over an incompatible callee
//! - [`decorator`] — stackable wrappers extending a component's output
//! - [`observer`] — a subject broadcasting to non-owning listeners
//!
//! The demo binaries walk the catalog:
//!
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural
//! cargo run --bin p3_behavioral
//! cargo run --bin p4_walkthrough
//! ```

pub mod adapter;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod state;
pub mod strategy;

pub use error::{PatternError, Result};

// ============================================================================
// Tests
// ============================================================================
