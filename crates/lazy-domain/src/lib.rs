//! Lazy Domain Layer
//!
//! This crate contains the data model for lazily reconciled values and the
//! trait interfaces that the reconciler and the plugin host meet at.
//! Apart from `uuid` it has no external dependencies.
//!
//! ## Key Concepts
//!
//! - **Record**: The persisted entity - an identifier, a change label, the
//!   derived `result` and the two inputs it was derived from
//! - **Field**: A three-valued input (omitted, cleared, value) as submitted
//!   by the host
//! - **Baseline / Override**: The `initially` and `explicitly` inputs; the
//!   override wins when present, otherwise the baseline
//! - **Carry-forward**: An omitted input keeps its stored value
//!
//! ## Architecture
//!
//! - No infrastructure code
//! - Randomness, time and host buffers sit behind traits in [`traits`]
//! - Reconciliation logic lives in `lazy-reconciler`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use field::Field;
pub use record::{derive_result, PlannedRecord, Proposal, ProposedChange, Record, RecordId};
pub use schema::{Attribute, AttributeKind, AttributeMode, ResourceSchema};
