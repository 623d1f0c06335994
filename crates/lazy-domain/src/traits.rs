//! Trait definitions for external interactions
//!
//! These traits define the boundaries between reconciliation logic and
//! everything impure: randomness, the clock, and the host's buffers.

use crate::{PlannedRecord, ProposedChange, Record, RecordId};

/// Source of fresh identifiers and change labels
///
/// Implemented by `lazy-reconciler` (system clock and RNG) and by
/// deterministic test doubles.
pub trait IdentitySource {
    /// Produce an identifier that has never been handed out before
    fn new_id(&self) -> RecordId;

    /// Produce a label for the current moment
    fn now_label(&self) -> String;
}

/// Plan and state buffers of a single host request
///
/// The host owns durable storage; a resource only reads what the host
/// materialized for this request and writes back its answer. Every call
/// can fail, and a failed read must abort the request before any write.
pub trait StateBuffers {
    /// Error type for buffer access
    type Error;

    /// Read the stored record, `None` if it does not exist yet
    fn read_state(&self) -> Result<Option<Record>, Self::Error>;

    /// Read what the caller proposed for this request
    fn read_proposal(&self) -> Result<ProposedChange, Self::Error>;

    /// Read the previewed record handed back at apply time
    fn read_plan(&self) -> Result<Option<PlannedRecord>, Self::Error>;

    /// Write the previewed record
    fn write_plan(&mut self, plan: PlannedRecord) -> Result<(), Self::Error>;

    /// Write the committed record
    fn write_state(&mut self, record: Record) -> Result<(), Self::Error>;
}
