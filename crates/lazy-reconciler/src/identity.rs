//! Identifier and change-label generation

use crate::{IdFormat, ReconcilerConfig};
use chrono::Utc;
use lazy_domain::traits::IdentitySource;
use lazy_domain::RecordId;
use rand::Rng;
use std::cell::Cell;

/// Identity source backed by the system clock and RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity {
    config: ReconcilerConfig,
}

impl SystemIdentity {
    /// Create a new SystemIdentity with the given configuration
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }
}

impl IdentitySource for SystemIdentity {
    fn new_id(&self) -> RecordId {
        match self.config.id_format {
            IdFormat::UuidV7 => RecordId::new_v7(),
            IdFormat::Decimal => {
                let value: u64 = rand::thread_rng().gen_range(0..=i64::MAX as u64);
                RecordId::from_value(value.to_string())
            }
        }
    }

    fn now_label(&self) -> String {
        self.config.timestamp_format.render(&Utc::now())
    }
}

/// Deterministic identity source
///
/// Hands out `<prefix>-1`, `<prefix>-2`, ... as identifiers and `t1`,
/// `t2`, ... as change labels. Every call advances its own counter.
#[derive(Debug, Default)]
pub struct SequenceIdentity {
    prefix: String,
    ids: Cell<u64>,
    ticks: Cell<u64>,
}

impl SequenceIdentity {
    /// Create a sequence whose identifiers start with `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ids: Cell::new(0),
            ticks: Cell::new(0),
        }
    }

    /// Number of change labels handed out so far
    pub fn ticks(&self) -> u64 {
        self.ticks.get()
    }
}

impl IdentitySource for SequenceIdentity {
    fn new_id(&self) -> RecordId {
        let next = self.ids.get() + 1;
        self.ids.set(next);
        RecordId::from_value(format!("{}-{}", self.prefix, next))
    }

    fn now_label(&self) -> String {
        let next = self.ticks.get() + 1;
        self.ticks.set(next);
        format!("t{}", next)
    }
}
