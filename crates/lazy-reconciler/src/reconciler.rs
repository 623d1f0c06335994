//! Record reconciliation
//!
//! Computes the next record from the stored one and the submitted inputs.
//! The override wins when present, otherwise the baseline, otherwise the
//! stored result is kept. `last_updated` moves only when `result` does.

use crate::ReconcileError;
use lazy_domain::traits::IdentitySource;
use lazy_domain::{derive_result, Field, PlannedRecord, Proposal, ProposedChange, Record};
use tracing::{debug, info};

/// The Reconciler computes preview and commit transitions for a record
///
/// It holds no state besides its identity source; every call works on
/// values the host materialized for that call.
///
/// # Examples
///
/// ```
/// use lazy_domain::{Field, Proposal, ProposedChange};
/// use lazy_reconciler::{Reconciler, SequenceIdentity};
///
/// let reconciler = Reconciler::new(SequenceIdentity::new("rec"));
/// let proposal = Proposal::new(Field::from("initial_value"), Field::from("explicit_value"));
///
/// let plan = reconciler.preview(None, ProposedChange::Submit(proposal)).unwrap();
/// let record = reconciler.create(plan).unwrap();
/// assert_eq!(record.result, "explicit_value");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconciler<I> {
    identity: I,
}

impl<I: IdentitySource> Reconciler<I> {
    /// Create a new Reconciler drawing ids and labels from `identity`
    pub fn new(identity: I) -> Self {
        Self { identity }
    }

    /// Get a reference to the identity source
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Preview the record a submission would produce
    ///
    /// Returns `None` when the record is being removed. Omitted inputs
    /// carry the stored value forward, the stored identifier is kept, and
    /// `last_updated` is left exactly as the host proposed it.
    pub fn preview(&self, stored: Option<&Record>, proposed: ProposedChange) -> Option<PlannedRecord> {
        let proposal = match proposed {
            ProposedChange::Remove => {
                debug!("Record is being removed, skipping preview");
                return None;
            }
            ProposedChange::Submit(proposal) => proposal,
        };

        let initially = proposal
            .initially
            .resolve(stored.and_then(|r| r.initially.clone()));
        let explicitly = proposal
            .explicitly
            .resolve(stored.and_then(|r| r.explicitly.clone()));

        let result = derive_result(initially.as_deref(), explicitly.as_deref())
            .map(str::to_owned)
            .or_else(|| stored.map(|r| r.result.clone()));

        let plan = PlannedRecord {
            id: stored.map(|r| r.id.clone()),
            last_updated: proposal.last_updated,
            result,
            initially,
            explicitly,
        };

        debug!(
            "Previewed record id={:?} result={:?}",
            plan.id.as_ref().map(|id| id.as_str()),
            plan.result
        );
        Some(plan)
    }

    /// Commit a previewed record that has no stored predecessor
    ///
    /// Assigns a fresh identifier and stamps `last_updated` unconditionally.
    /// Fails when neither input is present, since there is no value to derive.
    pub fn create(&self, planned: PlannedRecord) -> Result<Record, ReconcileError> {
        let result = derive_result(planned.initially.as_deref(), planned.explicitly.as_deref())
            .map(str::to_owned)
            .ok_or_else(|| {
                ReconcileError::Validation(
                    "one of `initially` or `explicitly` must be set on create".to_string(),
                )
            })?;

        let record = Record {
            id: self.identity.new_id(),
            last_updated: self.identity.now_label(),
            result,
            initially: planned.initially,
            explicitly: planned.explicitly,
        };

        info!("Created record {} with result {:?}", record.id, record.result);
        Ok(record)
    }

    /// Commit a previewed record over the stored one
    ///
    /// The identifier is copied from `stored`. `last_updated` is restamped
    /// only if the recomputed result differs from the stored result.
    pub fn update(&self, stored: &Record, planned: PlannedRecord) -> Result<Record, ReconcileError> {
        let result = derive_result(planned.initially.as_deref(), planned.explicitly.as_deref())
            .map(str::to_owned)
            .unwrap_or_else(|| stored.result.clone());

        let changed = result != stored.result;
        let last_updated = if changed {
            self.identity.now_label()
        } else {
            stored.last_updated.clone()
        };

        if let Some(planned_id) = &planned.id {
            if planned_id != &stored.id {
                debug!(
                    "Ignoring planned id {} for stored record {}",
                    planned_id, stored.id
                );
            }
        }

        let record = Record {
            id: stored.id.clone(),
            last_updated,
            result,
            initially: planned.initially,
            explicitly: planned.explicitly,
        };

        info!(
            "Updated record {} (result changed: {}, last_updated: {})",
            record.id, changed, record.last_updated
        );
        Ok(record)
    }

    /// Bootstrap a record from an externally known value
    ///
    /// The value seeds both inputs and the result, as though it had been
    /// supplied explicitly on both channels. The identifier and change
    /// label are fresh, as in [`Reconciler::create`].
    pub fn import(&self, external_id: &str) -> Result<Record, ReconcileError> {
        if external_id.is_empty() {
            return Err(ReconcileError::Validation(
                "import identifier must not be empty".to_string(),
            ));
        }

        let planned = PlannedRecord {
            initially: Some(external_id.to_string()),
            explicitly: Some(external_id.to_string()),
            ..Default::default()
        };
        let record = self.create(planned)?;

        info!("Imported record {} from {:?}", record.id, external_id);
        Ok(record)
    }

    /// Preview and commit a submission in one step
    ///
    /// Convenience for hosts that do not separate planning from applying.
    pub fn apply(
        &self,
        stored: Option<&Record>,
        initially: Field<String>,
        explicitly: Field<String>,
    ) -> Result<Record, ReconcileError> {
        let proposal = Proposal {
            initially,
            explicitly,
            last_updated: stored.map(|r| r.last_updated.clone()),
        };
        let planned = self
            .preview(stored, ProposedChange::Submit(proposal))
            .ok_or_else(|| ReconcileError::Validation("submission produced no plan".to_string()))?;

        match stored {
            None => self.create(planned),
            Some(stored) => self.update(stored, planned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceIdentity;
    use lazy_domain::RecordId;

    fn reconciler() -> Reconciler<SequenceIdentity> {
        Reconciler::new(SequenceIdentity::new("rec"))
    }

    fn submit(initially: Field<String>, explicitly: Field<String>) -> ProposedChange {
        ProposedChange::Submit(Proposal::new(initially, explicitly))
    }

    fn stored_record() -> Record {
        Record {
            id: RecordId::from_value("stored-id"),
            last_updated: "t0".to_string(),
            result: "explicit_value".to_string(),
            initially: Some("initial_value".to_string()),
            explicitly: Some("explicit_value".to_string()),
        }
    }

    #[test]
    fn test_preview_removal_returns_nothing() {
        let stored = stored_record();
        assert!(reconciler()
            .preview(Some(&stored), ProposedChange::Remove)
            .is_none());
    }

    #[test]
    fn test_preview_new_record() {
        let plan = reconciler()
            .preview(None, submit("initial_value".into(), "explicit_value".into()))
            .unwrap();

        assert_eq!(plan.id, None);
        assert_eq!(plan.last_updated, None);
        assert_eq!(plan.result.as_deref(), Some("explicit_value"));
        assert_eq!(plan.initially.as_deref(), Some("initial_value"));
    }

    #[test]
    fn test_preview_keeps_stored_id() {
        let stored = stored_record();
        let plan = reconciler()
            .preview(Some(&stored), submit("other".into(), Field::Omitted))
            .unwrap();
        assert_eq!(plan.id, Some(stored.id));
    }

    #[test]
    fn test_preview_carries_omitted_override() {
        let stored = stored_record();
        let plan = reconciler()
            .preview(Some(&stored), submit("initial_value".into(), Field::Omitted))
            .unwrap();

        assert_eq!(plan.explicitly.as_deref(), Some("explicit_value"));
        assert_eq!(plan.result.as_deref(), Some("explicit_value"));
    }

    #[test]
    fn test_preview_cleared_override_falls_back() {
        let stored = stored_record();
        let plan = reconciler()
            .preview(Some(&stored), submit(Field::Omitted, Field::Cleared))
            .unwrap();

        assert_eq!(plan.explicitly, None);
        assert_eq!(plan.result.as_deref(), Some("initial_value"));
    }

    #[test]
    fn test_preview_everything_cleared_keeps_stored_result() {
        let stored = stored_record();
        let plan = reconciler()
            .preview(Some(&stored), submit(Field::Cleared, Field::Cleared))
            .unwrap();

        assert_eq!(plan.initially, None);
        assert_eq!(plan.explicitly, None);
        assert_eq!(plan.result.as_deref(), Some("explicit_value"));
    }

    #[test]
    fn test_preview_passes_proposed_label_through() {
        let stored = stored_record();
        let mut proposal = Proposal::new("changed".into(), Field::Cleared);
        proposal.last_updated = Some("proposed".to_string());

        let plan = reconciler()
            .preview(Some(&stored), ProposedChange::Submit(proposal))
            .unwrap();
        assert_eq!(plan.last_updated.as_deref(), Some("proposed"));
    }

    #[test]
    fn test_create_assigns_id_and_label() {
        let reconciler = reconciler();
        let plan = reconciler
            .preview(None, submit("initial_value".into(), Field::Omitted))
            .unwrap();
        let record = reconciler.create(plan).unwrap();

        assert_eq!(record.id.as_str(), "rec-1");
        assert_eq!(record.last_updated, "t1");
        assert_eq!(record.result, "initial_value");
        assert_eq!(record.explicitly, None);
    }

    #[test]
    fn test_create_without_inputs_fails() {
        let reconciler = reconciler();
        let err = reconciler.create(PlannedRecord::default()).unwrap_err();

        assert!(matches!(err, ReconcileError::Validation(_)));
        assert_eq!(reconciler.identity().ticks(), 0);
    }

    #[test]
    fn test_update_same_result_keeps_label() {
        let reconciler = reconciler();
        let stored = stored_record();
        let mut planned = PlannedRecord::from(stored.clone());
        planned.initially = Some("new_baseline".to_string());

        let record = reconciler.update(&stored, planned).unwrap();
        assert_eq!(record.result, "explicit_value");
        assert_eq!(record.last_updated, "t0");
        assert_eq!(record.initially.as_deref(), Some("new_baseline"));
    }

    #[test]
    fn test_update_changed_result_restamps_label() {
        let reconciler = reconciler();
        let stored = stored_record();
        let mut planned = PlannedRecord::from(stored.clone());
        planned.explicitly = Some("new_value".to_string());

        let record = reconciler.update(&stored, planned).unwrap();
        assert_eq!(record.result, "new_value");
        assert_eq!(record.last_updated, "t1");
        assert_eq!(record.id, stored.id);
    }

    #[test]
    fn test_update_never_replaces_id() {
        let stored = stored_record();
        let mut planned = PlannedRecord::from(stored.clone());
        planned.id = Some(RecordId::from_value("intruder"));

        let record = reconciler().update(&stored, planned).unwrap();
        assert_eq!(record.id, stored.id);
    }

    #[test]
    fn test_import_seeds_both_inputs() {
        let record = reconciler().import("imported_value").unwrap();

        assert_eq!(record.id.as_str(), "rec-1");
        assert_eq!(record.last_updated, "t1");
        assert_eq!(record.result, "imported_value");
        assert_eq!(record.initially.as_deref(), Some("imported_value"));
        assert_eq!(record.explicitly.as_deref(), Some("imported_value"));
    }

    #[test]
    fn test_import_empty_id_fails() {
        assert!(matches!(
            reconciler().import(""),
            Err(ReconcileError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_create_then_omit() {
        let reconciler = reconciler();
        let created = reconciler
            .apply(None, "initial_value".into(), "explicit_value".into())
            .unwrap();

        let updated = reconciler
            .apply(Some(&created), "initial_value".into(), Field::Omitted)
            .unwrap();

        assert_eq!(updated, created);
    }
}
