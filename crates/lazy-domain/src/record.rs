//! Record module - the persisted entity and the submissions that shape it

use crate::schema::{ATTR_EXPLICITLY, ATTR_ID, ATTR_INITIALLY, ATTR_LAST_UPDATED, ATTR_RESULT};
use crate::Field;
use std::fmt;

/// Opaque identifier of a record
///
/// Assigned once, at creation or import, and never recomputed. The host
/// treats it as an opaque string, so both UUIDv7 text and plain decimal
/// identifiers are valid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    ///
    /// # Examples
    ///
    /// ```
    /// use lazy_domain::RecordId;
    ///
    /// let id = RecordId::new_v7();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new_v7() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an identifier handed back by the host
    pub fn from_value(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the visible value: the override wins, otherwise the baseline
///
/// Returns `None` when neither input is present.
pub fn derive_result<'a>(initially: Option<&'a str>, explicitly: Option<&'a str>) -> Option<&'a str> {
    explicitly.or(initially)
}

/// A persisted record as the host stores it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier, immutable once set
    pub id: RecordId,

    /// Label of the moment `result` last changed
    pub last_updated: String,

    /// The derived canonical value
    pub result: String,

    /// Baseline input
    pub initially: Option<String>,

    /// Override input
    pub explicitly: Option<String>,
}

/// Inputs submitted for one lifecycle event
///
/// `last_updated` is the change label the host proposes; `None` means it
/// is not known until apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proposal {
    /// Baseline input as submitted
    pub initially: Field<String>,

    /// Override input as submitted
    pub explicitly: Field<String>,

    /// Change label proposed by the host
    pub last_updated: Option<String>,
}

impl Proposal {
    /// Create a proposal from the two inputs with an unknown change label
    pub fn new(initially: Field<String>, explicitly: Field<String>) -> Self {
        Self {
            initially,
            explicitly,
            last_updated: None,
        }
    }
}

/// What the host asks the reconciler to preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposedChange {
    /// The record is being removed; nothing to reconcile
    Remove,

    /// New inputs were submitted
    Submit(Proposal),
}

/// A previewed record, handed back by the host at apply time
///
/// Every field may still be unknown (`None`): the identifier before
/// creation, the change label until it is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannedRecord {
    /// Identifier, known once the record exists
    pub id: Option<RecordId>,

    /// Change label as proposed
    pub last_updated: Option<String>,

    /// Previewed result
    pub result: Option<String>,

    /// Baseline after carry-forward
    pub initially: Option<String>,

    /// Override after carry-forward
    pub explicitly: Option<String>,
}

impl PlannedRecord {
    /// Names of the attributes whose planned value differs from `stored`
    pub fn changed_attributes(&self, stored: &Record) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.id.as_ref() != Some(&stored.id) {
            changed.push(ATTR_ID);
        }
        if self.last_updated.as_deref() != Some(stored.last_updated.as_str()) {
            changed.push(ATTR_LAST_UPDATED);
        }
        if self.result.as_deref() != Some(stored.result.as_str()) {
            changed.push(ATTR_RESULT);
        }
        if self.initially != stored.initially {
            changed.push(ATTR_INITIALLY);
        }
        if self.explicitly != stored.explicitly {
            changed.push(ATTR_EXPLICITLY);
        }
        changed
    }
}

impl From<Record> for PlannedRecord {
    fn from(record: Record) -> Self {
        Self {
            id: Some(record.id),
            last_updated: Some(record.last_updated),
            result: Some(record.result),
            initially: record.initially,
            explicitly: record.explicitly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_record() -> Record {
        Record {
            id: RecordId::from_value("1234"),
            last_updated: "Monday, 19-Oct-26 10:00:00 UTC".to_string(),
            result: "explicit_value".to_string(),
            initially: Some("initial_value".to_string()),
            explicitly: Some("explicit_value".to_string()),
        }
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(derive_result(Some("base"), Some("over")), Some("over"));
    }

    #[test]
    fn test_baseline_fallback() {
        assert_eq!(derive_result(Some("base"), None), Some("base"));
        assert_eq!(derive_result(None, None), None);
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::from_value("5577006791947779410");
        assert_eq!(id.to_string(), "5577006791947779410");
        assert_eq!(id.as_str(), "5577006791947779410");
    }

    #[test]
    fn test_record_ids_are_unique() {
        assert_ne!(RecordId::new_v7(), RecordId::new_v7());
    }

    #[test]
    fn test_unchanged_plan_has_no_changed_attributes() {
        let stored = stored_record();
        let planned = PlannedRecord::from(stored.clone());
        assert!(planned.changed_attributes(&stored).is_empty());
    }

    #[test]
    fn test_changed_attributes_lists_differences() {
        let stored = stored_record();
        let mut planned = PlannedRecord::from(stored.clone());
        planned.explicitly = None;
        planned.result = Some("initial_value".to_string());
        planned.last_updated = None;

        assert_eq!(
            planned.changed_attributes(&stored),
            vec![ATTR_LAST_UPDATED, ATTR_RESULT, ATTR_EXPLICITLY]
        );
    }

    #[test]
    fn test_unknown_id_counts_as_change() {
        let stored = stored_record();
        let mut planned = PlannedRecord::from(stored.clone());
        planned.id = None;
        assert_eq!(planned.changed_attributes(&stored), vec![ATTR_ID]);
    }
}
