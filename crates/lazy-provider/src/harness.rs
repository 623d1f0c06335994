//! In-memory host for driving the resource through its lifecycle
//!
//! Plays the orchestrator's part: it owns the stored records, builds the
//! buffers for every request and decides whether a plan creates, updates
//! or leaves a record alone.

use crate::{LazyStringResource, ProviderError};
use lazy_domain::traits::{IdentitySource, StateBuffers};
use lazy_domain::{Field, PlannedRecord, Proposal, ProposedChange, Record};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::info;

/// Buffer access failure raised by the in-memory host
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// Reads were switched to fail
    #[error("injected failure reading {0}")]
    InjectedReadFailure(&'static str),
}

/// Input configuration of one resource block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Baseline input
    pub initially: Field<String>,

    /// Override input
    pub explicitly: Field<String>,
}

impl ResourceConfig {
    /// Configuration with both inputs omitted
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline input
    pub fn initially(mut self, value: impl Into<String>) -> Self {
        self.initially = Field::Value(value.into());
        self
    }

    /// Set the override input
    pub fn explicitly(mut self, value: impl Into<String>) -> Self {
        self.explicitly = Field::Value(value.into());
        self
    }

    /// Explicitly null the baseline input
    pub fn clear_initially(mut self) -> Self {
        self.initially = Field::Cleared;
        self
    }

    /// Explicitly null the override input
    pub fn clear_explicitly(mut self) -> Self {
        self.explicitly = Field::Cleared;
        self
    }
}

/// What applying a plan would do to a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// No stored record yet
    Create,

    /// Stored record differs from the plan
    Update,

    /// Plan matches the stored record
    NoOp,
}

/// Result of planning one resource block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    /// What apply would do
    pub action: PlanAction,

    /// Previewed record
    pub planned: PlannedRecord,

    /// Attributes that differ from the stored record
    pub changed_attributes: Vec<&'static str>,
}

/// Buffers of a single request
struct RequestBuffers {
    state: Option<Record>,
    proposal: ProposedChange,
    plan: Option<PlannedRecord>,
    written_state: Option<Record>,
    fail_reads: bool,
}

impl RequestBuffers {
    fn new(state: Option<Record>, proposal: ProposedChange, fail_reads: bool) -> Self {
        Self {
            state,
            proposal,
            plan: None,
            written_state: None,
            fail_reads,
        }
    }

    fn check(&self, what: &'static str) -> Result<(), HostError> {
        if self.fail_reads {
            return Err(HostError::InjectedReadFailure(what));
        }
        Ok(())
    }
}

impl StateBuffers for RequestBuffers {
    type Error = HostError;

    fn read_state(&self) -> Result<Option<Record>, Self::Error> {
        self.check("state")?;
        Ok(self.state.clone())
    }

    fn read_proposal(&self) -> Result<ProposedChange, Self::Error> {
        self.check("proposal")?;
        Ok(self.proposal.clone())
    }

    fn read_plan(&self) -> Result<Option<PlannedRecord>, Self::Error> {
        self.check("plan")?;
        Ok(self.plan.clone())
    }

    fn write_plan(&mut self, plan: PlannedRecord) -> Result<(), Self::Error> {
        self.plan = Some(plan);
        Ok(())
    }

    fn write_state(&mut self, record: Record) -> Result<(), Self::Error> {
        self.written_state = Some(record);
        Ok(())
    }
}

/// Orchestrator stand-in holding one stored record per resource address
pub struct InMemoryHost<I> {
    resource: LazyStringResource<I>,
    states: BTreeMap<String, Record>,
    fail_reads: bool,
}

impl<I: IdentitySource> InMemoryHost<I> {
    /// Create a host serving `resource` with no stored records
    pub fn new(resource: LazyStringResource<I>) -> Self {
        Self {
            resource,
            states: BTreeMap::new(),
            fail_reads: false,
        }
    }

    /// Get the served resource
    pub fn resource(&self) -> &LazyStringResource<I> {
        &self.resource
    }

    /// Stored record at `address`
    pub fn state(&self, address: &str) -> Option<&Record> {
        self.states.get(address)
    }

    /// Make every subsequent buffer read fail
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Preview `config` against the record stored at `address`
    pub fn plan(&self, address: &str, config: &ResourceConfig) -> Result<PlanOutcome, ProviderError> {
        let stored = self.states.get(address).cloned();

        // Computed attributes of an existing record are proposed as stored
        let proposal = Proposal {
            initially: config.initially.clone(),
            explicitly: config.explicitly.clone(),
            last_updated: stored.as_ref().map(|r| r.last_updated.clone()),
        };

        let mut buffers = RequestBuffers::new(
            stored.clone(),
            ProposedChange::Submit(proposal),
            self.fail_reads,
        );
        self.resource.modify_plan(&mut buffers)?;

        let planned = buffers
            .plan
            .ok_or_else(|| ProviderError::Validation("resource produced no plan".to_string()))?;

        let (action, changed_attributes) = match &stored {
            None => (
                PlanAction::Create,
                self.resource.schema().attributes().iter().map(|a| a.name).collect::<Vec<_>>(),
            ),
            Some(stored) => {
                let changed = planned.changed_attributes(stored);
                if changed.is_empty() {
                    (PlanAction::NoOp, changed)
                } else {
                    (PlanAction::Update, changed)
                }
            }
        };

        Ok(PlanOutcome {
            action,
            planned,
            changed_attributes,
        })
    }

    /// Plan and apply `config` at `address`, returning the stored record
    pub fn apply(&mut self, address: &str, config: &ResourceConfig) -> Result<Record, ProviderError> {
        let outcome = self.plan(address, config)?;
        let stored = self.states.get(address).cloned();

        if let (PlanAction::NoOp, Some(stored)) = (outcome.action, &stored) {
            info!("{}: no changes", address);
            return Ok(stored.clone());
        }

        let mut buffers = RequestBuffers::new(
            stored,
            ProposedChange::Submit(Proposal::default()),
            self.fail_reads,
        );
        buffers.plan = Some(outcome.planned);

        match outcome.action {
            PlanAction::Create => self.resource.create(&mut buffers)?,
            PlanAction::Update | PlanAction::NoOp => self.resource.update(&mut buffers)?,
        }

        let record = buffers
            .written_state
            .ok_or_else(|| ProviderError::Validation("resource wrote no state".to_string()))?;

        info!(
            "{}: {:?} complete (id={}, result={:?})",
            address, outcome.action, record.id, record.result
        );
        self.states.insert(address.to_string(), record.clone());
        Ok(record)
    }

    /// Bring an existing value under management at `address`
    pub fn import(&mut self, address: &str, import_id: &str) -> Result<Record, ProviderError> {
        if self.states.contains_key(address) {
            return Err(ProviderError::Validation(format!(
                "{} is already managed; remove it before importing",
                address
            )));
        }

        let mut buffers = RequestBuffers::new(None, ProposedChange::Remove, self.fail_reads);
        self.resource.import_state(import_id, &mut buffers)?;
        self.resource.read(&mut buffers)?;

        let record = buffers
            .written_state
            .ok_or_else(|| ProviderError::Validation("import wrote no state".to_string()))?;

        info!("{}: imported {:?} as {}", address, import_id, record.id);
        self.states.insert(address.to_string(), record.clone());
        Ok(record)
    }

    /// Remove the record at `address`; removing nothing is not an error
    pub fn destroy(&mut self, address: &str) -> Result<(), ProviderError> {
        let Some(stored) = self.states.get(address).cloned() else {
            return Ok(());
        };

        let mut buffers = RequestBuffers::new(Some(stored), ProposedChange::Remove, self.fail_reads);
        self.resource.modify_plan(&mut buffers)?;
        self.resource.delete(&mut buffers)?;

        self.states.remove(address);
        info!("{}: destroyed", address);
        Ok(())
    }
}
