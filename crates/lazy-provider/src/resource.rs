//! The `string` resource: host request handlers around the Reconciler

use crate::ProviderError;
use lazy_domain::traits::{IdentitySource, StateBuffers};
use lazy_domain::ResourceSchema;
use lazy_reconciler::Reconciler;
use std::fmt::Display;
use tracing::debug;

/// Resource whose `result` is lazily reconciled from `initially` and `explicitly`
///
/// Each handler reads what the host materialized in its buffers, asks the
/// Reconciler for the answer and writes it back. A failed read aborts the
/// handler before anything is written.
#[derive(Debug)]
pub struct LazyStringResource<I> {
    type_name: String,
    schema: ResourceSchema,
    reconciler: Reconciler<I>,
}

impl<I: IdentitySource> LazyStringResource<I> {
    /// Create the resource for a provider named `provider_type_name`
    pub fn new(provider_type_name: &str, identity: I) -> Self {
        Self {
            type_name: format!("{}_string", provider_type_name),
            schema: ResourceSchema::lazy_string(),
            reconciler: Reconciler::new(identity),
        }
    }

    /// Resource type name, e.g. `lazy_string`
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Attribute layout
    pub fn schema(&self) -> &ResourceSchema {
        &self.schema
    }

    /// Get a reference to the underlying reconciler
    pub fn reconciler(&self) -> &Reconciler<I> {
        &self.reconciler
    }

    /// Plan-time hook: write the previewed record into the plan buffer
    ///
    /// Does nothing while the record is being removed.
    pub fn modify_plan<B>(&self, buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
        B::Error: Display,
    {
        let proposed = buffers
            .read_proposal()
            .map_err(|e| ProviderError::buffer("read proposed plan", e))?;
        let stored = buffers
            .read_state()
            .map_err(|e| ProviderError::buffer("read prior state", e))?;

        if let Some(plan) = self.reconciler.preview(stored.as_ref(), proposed) {
            buffers
                .write_plan(plan)
                .map_err(|e| ProviderError::buffer("write plan", e))?;
        }
        Ok(())
    }

    /// Commit a planned record that does not exist yet
    pub fn create<B>(&self, buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
        B::Error: Display,
    {
        let planned = buffers
            .read_plan()
            .map_err(|e| ProviderError::buffer("read plan", e))?
            .ok_or_else(|| ProviderError::Validation("create requires a planned record".to_string()))?;

        let record = self.reconciler.create(planned)?;
        buffers
            .write_state(record)
            .map_err(|e| ProviderError::buffer("write state", e))
    }

    /// Nothing to refresh: the host's stored record is authoritative
    pub fn read<B>(&self, _buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
    {
        debug!("Read of {} leaves stored state untouched", self.type_name);
        Ok(())
    }

    /// Commit a planned record over the stored one
    pub fn update<B>(&self, buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
        B::Error: Display,
    {
        let planned = buffers
            .read_plan()
            .map_err(|e| ProviderError::buffer("read plan", e))?
            .ok_or_else(|| ProviderError::Validation("update requires a planned record".to_string()))?;
        let stored = buffers
            .read_state()
            .map_err(|e| ProviderError::buffer("read prior state", e))?
            .ok_or_else(|| ProviderError::Validation("update requires a stored record".to_string()))?;

        let record = self.reconciler.update(&stored, planned)?;
        buffers
            .write_state(record)
            .map_err(|e| ProviderError::buffer("write state", e))
    }

    /// Nothing to tear down: the host drops the stored record itself
    pub fn delete<B>(&self, _buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
    {
        debug!("Delete of {} leaves removal to the host", self.type_name);
        Ok(())
    }

    /// Seed state from an import identifier
    pub fn import_state<B>(&self, import_id: &str, buffers: &mut B) -> Result<(), ProviderError>
    where
        B: StateBuffers,
        B::Error: Display,
    {
        let record = self.reconciler.import(import_id)?;
        buffers
            .write_state(record)
            .map_err(|e| ProviderError::buffer("write state", e))
    }
}
