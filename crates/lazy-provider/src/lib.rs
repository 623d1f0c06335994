//! Lazy Provider
//!
//! Adapts the Reconciler to a configuration-orchestration host. The host
//! owns durable state and hands each request its plan and state buffers;
//! this crate answers those requests.
//!
//! The provider serves a single resource type, `lazy_string`:
//!
//! | attribute | set by | meaning |
//! |-----------|--------|---------|
//! | `id` | resource | opaque identifier, assigned once |
//! | `last_updated` | resource | label of the last `result` change |
//! | `result` | resource | `explicitly` if set, else `initially` |
//! | `initially` | configuration | baseline input |
//! | `explicitly` | configuration | override input |
//!
//! Omitting an input keeps its stored value, so configurations that only
//! sometimes supply the override do not produce spurious changes.
//!
//! # Examples
//!
//! ```
//! use lazy_provider::harness::{InMemoryHost, PlanAction, ResourceConfig};
//! use lazy_provider::{LazyProvider, ProviderConfig};
//!
//! # fn main() -> Result<(), lazy_provider::ProviderError> {
//! let provider = LazyProvider::new(ProviderConfig::default())?;
//! let mut host = InMemoryHost::new(provider.resource("lazy_string")?);
//!
//! let config = ResourceConfig::new()
//!     .initially("initial_value")
//!     .explicitly("explicit_value");
//! let record = host.apply("lazy_string.test", &config)?;
//! assert_eq!(record.result, "explicit_value");
//!
//! // Dropping the override from configuration is not a change
//! let later = ResourceConfig::new().initially("initial_value");
//! assert_eq!(host.plan("lazy_string.test", &later)?.action, PlanAction::NoOp);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! type_name = "lazy"
//! version = "0.1.0"
//!
//! [reconciler]
//! id_format = "uuid_v7"
//! timestamp_format = "rfc850"
//! ```

#![warn(missing_docs)]

pub mod config;
mod error;
pub mod harness;
mod provider;
mod resource;

pub use config::{ConfigError, ProviderConfig};
pub use error::ProviderError;
pub use provider::{LazyProvider, ProviderMetadata};
pub use resource::LazyStringResource;
