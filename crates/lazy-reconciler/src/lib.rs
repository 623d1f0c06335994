//! Lazy Reconciler
//!
//! Computes the next persisted record from the stored record and the
//! submitted inputs.
//!
//! The Reconciler provides:
//! - Preview: carry omitted inputs forward, keep the stored identifier
//! - Create: assign a fresh identifier and change label
//! - Update: restamp the change label only when the result changes
//! - Import: seed both inputs and the result from an external value
//!
//! # Examples
//!
//! ```
//! use lazy_domain::Field;
//! use lazy_reconciler::{Reconciler, ReconcilerConfig, SystemIdentity};
//!
//! let reconciler = Reconciler::new(SystemIdentity::new(ReconcilerConfig::default()));
//!
//! let created = reconciler
//!     .apply(None, Field::from("initial_value"), Field::Omitted)?;
//! assert_eq!(created.result, "initial_value");
//!
//! // Omitting the baseline later is not a change
//! let updated = reconciler
//!     .apply(Some(&created), Field::Omitted, Field::Omitted)?;
//! assert_eq!(updated, created);
//! # Ok::<(), lazy_reconciler::ReconcileError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod identity;
mod reconciler;

pub use config::{IdFormat, ReconcilerConfig, TimestampFormat};
pub use error::ReconcileError;
pub use identity::{SequenceIdentity, SystemIdentity};
pub use reconciler::Reconciler;
