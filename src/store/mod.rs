//! Snapshot store for the fetched batch list.
//!
//! The portal fetches the batch list once per page load; everything that
//! follows (validation, conflict checks) treats it as a read-only snapshot.
//! The Repository pattern keeps that boundary swappable:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Services Layer (validation, conflict, submission)       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  BatchRepository Trait (repository.rs)                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │            LocalBatchStore                    │
//!     │              (in-memory)                      │
//!     └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod local;
pub mod repository;

pub use config::{StoreConfig, StoreSettings, StoreType};
pub use error::{ErrorContext, StoreError, StoreResult};
pub use local::LocalBatchStore;
pub use repository::BatchRepository;
