//! Boundary types for laneboard's external collaborators
//!
//! Laneboard delegates durability and identity to hosted services. This crate
//! defines the two collaborator traits at that boundary:
//!
//! - [`RemoteStore`] - a document-oriented database addressed by collection
//!   name and document id, with array-union and whole-field-set update
//!   semantics and owner-equality queries
//! - [`AuthProvider`] - session-based identity with a current-user accessor,
//!   sign-out, and a watch-based subscription to session changes
//!
//! [`MemoryRemote`] and [`MemoryAuth`] are complete in-memory implementations.
//! They back the test suite (including call counting and write-failure
//! injection) and serve as the reference for adapters against real hosted
//! providers.

mod auth;
mod document;
mod error;
mod ids;
mod store;

pub use auth::{AuthProvider, MemoryAuth};
pub use document::{Document, Fields, FieldUpdate, Filter};
pub use error::{AuthError, RemoteError};
pub use ids::{DocumentId, UserId};
pub use store::{MemoryRemote, RemoteStore};

/// Result type for remote store operations
pub type Result<T> = std::result::Result<T, RemoteError>;
