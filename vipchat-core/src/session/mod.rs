//! Chat session storage
//!
//! Local, fail-soft persistence of the session directory and per-session
//! message logs.

pub mod storage;
pub mod store;
pub mod types;

pub use storage::{BlobStorage, FileStorage, MemoryStorage};
pub use store::SessionStore;
pub use types::{ChatMessage, Role, SessionSummary};
