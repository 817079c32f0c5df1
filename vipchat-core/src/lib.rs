//! Core types and the session store for vipchat
//!
//! This crate provides the foundational pieces used by all other vipchat
//! components: the error type, configuration loading, logging setup, shared
//! constants, and the local chat-history session store.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
