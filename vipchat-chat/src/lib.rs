//! Chat engine for vipchat
//!
//! Drives one conversation: appends user messages to the session store,
//! simulates the assistant "typing", and appends the responder's reply.

pub mod engine;

pub use engine::{ChatEngine, SendOutcome};
