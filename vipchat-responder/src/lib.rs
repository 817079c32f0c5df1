//! Reply backends for vipchat
//!
//! A responder produces the assistant's reply for a user message. The only
//! implementation today is [`CannedResponder`], a keyword matcher over a
//! fixed table of replies; the trait is the seam where a real chat API
//! backend will plug in.

pub mod base;
pub mod canned;

pub use base::{Responder, ResponderError, ResponderResult};
pub use canned::CannedResponder;
