//! # API Layer
//!
//! Wire-level response types shared by every HTTP handler.

mod envelope;

pub use envelope::Envelope;
