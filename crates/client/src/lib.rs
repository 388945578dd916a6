//! Form encoder for the contact relay.
//!
//! Collects the inquiry fields and attachments, rejects what the relay would
//! reject before touching the network, and posts one `multipart/form-data`
//! request.

mod client;
mod control;
mod error;
mod form;

pub use client::*;
pub use control::*;
pub use error::*;
pub use form::*;
