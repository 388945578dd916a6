mod mail;
mod service;

pub use mail::*;
pub use service::*;
