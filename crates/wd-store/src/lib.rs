//! Persistence layer for wd-core editing sessions: plain-file read at
//! open, full-file overwrite on persist, input and output always kept
//! distinct.

pub mod error;
pub mod session;

pub use error::{Result, StoreError};
pub use session::Session;
