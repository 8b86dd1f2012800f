//! CSV serialization of exported product records.

pub mod error;
pub mod writer;

pub use error::ExportError;
pub use writer::{save, write_records};
