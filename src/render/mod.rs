//! Rendering module: maps parse responses to records and writes them as JSON.

mod json;
mod mapper;

pub use json::{to_json, write_json, JsonFormat};
pub use mapper::{to_record, to_records};
