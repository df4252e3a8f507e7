//! Output formatters turning tool envelopes into MCP content.

mod json;

pub use self::json::*;
