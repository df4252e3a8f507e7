//! Data models: material records, tool inputs, response envelopes and MCP content.
//!
//! Tool inputs use snake_case keys, matching the published tool schemas.

mod content;
mod inputs;
mod material;
mod responses;

pub use content::{Content, ToolOutput};
pub use inputs::{CheckCifInput, SearchCifInput};
pub use material::MaterialRecord;
pub use responses::{
    CheckResponse, CheckResult, NO_CIF_FILES_MESSAGE, SearchResponse, SearchResult,
};
