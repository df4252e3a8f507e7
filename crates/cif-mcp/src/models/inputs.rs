//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::limits;
use crate::error::{ToolError, ToolResult};

/// Input for `search_cif`.
///
/// `query` is optional at the serde level so that its absence surfaces as
/// [`ToolError::MissingArgument`] instead of a generic parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCifInput {
    /// Material or topic (e.g. "LiCoO2", "lithium-ion battery materials").
    #[serde(default)]
    pub query: Option<String>,

    /// Maximum number of results (clamped to 1..=20, default 5).
    ///
    /// Kept as raw JSON: hosts send this as an integer, a float or a string.
    #[serde(default)]
    pub max_results: Option<Value>,
}

impl SearchCifInput {
    /// Create an input with an explicit limit.
    #[must_use]
    pub fn new(query: impl Into<String>, max_results: Option<i64>) -> Self {
        Self { query: Some(query.into()), max_results: max_results.map(Value::from) }
    }

    /// The search query.
    pub fn query(&self) -> ToolResult<&str> {
        self.query.as_deref().ok_or_else(|| ToolError::missing_argument("query"))
    }

    /// Result cap after applying the default and the accepted range.
    ///
    /// Accepts an integer, an integral float or a numeric string.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Validation`] for any other value.
    pub fn effective_max_results(&self) -> ToolResult<usize> {
        let Some(raw) = &self.max_results else {
            return Ok(limits::DEFAULT_MAX_RESULTS);
        };

        let n = parse_limit(raw).ok_or_else(|| {
            ToolError::validation("max_results", format!("expected an integer, got {raw}"))
        })?;

        Ok(usize::try_from(n)
            .unwrap_or(limits::MIN_MAX_RESULTS)
            .clamp(limits::MIN_MAX_RESULTS, limits::MAX_MAX_RESULTS))
    }
}

/// Integer value of a JSON limit, if it has one.
fn parse_limit(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            // Only u64 values above i64::MAX get here; they clamp to the maximum anyway
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// Input for `check_cif`. Both fields are optional; the empty call is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckCifInput {
    /// Title of the paper.
    #[serde(default)]
    pub paper_title: Option<String>,

    /// arXiv id of the paper (e.g. "2401.12345").
    #[serde(default)]
    pub paper_id: Option<String>,
}

impl CheckCifInput {
    fn title(&self) -> Option<&str> {
        self.paper_title.as_deref().filter(|s| !s.is_empty())
    }

    fn id(&self) -> Option<&str> {
        self.paper_id.as_deref().filter(|s| !s.is_empty())
    }

    /// Lowercased title and id joined by a space, or `None` when both are absent.
    #[must_use]
    pub fn search_text(&self) -> Option<String> {
        let parts: Vec<&str> = self.title().into_iter().chain(self.id()).collect();
        if parts.is_empty() { None } else { Some(parts.join(" ").to_lowercase()) }
    }

    /// Title echoed back in the response.
    #[must_use]
    pub fn display_title(&self) -> String {
        match (self.title(), self.paper_id.as_deref()) {
            (Some(title), _) => title.to_string(),
            (None, Some(id)) => format!("Paper {id}"),
            (None, None) => "Unknown paper".to_string(),
        }
    }
}
