//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `popular_movies` MCP tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PopularParams {
    /// Page number (1-indexed, defaults to 1).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Parameters for the `search_movies` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Movie title to search for.
    pub query: String,
    /// Page number (1-indexed, defaults to 1).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Parameters for the `movie_details` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DetailsParams {
    /// TMDb movie id.
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_schema_generates() {
        let schema = schemars::schema_for!(SearchParams);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("query"));
        assert!(json.contains("page"));
    }

    #[test]
    fn details_params_schema_generates() {
        let schema = schemars::schema_for!(DetailsParams);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("id"));
    }

    #[test]
    fn popular_params_deserializes_with_defaults() {
        let params: PopularParams = serde_json::from_str("{}").unwrap();
        assert!(params.page.is_none());
    }

    #[test]
    fn search_params_deserializes() {
        let json = r#"{"query": "alien", "page": 2}"#;
        let params: SearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.query, "alien");
        assert_eq!(params.page, Some(2));
    }

    #[test]
    fn search_params_requires_query() {
        let result: Result<SearchParams, _> = serde_json::from_str(r#"{"page": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn details_params_rejects_non_numeric_id() {
        let result: Result<DetailsParams, _> = serde_json::from_str(r#"{"id": "abc"}"#);
        assert!(result.is_err());
    }
}
