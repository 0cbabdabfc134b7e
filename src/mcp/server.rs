//! MCP Server handler for the TMDb API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    mcp::{DetailsParams, PopularParams, SearchParams},
    TmdbClient, TmdbError, DEFAULT_PAGE,
};

/// TMDb MCP Server.
///
/// Implements the MCP ServerHandler trait, providing tools to query
/// The Movie Database through the Model Context Protocol.
///
/// # Tools
///
/// - `popular_movies` - One page of currently popular movies
/// - `search_movies` - Search movies by title
/// - `movie_details` - Full details for one movie id
#[derive(Clone)]
pub struct TmdbServer {
    client: Arc<TmdbClient>,
}

impl TmdbServer {
    /// Create a new TmdbServer from environment variables.
    ///
    /// Uses `TMDB_API_KEY` for authentication and optionally `TMDB_API_URL`
    /// for the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn from_env() -> crate::Result<Self> {
        let client = TmdbClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new TmdbServer with an existing client.
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert TmdbError to McpError.
    fn to_mcp_error(err: TmdbError) -> McpError {
        match &err {
            TmdbError::InvalidRequest(msg) => McpError::invalid_params(msg.clone(), None),
            e if e.is_not_found() => McpError::resource_not_found(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `popular_movies` tool.
    pub async fn handle_popular(&self, params: PopularParams) -> Result<CallToolResult, McpError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let movies = self
            .client
            .fetch_popular_movies(page)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&movies)
    }

    /// Handle the `search_movies` tool.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for a blank query without contacting the API.
    pub async fn handle_search(&self, params: SearchParams) -> Result<CallToolResult, McpError> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let movies = self
            .client
            .search_movies(&params.query, page)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&movies)
    }

    /// Handle the `movie_details` tool.
    pub async fn handle_details(&self, params: DetailsParams) -> Result<CallToolResult, McpError> {
        let movie = self
            .client
            .fetch_movie_details(params.id)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&movie)
    }
}

impl ServerHandler for TmdbServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "tmdbapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "TMDb MCP Server - List popular movies, search titles, and fetch movie details."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "popular_movies",
                "List currently popular movies on TMDb, one page (20 movies) at a time.",
                Self::schema::<PopularParams>(),
            ),
            Tool::new(
                "search_movies",
                "Search TMDb movies by title. Returns one page of matches.",
                Self::schema::<SearchParams>(),
            ),
            Tool::new(
                "movie_details",
                "Fetch full details (genres, runtime, tagline, ratings) for a TMDb movie id.",
                Self::schema::<DetailsParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "popular_movies" => {
                let params: PopularParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_popular(params).await
            }
            "search_movies" => {
                let params: SearchParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_search(params).await
            }
            "movie_details" => {
                let params: DetailsParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_details(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
