use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use iconrec::{agentic::IconSuggester, catalog::IconCatalog, SuggestError, Suggestion};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub suggester: Arc<IconSuggester>,
}

// API types
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestRequest {
    // Kept loose so a missing or non-string query maps to a clean 400
    // instead of a deserialization rejection
    #[serde(default)]
    pub query: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("iconrec_web_server=info,iconrec=debug,tower_http=debug")
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Catalog is validated before we bind anything: a malformed registry
    // must never serve traffic
    let catalog = Arc::new(IconCatalog::builtin()?);
    info!(
        libraries = catalog.libraries().len(),
        icons = catalog.entry_count(),
        "icon catalog loaded"
    );

    let suggester = Arc::new(IconSuggester::from_env(catalog)?);

    // Create application state
    let app_state = AppState { suggester };

    // Build our application with routes
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/suggest", post(suggest_icons))
        .route("/api/health", get(health_check))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse {
        success: true,
        data: Some("OK".to_string()),
        error: None,
    })
}

// Suggest icons for a free-text query
async fn suggest_icons(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = match request.query.as_ref().and_then(|v| v.as_str()) {
        Some(q) => q.to_string(),
        None => {
            return Err(bad_request("Query is required"));
        }
    };

    match state.suggester.suggest(&query).await {
        Ok(suggestions) => Ok(Json(SuggestResponse { suggestions })),
        Err(SuggestError::InvalidArgument(message)) => Err(bad_request(&message)),
        Err(e) => {
            warn!("Suggestion request failed: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            ))
        }
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let catalog = Arc::new(IconCatalog::builtin().unwrap());
        AppState {
            suggester: Arc::new(IconSuggester::new(catalog, vec![])),
        }
    }

    #[test]
    fn test_missing_query_is_bad_request() {
        let response = tokio_test::block_on(suggest_icons(
            State(test_state()),
            Json(SuggestRequest { query: None }),
        ));
        let (status, _) = response.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_string_query_is_bad_request() {
        let response = tokio_test::block_on(suggest_icons(
            State(test_state()),
            Json(SuggestRequest {
                query: Some(serde_json::json!(42)),
            }),
        ));
        let (status, _) = response.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_blank_query_is_bad_request() {
        let response = tokio_test::block_on(suggest_icons(
            State(test_state()),
            Json(SuggestRequest {
                query: Some(serde_json::json!("   ")),
            }),
        ));
        let (status, _) = response.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_suggest_returns_capped_list() {
        let response = tokio_test::block_on(suggest_icons(
            State(test_state()),
            Json(SuggestRequest {
                query: Some(serde_json::json!("summary")),
            }),
        ));
        let Json(body) = response.unwrap();
        assert!(!body.suggestions.is_empty());
        assert!(body.suggestions.len() <= iconrec::MAX_SUGGESTIONS);
    }
}
