use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::config::ServerConfig;
use crate::error::{ArticleServerError, Result};
use crate::models::{RelatedFile, RelatedFilesQuery};
use crate::search::{find_example_html, search_related_files};

#[derive(Clone)]
pub struct AppState {
    pub articles_dir: Arc<PathBuf>,
}

/// Builds the HTTP surface over `articles_dir`, with `example_page` served at `/`.
pub fn router(articles_dir: PathBuf, example_page: PathBuf) -> Router {
    let static_files = ServeDir::new(&articles_dir);
    let state = AppState {
        articles_dir: Arc::new(articles_dir),
    };

    Router::new()
        .route("/related-files", get(related_files_handler))
        .route_service("/", ServeFile::new(&example_page))
        .route_service("/index.html", ServeFile::new(&example_page))
        .nest_service("/static", static_files.clone())
        .fallback_service(static_files)
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Locates the example page, binds the listener and serves until `shutdown` resolves.
pub async fn run<F>(config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let articles_dir = config.resolved_articles_dir();
    let example_page = find_example_html(&articles_dir)?;

    let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(articles_dir, example_page))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shut down");
    Ok(())
}

#[instrument(skip(state))]
async fn related_files_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RelatedFile>>> {
    let title = RelatedFilesQuery::from_pairs(params)
        .title
        .filter(|title| !title.is_empty())
        .ok_or(ArticleServerError::MissingParameter("Title"))?;

    let root = Arc::clone(&state.articles_dir);
    let related = tokio::task::spawn_blocking(move || search_related_files(&title, &root)).await??;

    Ok(Json(related))
}

// Answers every preflight directly and marks every response as shareable.
async fn cors_middleware(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
