//! Static File Responder.
//!
//! Every request is answered from an [`AllowList`] fixed when the router is
//! built. Names on the list are echoed back as the response body; the file
//! itself is never read. `/gfm.css` always serves the bundled stylesheet.

use crate::domain::AllowList;
use crate::utils::error::{MdNoteError, Result};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub const STYLESHEET: &str = include_str!("../../static/gfm.css");
pub const STYLESHEET_ROUTE: &str = "/gfm.css";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";

const NOT_FOUND_BODY: &str = "404";

pub type ResponderState = Arc<AllowList>;

pub fn create_router(allow_list: AllowList) -> Router {
    Router::new()
        .route(STYLESHEET_ROUTE, get(stylesheet))
        .route("/{*name}", get(echo_allowed))
        .fallback(not_found)
        .with_state(Arc::new(allow_list))
        .layer(TraceLayer::new_for_http())
}

/// Status and body for a request naming `name` (leading slash already removed).
pub fn lookup(allow_list: &AllowList, name: &str) -> (StatusCode, String) {
    if allow_list.contains(name) {
        (StatusCode::OK, name.to_string())
    } else {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string())
    }
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

async fn echo_allowed(
    State(allow_list): State<ResponderState>,
    name: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    let Ok(Path(name)) = name else {
        tracing::warn!("Not found: undecodable request path");
        return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
    };

    let (status, body) = lookup(&allow_list, &name);
    if status == StatusCode::NOT_FOUND {
        tracing::warn!("Not found {}", name);
    }
    (status, body).into_response()
}

async fn not_found() -> Response {
    tracing::warn!("Not found: empty file name");
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

/// Runs until the process is terminated.
pub async fn serve(address: SocketAddr, allow_list: AllowList) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| MdNoteError::stream("binding", &address.to_string(), e))?;

    if allow_list.is_empty() {
        tracing::warn!("No file names given, only {} will be answered", STYLESHEET_ROUTE);
    }
    tracing::info!(
        "Serving {} allowed file(s) on http://{}",
        allow_list.len(),
        address
    );

    axum::serve(listener, create_router(allow_list))
        .await
        .map_err(|e| MdNoteError::stream("serving on", &address.to_string(), e))
}
