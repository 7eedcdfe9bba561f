use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the `/echo` route reflects back to the caller: the headers as they
/// arrived on the wire (flattened, last value winning) and the raw body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/text", get(text))
        .route("/json", get(json_doc))
        .route("/echo", post(echo))
        .route("/status/{code}", get(status))
        .route("/delay/{ms}", get(delay))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn text() -> &'static str {
    "plain text from the mock server"
}

async fn json_doc() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "mock-server",
        "items": [1, 2, 3]
    }))
}

async fn echo(headers: HeaderMap, body: String) -> Json<Echo> {
    Json(Echo {
        headers: flatten_headers(&headers),
        body,
    })
}

async fn status(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

async fn delay(Path(ms): Path<u64>) -> &'static str {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    "done"
}

/// Flatten received headers into a name→value map, keeping the last value
/// for repeated names — the same collapse the client applies before
/// dispatch, so echoed output is directly comparable.
pub fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (name, value) in headers {
        map.insert(
            name.as_str().to_string(),
            value.to_str().unwrap_or_default().to_string(),
        );
    }
    map
}
