//! HTTP server for the dashboard page.

use std::net::SocketAddr;

use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AppError, Result};

/// Pre-rendered page shared by every request
pub type SharedPage = Bytes;

async fn index(State(page): State<SharedPage>) -> Html<SharedPage> {
    Html(page)
}

/// Router with the single `/` route; anything else is a 404
pub fn router(page: SharedPage) -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(page)
}

/// Bind the listening socket
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve `app` on `listener` until the process is stopped
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Dash is running on http://{addr}/");
    }
    axum::serve(listener, app).await.map_err(AppError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(Bytes::from_static(b"<h1>hello</h1>"))
    }

    #[tokio::test]
    async fn test_root_serves_page() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>hello</h1>");
    }

    #[tokio::test]
    async fn test_other_paths_are_not_found() {
        let response = test_router()
            .oneshot(Request::get("/api/data").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_is_rejected() {
        let response = test_router()
            .oneshot(Request::post("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        match err {
            AppError::Bind { addr, .. } => assert_eq!(addr, taken),
            other => panic!("expected Bind error, got {other:?}"),
        }
    }
}
