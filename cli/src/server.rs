#[cfg(feature = "server")]
pub mod http {
    use abacus::{Engine, Response};
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    struct EvaluateRequest {
        expression: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
        kind: String,
    }

    pub fn router(engine: Engine) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/evaluate", post(evaluate_post))
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(engine))
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Abacus server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "abacus",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn evaluate_post(
        State(engine): State<SharedEngine>,
        Json(payload): Json<EvaluateRequest>,
    ) -> Result<Json<Response>, (StatusCode, Json<ErrorResponse>)> {
        let response = engine.explain(&payload.expression).map_err(|e| {
            error!("Evaluation of '{}' failed: {}", payload.expression, e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                    kind: e.kind().to_string(),
                }),
            )
        })?;

        info!("Evaluated '{}' = {}", response.expression, response.result);
        Ok(Json(response))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: abacus::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
