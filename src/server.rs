use axum::extract::Path;
use axum::http::{Method, StatusCode};
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::bts::resolve_flexcode;
use crate::diagnostic::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{GlossError, Result};
use crate::flexcode::RawFlexcode;
use crate::gloss::{Glosser, PosInfo};

/// Exports carry flexcodes both as JSON numbers and as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexcodeValue {
    Number(i64),
    Text(String),
}

impl FlexcodeValue {
    pub fn as_raw(&self) -> RawFlexcode<'_> {
        match self {
            FlexcodeValue::Number(n) => RawFlexcode::Int(*n),
            FlexcodeValue::Text(s) => RawFlexcode::Text(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Token {
    pub flexcode: FlexcodeValue,
    #[serde(default)]
    pub lemma_id: String,
    #[serde(default)]
    pub pos: PosInfo,
}

#[derive(Debug, Deserialize)]
pub struct GlossRequest {
    pub tokens: Vec<Token>,
}

#[derive(Debug, Serialize)]
pub struct TokenDiagnostic {
    /// Index into the request's tokens.
    pub token: usize,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

#[derive(Debug, Serialize)]
pub struct GlossResponse {
    pub status: String,
    pub elapsed_ms: f64,
    pub glosses: Vec<String>,
    pub diagnostics: Vec<TokenDiagnostic>,
}

#[derive(Debug, Serialize)]
pub struct FlexcodeLabel {
    pub code: String,
    pub label: &'static str,
}

/// Glosses a request in order. Diagnostics are tagged with the token they
/// belong to.
pub fn gloss_tokens(request: &GlossRequest) -> GlossResponse {
    let started = std::time::Instant::now();
    let glosser = Glosser::with_sink(CollectingSink::new());
    let mut glosses = Vec::with_capacity(request.tokens.len());
    let mut diagnostics = Vec::new();
    for (index, token) in request.tokens.iter().enumerate() {
        glosses.push(glosser.gloss(token.flexcode.as_raw(), &token.lemma_id, &token.pos));
        diagnostics.extend(
            glosser
                .sink()
                .take()
                .into_iter()
                .map(|diagnostic| TokenDiagnostic { token: index, diagnostic }),
        );
    }
    GlossResponse {
        status: "ok".into(),
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        glosses,
        diagnostics,
    }
}

pub fn router(trace_diagnostics: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    Router::new()
        .route(
            "/v1/gloss",
            post(move |Json(req): Json<GlossRequest>| async move {
                let response = gloss_tokens(&req);
                if trace_diagnostics {
                    for d in &response.diagnostics {
                        TracingSink.emit(&d.diagnostic);
                    }
                }
                info!(
                    ms = response.elapsed_ms,
                    tokens = response.glosses.len(),
                    diagnostics = response.diagnostics.len(),
                    "gloss complete"
                );
                (StatusCode::OK, Json(response))
            }),
        )
        .route(
            "/v1/flexcode/:code",
            get(|Path(code): Path<String>| async move {
                match resolve_flexcode(&code) {
                    Some(label) => Ok(Json(FlexcodeLabel { code, label })),
                    None => {
                        warn!(%code, "unknown flexcode");
                        Err((StatusCode::NOT_FOUND, "Unknown flexcode"))
                    }
                }
            }),
        )
        .layer(cors)
}

pub async fn serve(listen: &str, trace_diagnostics: bool) -> Result<()> {
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| GlossError::Server(format!("cannot bind {}: {}", listen, e)))?;
    info!(%listen, "linggloss listening");
    axum::serve(listener, router(trace_diagnostics)).await?;
    Ok(())
}
