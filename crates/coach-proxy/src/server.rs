//! Actix Web HTTP server.
//!
//! Endpoints:
//! - `POST /chat`, `POST /api/chat`: relay one message upstream
//! - `GET /health`
//! - everything else: static assets from the configured directory, `/` being `index.html`

use crate::{config::ProxyConfig, error::ChatError, proxy::ChatProxy, types::ChatRequest};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    http::header::{HeaderValue, ALLOW},
    web, App, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub const CHAT_PATHS: [&str; 2] = ["/chat", "/api/chat"];

#[derive(Clone)]
pub struct AppState {
    pub config: ProxyConfig,
    pub proxy: ChatProxy,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Result<Self, ChatError> {
        let proxy = ChatProxy::new(&config)?;
        Ok(Self { config, proxy })
    }
}

pub async fn serve(config: ProxyConfig) -> Result<()> {
    let addr = config.bind_addr();

    if !config.has_api_key() {
        warn!("DEEPSEEK_API_KEY is not set; upstream calls will be rejected");
    }

    let state = web::Data::new(AppState::new(config).context("failed to build chat proxy")?);
    info!(
        addr = %addr,
        upstream = %state.proxy.api_url(),
        static_dir = %state.config.static_dir.display(),
        "coach-proxy listening"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(configure(state.config.static_dir.clone()))
    })
    .bind(&addr)
    .with_context(|| format!("failed to bind {}", addr))?
    .run()
    .await
    .context("server error")?;

    Ok(())
}

/// Register all routes, serving static assets from `static_dir`.
///
/// Expects `web::Data<AppState>` on the app.
pub fn configure(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        register(cfg);
        cfg.service(Files::new("/", static_dir).index_file("index.html"));
    }
}

fn register(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ChatError::InvalidBody(err.to_string()).into()),
    )
    .route("/health", web::get().to(health_check));

    for path in CHAT_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::post().to(handle_chat))
                .default_service(web::to(method_not_allowed)),
        );
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_chat(
    state: web::Data<AppState>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ChatError> {
    let message = body.into_inner().into_message().inspect_err(|e| {
        warn!(error = %e, "rejected chat request");
    })?;

    let answer = state.proxy.complete(&message).await?;
    debug!(answer_chars = answer.chars().count(), "relaying answer");

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(answer))
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    let err = ChatError::MethodNotAllowed(req.method().to_string());
    warn!(method = %req.method(), path = %req.path(), "method not allowed");

    let mut resp = err.error_response();
    resp.headers_mut().insert(ALLOW, HeaderValue::from_static("POST"));
    resp
}
