use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use jungdam_notification::MailSender;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod contact;
pub mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn MailSender>,
}

fn cors(origins: &[String]) -> CorsLayer {
    let origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
}

pub fn router(app_state: AppState) -> Router {
    let body_limit = app_state.config.contact.limits.body_limit();
    let cors = cors(&app_state.config.cors.allowed_origins);

    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/contact",
            post(contact::action).fallback(contact::method_not_allowed),
        )
        // Path used by the serverless deployment of the same form
        .route(
            "/api/send-mail",
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
