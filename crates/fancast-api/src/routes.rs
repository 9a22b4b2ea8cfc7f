//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;

use crate::handlers::{
    classify_subject, generate_opening_prompt, generate_scene_image, generate_storyboard,
    get_video_job_result, get_video_job_status, health, submit_video_job,
};
use crate::metrics::metrics_middleware;
use crate::middleware::{
    cors_layer, rate_limit_middleware, request_id, request_logging, security_headers,
    ClientRateLimiter,
};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    // Storyboard workflow: classify → script → per-scene stills → opening prompt
    let storyboard_routes = Router::new()
        .route("/classify-subject", post(classify_subject))
        .route("/generate-storyboard", post(generate_storyboard))
        .route("/generate-scene-image", post(generate_scene_image))
        .route("/generate-opening-prompt", post(generate_opening_prompt));

    // Video queue relay: submit once, poll, fetch
    let video_routes = Router::new()
        .route("/submit-video-job", post(submit_video_job))
        .route("/video-job/:handle/status", get(get_video_job_status))
        .route("/video-job/:handle/result", get(get_video_job_result));

    let rate_limiter = ClientRateLimiter::new(state.config.rate_limit_rps);

    let api_routes = Router::new()
        .merge(storyboard_routes)
        .merge(video_routes)
        .layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    let mut router = Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .merge(metrics_routes);

    // Landing page and front-end assets
    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
