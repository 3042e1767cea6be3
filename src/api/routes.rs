use super::handlers::*;
use crate::ports::PaymentGatewayPort;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub fn create_router<G: PaymentGatewayPort + 'static>(state: AppState<G>) -> Router {
    let router = Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check::<G>))
        .route("/create-order", post(create_order::<G>))
        .route("/verify-payment", post(verify_payment::<G>))
        .with_state(state);

    with_middleware(router)
}

/// CORS、请求追踪和 panic 兜底
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
