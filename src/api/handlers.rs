use crate::application::{
    CreateOrderRequest, ErrorResponse, OrderResponse, PaymentService, VerifyPaymentRequest,
    VerifyPaymentResponse,
};
use crate::domain::errors::DomainError;
use crate::ports::PaymentGatewayPort;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, info};

/// 应用状态
pub struct AppState<G: PaymentGatewayPort> {
    pub payment_service: Arc<PaymentService<G>>,
}

impl<G: PaymentGatewayPort> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            payment_service: self.payment_service.clone(),
        }
    }
}

fn new_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn invalid_body(rejection: JsonRejection) -> DomainError {
    DomainError::ValidationError(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// 存活检查
pub async fn liveness() -> &'static str {
    "Payment server is running"
}

/// 健康检查
pub async fn health_check<G: PaymentGatewayPort>(State(state): State<AppState<G>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "gateway_configured": state.payment_service.is_gateway_configured(),
        })),
    )
}

/// 创建订单
pub async fn create_order<G: PaymentGatewayPort>(
    State(state): State<AppState<G>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, (StatusCode, Json<ErrorResponse>)> {
    let result = match payload {
        Ok(Json(request)) => state.payment_service.create_order(request).await,
        Err(rejection) => Err(invalid_body(rejection)),
    };

    result.map(Json).map_err(|e| match e {
        DomainError::ValidationError(msg) => {
            info!("Order request rejected: {}", msg);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg)))
        }
        e if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        ),
        e => {
            let correlation_id = new_correlation_id();
            error!(correlation_id = %correlation_id, "Order creation error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_correlation_id(
                    "Order creation failed".to_string(),
                    correlation_id,
                )),
            )
        }
    })
}

/// 支付回调签名校验
pub async fn verify_payment<G: PaymentGatewayPort>(
    State(state): State<AppState<G>>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> (StatusCode, Json<VerifyPaymentResponse>) {
    let result = match payload {
        Ok(Json(request)) => state.payment_service.verify_payment(request),
        Err(rejection) => Err(invalid_body(rejection)),
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(DomainError::ValidationError(msg)) => {
            info!("Verification request rejected: {}", msg);
            (
                StatusCode::BAD_REQUEST,
                Json(VerifyPaymentResponse::new(false, msg)),
            )
        }
        Err(DomainError::InvalidSignature) => (
            StatusCode::BAD_REQUEST,
            Json(VerifyPaymentResponse::new(false, "Invalid signature")),
        ),
        Err(e) => {
            let correlation_id = new_correlation_id();
            error!(correlation_id = %correlation_id, "Payment verification error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VerifyPaymentResponse::new(false, "Payment verification failed")),
            )
        }
    }
}

/// handler panic 时返回的 500 响应
pub fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error".to_string())),
    )
        .into_response()
}
