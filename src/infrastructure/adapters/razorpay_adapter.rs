use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::config::razorpay_config::RazorpayConfig;
use crate::ports::payment_gateway_port::*;
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

/// Razorpay 错误响应体
#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
    error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

/// Razorpay 适配器实现
#[derive(Clone)]
pub struct RazorpayAdapter {
    key_id: String,
    authorization: String,
    base_url: String,
    client: Client,
}

impl RazorpayAdapter {
    /// 凭证缺失或格式错误时返回 ConfigurationError，不会发起任何请求
    pub fn new(config: &RazorpayConfig) -> DomainResult<Self> {
        let (key_id, key_secret) = config.credentials()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            key_id: key_id.to_string(),
            authorization: Self::build_authorization(key_id, key_secret),
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// 生成 Basic Authorization 头
    fn build_authorization(key_id: &str, key_secret: &str) -> String {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", key_id, key_secret));
        format!("Basic {}", token)
    }
}

#[async_trait]
impl PaymentGatewayPort for RazorpayAdapter {
    async fn create_order(&self, request: GatewayOrderRequest) -> DomainResult<GatewayOrder> {
        let url = format!("{}/v1/orders", self.base_url);
        debug!(
            "Razorpay order request: amount={} currency={} receipt={}",
            request.amount, request.currency, request.receipt
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<RazorpayErrorBody>(&error_text) {
                Ok(body) => format!("{}: {}", body.error.code, body.error.description),
                Err(_) => error_text,
            };
            error!("Razorpay API error: {} - {}", status, detail);
            return Err(DomainError::UpstreamError(format!(
                "API returned {}: {}",
                status, detail
            )));
        }

        let body = response.text().await?;
        let order: GatewayOrder = serde_json::from_str(&body).map_err(|e| {
            DomainError::UpstreamError(format!("Unexpected order response: {}", e))
        })?;
        debug!("Razorpay order created: {}", order.id);

        Ok(order)
    }

    fn key_id(&self) -> &str {
        &self.key_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::time::Duration;

    /// 在本地端口启动一个替身网关
    async fn spawn_gateway(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config(base_url: String, timeout: Duration) -> RazorpayConfig {
        RazorpayConfig {
            key_id: Some("rzp_test_abc".to_string()),
            key_secret: Some("s3cret".to_string()),
            base_url,
            timeout,
        }
    }

    fn request() -> GatewayOrderRequest {
        GatewayOrderRequest {
            amount: 50000,
            currency: "INR".to_string(),
            receipt: "rcpt_1".to_string(),
            notes: Default::default(),
        }
    }

    #[test]
    fn test_build_authorization() {
        assert_eq!(
            RazorpayAdapter::build_authorization("rzp_test_abc", "s3cret"),
            "Basic cnpwX3Rlc3RfYWJjOnMzY3JldA=="
        );
    }

    #[test]
    fn test_missing_credentials() {
        let mut cfg = config("http://127.0.0.1:1".to_string(), Duration::from_secs(1));
        cfg.key_secret = None;
        assert!(matches!(
            RazorpayAdapter::new(&cfg),
            Err(DomainError::ConfigurationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_order_success() {
        let app = Router::new().route(
            "/v1/orders",
            post(|headers: HeaderMap, Json(body): Json<serde_json::Value>| async move {
                assert_eq!(
                    headers.get("authorization").unwrap(),
                    "Basic cnpwX3Rlc3RfYWJjOnMzY3JldA=="
                );
                Json(serde_json::json!({
                    "id": "order_LIVE1",
                    "entity": "order",
                    "amount": body["amount"],
                    "amount_paid": 0,
                    "currency": body["currency"],
                    "receipt": body["receipt"],
                    "status": "created",
                    "attempts": 0,
                    "created_at": 1700000000
                }))
            }),
        );
        let base_url = spawn_gateway(app).await;
        let adapter = RazorpayAdapter::new(&config(base_url, Duration::from_secs(5))).unwrap();

        let order = adapter.create_order(request()).await.unwrap();
        assert_eq!(order.id, "order_LIVE1");
        assert_eq!(order.amount, 50000);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.receipt.as_deref(), Some("rcpt_1"));
        assert_eq!(order.status, "created");
        assert_eq!(adapter.key_id(), "rzp_test_abc");
    }

    #[tokio::test]
    async fn test_create_order_gateway_error() {
        let app = Router::new().route(
            "/v1/orders",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({
                        "error": {
                            "code": "BAD_REQUEST_ERROR",
                            "description": "Authentication failed"
                        }
                    })),
                )
            }),
        );
        let base_url = spawn_gateway(app).await;
        let adapter = RazorpayAdapter::new(&config(base_url, Duration::from_secs(5))).unwrap();

        match adapter.create_order(request()).await {
            Err(DomainError::UpstreamError(detail)) => {
                assert!(detail.contains("401"));
                assert!(detail.contains("Authentication failed"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_order_garbage_body() {
        let app = Router::new().route("/v1/orders", post(|| async { "not json" }));
        let base_url = spawn_gateway(app).await;
        let adapter = RazorpayAdapter::new(&config(base_url, Duration::from_secs(5))).unwrap();

        assert!(matches!(
            adapter.create_order(request()).await,
            Err(DomainError::UpstreamError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_order_timeout() {
        let app = Router::new().route(
            "/v1/orders",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let base_url = spawn_gateway(app).await;
        let adapter =
            RazorpayAdapter::new(&config(base_url, Duration::from_millis(200))).unwrap();

        match adapter.create_order(request()).await {
            Err(DomainError::UpstreamError(detail)) => assert!(detail.contains("timed out")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
