//! 测试用的内存网关

use crate::domain::errors::{DomainError, DomainResult};
use crate::ports::payment_gateway_port::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct FakeGateway {
    calls: AtomicUsize,
    last_request: Mutex<Option<GatewayOrderRequest>>,
    failure: Option<String>,
}

impl FakeGateway {
    pub fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            failure: None,
        }
    }

    /// 每次调用都返回 UpstreamError，错误信息为 `detail`
    pub fn failing(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
            ..Self::succeeding()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GatewayOrderRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGatewayPort for FakeGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> DomainResult<GatewayOrder> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(detail) = &self.failure {
            return Err(DomainError::UpstreamError(detail.clone()));
        }

        Ok(GatewayOrder {
            id: format!("order_fake{}", n),
            amount: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: "created".to_string(),
        })
    }

    fn key_id(&self) -> &str {
        "rzp_test_fake"
    }
}
