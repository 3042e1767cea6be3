use crate::domain::errors::DomainResult;
use crate::domain::{Currency, Money, OrderDescriptor, OrderRequest, PaymentCallback, Receipt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 创建订单请求
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    /// 金额（最小货币单位），保留原始 JSON 以便区分缺失和非数字
    pub amount: Option<serde_json::Value>,

    /// 币种，缺省为 INR
    pub currency: Option<String>,

    /// 收据号，缺省时自动生成
    pub receipt: Option<String>,

    /// 附加数据
    pub notes: Option<BTreeMap<String, String>>,
}

impl CreateOrderRequest {
    /// 校验并转换为领域对象
    pub fn into_order_request(self) -> DomainResult<OrderRequest> {
        let amount = Money::from_json(self.amount.as_ref().unwrap_or(&serde_json::Value::Null))?;
        let currency = self.currency.as_deref().map(Currency::new).transpose()?;
        let receipt = self.receipt.as_deref().map(Receipt::new).transpose()?;

        OrderRequest::new(amount, currency, receipt, self.notes.unwrap_or_default())
    }
}

/// 订单响应
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    /// 网关订单ID
    pub id: String,

    /// 金额（最小货币单位）
    pub amount: i64,

    pub currency: String,

    pub receipt: Option<String>,

    pub status: String,

    /// 前端 checkout 使用的公开 key id
    pub key_id: String,
}

impl OrderResponse {
    pub fn new(order: OrderDescriptor, key_id: &str) -> Self {
        Self {
            id: order.id,
            amount: order.amount.minor_units(),
            currency: order.currency.as_str().to_string(),
            receipt: order.receipt,
            status: order.status,
            key_id: key_id.to_string(),
        }
    }
}

/// 支付回调校验请求
#[derive(Debug, Default, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

impl VerifyPaymentRequest {
    pub fn into_callback(self) -> DomainResult<PaymentCallback> {
        PaymentCallback::new(
            self.razorpay_order_id,
            self.razorpay_payment_id,
            self.razorpay_signature,
        )
    }
}

/// 支付回调校验响应（成功和失败共用）
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

impl VerifyPaymentResponse {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    /// 服务端日志中的关联ID，仅内部错误时返回
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            error,
            correlation_id: None,
        }
    }

    pub fn with_correlation_id(error: String, correlation_id: String) -> Self {
        Self {
            error,
            correlation_id: Some(correlation_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use serde_json::json;

    #[test]
    fn test_create_order_request_defaults() {
        let request: CreateOrderRequest = serde_json::from_value(json!({ "amount": 50000 })).unwrap();
        let order = request.into_order_request().unwrap();

        assert_eq!(order.amount.minor_units(), 50000);
        assert_eq!(order.currency.as_str(), "INR");
        assert!(order.notes.is_empty());
    }

    #[test]
    fn test_create_order_request_rejects_rupee_field() {
        let request: CreateOrderRequest =
            serde_json::from_value(json!({ "amountRupees": 500 })).unwrap();

        match request.into_order_request() {
            Err(DomainError::ValidationError(msg)) => assert_eq!(msg, "Amount missing"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_create_order_request_invalid_currency() {
        let request: CreateOrderRequest =
            serde_json::from_value(json!({ "amount": 100, "currency": "" })).unwrap();
        assert!(matches!(
            request.into_order_request(),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn test_error_response_serialization() {
        let plain = serde_json::to_value(ErrorResponse::new("Amount missing".to_string())).unwrap();
        assert_eq!(plain, json!({ "error": "Amount missing" }));

        let internal = serde_json::to_value(ErrorResponse::with_correlation_id(
            "Order creation failed".to_string(),
            "abc".to_string(),
        ))
        .unwrap();
        assert_eq!(
            internal,
            json!({ "error": "Order creation failed", "correlation_id": "abc" })
        );
    }
}
