use crate::application::dto::{
    CreateOrderRequest, OrderResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::{signature, Currency, Money, OrderDescriptor};
use crate::ports::{GatewayOrderRequest, PaymentGatewayPort};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 支付服务
pub struct PaymentService<G: PaymentGatewayPort> {
    /// 凭证缺失或格式错误时为 None
    gateway: Option<Arc<G>>,
    /// 回调签名密钥（即网关 key secret）
    signing_secret: Option<String>,
}

impl<G: PaymentGatewayPort> PaymentService<G> {
    pub fn new(gateway: Option<Arc<G>>, signing_secret: Option<String>) -> Self {
        Self {
            gateway,
            signing_secret,
        }
    }

    pub fn is_gateway_configured(&self) -> bool {
        self.gateway.is_some()
    }

    /// 创建订单
    ///
    /// 先校验请求，再检查网关配置，两者都通过后才发起一次外部调用。
    pub async fn create_order(&self, request: CreateOrderRequest) -> DomainResult<OrderResponse> {
        let order = request.into_order_request()?;

        let gateway = self.gateway.as_ref().ok_or_else(|| {
            DomainError::ConfigurationError("gateway credentials are not configured".to_string())
        })?;

        info!(
            "Creating order: amount={} currency={} receipt={}",
            order.amount.minor_units(),
            order.currency,
            order.receipt
        );

        let created = gateway
            .create_order(GatewayOrderRequest::from(&order))
            .await?;

        let descriptor = OrderDescriptor {
            amount: Money::from_minor_units(created.amount).map_err(|_| {
                DomainError::UpstreamError(format!(
                    "gateway returned invalid amount {} for order {}",
                    created.amount, created.id
                ))
            })?,
            currency: Currency::new(&created.currency).map_err(|_| {
                DomainError::UpstreamError(format!(
                    "gateway returned invalid currency {:?} for order {}",
                    created.currency, created.id
                ))
            })?,
            id: created.id,
            receipt: created.receipt,
            status: created.status,
        };

        info!("Order created: {}", descriptor.id);

        Ok(OrderResponse::new(descriptor, gateway.key_id()))
    }

    /// 校验支付回调签名
    pub fn verify_payment(&self, request: VerifyPaymentRequest) -> DomainResult<VerifyPaymentResponse> {
        let callback = request.into_callback()?;

        let secret = self.signing_secret.as_deref().ok_or_else(|| {
            DomainError::ConfigurationError("signing secret is not configured".to_string())
        })?;

        let result = signature::verify(&callback, secret.as_bytes());
        if !result.verified {
            warn!(
                "Payment signature rejected for order {} payment {}: {}",
                callback.order_id,
                callback.payment_id,
                result.reason.as_deref().unwrap_or("unknown")
            );
            return Err(DomainError::InvalidSignature);
        }

        debug!("Payment verified: {}", callback.payment_id);
        Ok(VerifyPaymentResponse::new(true, "Payment verified"))
    }
}
