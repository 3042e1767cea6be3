use crate::domain::errors::DomainResult;
use crate::domain::OrderRequest;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 网关下单请求参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrderRequest {
    /// 金额（最小货币单位）
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub notes: BTreeMap<String, String>,
}

impl From<&OrderRequest> for GatewayOrderRequest {
    fn from(request: &OrderRequest) -> Self {
        Self {
            amount: request.amount.minor_units(),
            currency: request.currency.as_str().to_string(),
            receipt: request.receipt.as_str().to_string(),
            notes: request.notes.clone(),
        }
    }
}

/// 网关下单响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// 支付网关端口接口
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// 创建订单
    async fn create_order(&self, request: GatewayOrderRequest) -> DomainResult<GatewayOrder>;

    /// 公开的 key id（前端 checkout 需要）
    fn key_id(&self) -> &str;
}
