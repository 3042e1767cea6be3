use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Currency, Money, Receipt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 网关允许的 notes 最大条目数
pub const MAX_NOTES: usize = 15;

/// 单条 note 值的最大长度
pub const MAX_NOTE_VALUE_LEN: usize = 256;

/// 创建订单请求（已校验）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// 支付金额（最小货币单位）
    pub amount: Money,

    /// 币种
    pub currency: Currency,

    /// 收据号
    pub receipt: Receipt,

    /// 附加键值对
    pub notes: BTreeMap<String, String>,
}

impl OrderRequest {
    /// 创建新的订单请求，币种缺省为 INR，收据号缺省时自动生成
    pub fn new(
        amount: Money,
        currency: Option<Currency>,
        receipt: Option<Receipt>,
        notes: BTreeMap<String, String>,
    ) -> DomainResult<Self> {
        if notes.len() > MAX_NOTES {
            return Err(DomainError::ValidationError(format!(
                "At most {} notes are allowed",
                MAX_NOTES
            )));
        }

        if let Some((key, _)) = notes
            .iter()
            .find(|(k, v)| k.trim().is_empty() || v.chars().count() > MAX_NOTE_VALUE_LEN)
        {
            return Err(DomainError::ValidationError(format!(
                "Invalid note {:?}: keys must be non-empty and values at most {} characters",
                key, MAX_NOTE_VALUE_LEN
            )));
        }

        Ok(Self {
            amount,
            currency: currency.unwrap_or_default(),
            receipt: receipt.unwrap_or_else(Receipt::generate),
            notes,
        })
    }
}

/// 网关返回的订单描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDescriptor {
    /// 网关分配的订单ID
    pub id: String,

    pub amount: Money,

    pub currency: Currency,

    pub receipt: Option<String>,

    /// 网关订单状态（如 created）
    pub status: String,
}

/// 支付回调字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCallback {
    pub order_id: String,
    pub payment_id: String,
    /// 十六进制签名
    pub signature: String,
}

impl PaymentCallback {
    /// 校验三个字段均存在且非空，缺失时返回 ValidationError 并列出缺失字段
    pub fn new(
        order_id: Option<String>,
        payment_id: Option<String>,
        signature: Option<String>,
    ) -> DomainResult<Self> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        let order_id = present(order_id);
        let payment_id = present(payment_id);
        let signature = present(signature);

        match (order_id, payment_id, signature) {
            (Some(order_id), Some(payment_id), Some(signature)) => Ok(Self {
                order_id,
                payment_id,
                signature,
            }),
            (order_id, payment_id, signature) => {
                let missing: Vec<&str> = [
                    ("razorpay_order_id", order_id.is_none()),
                    ("razorpay_payment_id", payment_id.is_none()),
                    ("razorpay_signature", signature.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();

                Err(DomainError::ValidationError(format!(
                    "Missing required fields: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// 签名校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub verified: bool,
    /// 诊断信息（仅失败时）
    pub reason: Option<String>,
}

impl VerificationResult {
    pub fn verified() -> Self {
        Self {
            verified: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            verified: false,
            reason: Some(reason.into()),
        }
    }
}
