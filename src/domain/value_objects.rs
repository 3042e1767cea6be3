use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 网关允许的收据号最大长度
pub const MAX_RECEIPT_LEN: usize = 40;

/// 默认币种
pub const DEFAULT_CURRENCY: &str = "INR";

/// 货币金额（最小货币单位，如 paise，避免浮点数精度问题）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// 金额（最小单位）
    minor_units: i64,
}

impl Money {
    /// 创建新的金额对象（单位：最小货币单位），金额必须大于 0
    pub fn from_minor_units(minor_units: i64) -> DomainResult<Self> {
        if minor_units <= 0 {
            return Err(DomainError::ValidationError(
                "Amount must be greater than 0".to_string(),
            ));
        }
        Ok(Self { minor_units })
    }

    /// 从 JSON 值解析金额
    ///
    /// 接受正整数或纯数字字符串，不做任何单位换算。
    pub fn from_json(value: &serde_json::Value) -> DomainResult<Self> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Self::from_minor_units(v),
                None if n.is_u64() => Err(DomainError::ValidationError(
                    "Amount is too large".to_string(),
                )),
                None => Err(DomainError::ValidationError(
                    "Amount must be an integer in minor currency units".to_string(),
                )),
            },
            serde_json::Value::String(s) => {
                let s = s.trim();
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DomainError::ValidationError(
                        "Amount must be numeric".to_string(),
                    ));
                }
                let v = s.parse::<i64>().map_err(|_| {
                    DomainError::ValidationError("Amount is too large".to_string())
                })?;
                Self::from_minor_units(v)
            }
            serde_json::Value::Null => {
                Err(DomainError::ValidationError("Amount missing".to_string()))
            }
            _ => Err(DomainError::ValidationError(
                "Amount must be numeric".to_string(),
            )),
        }
    }

    /// 转换为最小单位
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.minor_units / 100, self.minor_units % 100)
    }
}

/// ISO 4217 币种代码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> DomainResult<Self> {
        let code = code.trim();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(DomainError::ValidationError(format!(
                "Currency must be a 3-letter ISO 4217 code, got {:?}",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 收据号（调用方提供或服务端生成）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(String);

impl Receipt {
    pub fn new(receipt: &str) -> DomainResult<Self> {
        let receipt = receipt.trim();
        if receipt.is_empty() || receipt.chars().count() > MAX_RECEIPT_LEN {
            return Err(DomainError::ValidationError(format!(
                "Receipt must be 1-{} characters",
                MAX_RECEIPT_LEN
            )));
        }
        Ok(Self(receipt.to_string()))
    }

    /// 基于时间戳生成收据号，附加随机后缀避免同一毫秒内冲突
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("rcpt_{}_{}", millis, &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
