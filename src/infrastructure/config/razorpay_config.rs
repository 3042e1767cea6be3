use crate::domain::errors::{DomainError, DomainResult};
use std::time::Duration;

/// Razorpay 配置
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key ID（rzp_test_... / rzp_live_...）
    pub key_id: Option<String>,

    /// Key Secret，同时用于回调签名校验
    pub key_secret: Option<String>,

    /// API基础URL
    pub base_url: String,

    /// 下单请求超时
    pub timeout: Duration,
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &self.key_secret.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl RazorpayConfig {
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup("RZP_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                DomainError::ConfigurationError(format!(
                    "RZP_TIMEOUT_SECS must be a positive integer, got {:?}",
                    v
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            key_id: lookup("RZP_KEY_ID").filter(|v| !v.is_empty()),
            key_secret: lookup("RZP_KEY_SECRET").filter(|v| !v.is_empty()),
            base_url: lookup("RZP_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// 校验下单所需的两项凭证均存在且格式正确，返回 (key_id, key_secret)
    pub fn credentials(&self) -> DomainResult<(&str, &str)> {
        let key_id = self.key_id.as_deref().ok_or_else(|| {
            DomainError::ConfigurationError("RZP_KEY_ID is not set".to_string())
        })?;
        let key_secret = self.signing_secret()?;

        if !key_id.starts_with("rzp_")
            || key_id.contains(':')
            || key_id.chars().any(char::is_whitespace)
        {
            return Err(DomainError::ConfigurationError(
                "RZP_KEY_ID is malformed".to_string(),
            ));
        }

        Ok((key_id, key_secret))
    }

    /// 回调签名校验只需要 key secret
    pub fn signing_secret(&self) -> DomainResult<&str> {
        let secret = self.key_secret.as_deref().ok_or_else(|| {
            DomainError::ConfigurationError("RZP_KEY_SECRET is not set".to_string())
        })?;
        if secret.chars().any(char::is_whitespace) {
            return Err(DomainError::ConfigurationError(
                "RZP_KEY_SECRET is malformed".to_string(),
            ));
        }
        Ok(secret)
    }
}
