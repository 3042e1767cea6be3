use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::config::razorpay_config::RazorpayConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;

/// 应用配置，启动时构建一次后注入各组件
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    /// 为 true 时缺少网关凭证直接拒绝启动
    pub require_gateway_credentials: bool,

    pub razorpay: RazorpayConfig,
}

impl AppConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| {
                DomainError::ConfigurationError(format!("PORT must be a valid port, got {:?}", v))
            })?,
            None => DEFAULT_PORT,
        };

        let require_gateway_credentials = match lookup("REQUIRE_GATEWAY_CREDENTIALS") {
            Some(v) => parse_bool(&v).ok_or_else(|| {
                DomainError::ConfigurationError(format!(
                    "REQUIRE_GATEWAY_CREDENTIALS must be true or false, got {:?}",
                    v
                ))
            })?,
            None => false,
        };

        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            require_gateway_credentials,
            razorpay: RazorpayConfig::from_lookup(&lookup)?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
