use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 请求参数缺失或格式错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 签名已计算但不匹配
    #[error("Signature verification failed")]
    InvalidSignature,

    /// 服务端配置缺失或错误（如网关密钥）
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 支付网关调用失败或超时
    #[error("Upstream gateway error: {0}")]
    UpstreamError(String),
}

impl DomainError {
    /// 是否为调用方可见的预期错误（其余错误只返回通用信息）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationError(_) | DomainError::InvalidSignature
        )
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return DomainError::UpstreamError(format!("request timed out: {}", e));
        }
        if e.is_decode() {
            return DomainError::UpstreamError(format!("failed to decode response body: {}", e));
        }
        DomainError::UpstreamError(format!("http request error: {}", e))
    }
}

/// 领域结果类型
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::ValidationError("x".to_string()).is_client_error());
        assert!(DomainError::InvalidSignature.is_client_error());
        assert!(!DomainError::ConfigurationError("x".to_string()).is_client_error());
        assert!(!DomainError::UpstreamError("x".to_string()).is_client_error());
    }
}
