//! 支付回调签名：HMAC-SHA256(secret, "order_id|payment_id")，小写十六进制。

use crate::domain::entities::{PaymentCallback, VerificationResult};
use crate::domain::errors::{DomainError, DomainResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// 签名的十六进制长度
pub const SIGNATURE_HEX_LEN: usize = 64;

fn keyed_mac(order_id: &str, payment_id: &str, secret: &[u8]) -> DomainResult<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| DomainError::ConfigurationError(format!("HMAC init failed: {}", e)))?;
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    Ok(mac)
}

/// 计算回调签名
pub fn sign(order_id: &str, payment_id: &str, secret: &[u8]) -> DomainResult<String> {
    let mac = keyed_mac(order_id, payment_id, secret)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// 校验回调签名
///
/// 候选签名必须是 64 位小写十六进制；解码后用 `verify_slice` 做常数时间比较。
pub fn verify(callback: &PaymentCallback, secret: &[u8]) -> VerificationResult {
    let candidate = callback.signature.as_bytes();
    if candidate.len() != SIGNATURE_HEX_LEN {
        return VerificationResult::rejected("signature has wrong length");
    }
    if !candidate
        .iter()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b))
    {
        return VerificationResult::rejected("signature is not lowercase hex");
    }
    let Ok(candidate) = hex::decode(candidate) else {
        return VerificationResult::rejected("signature is not lowercase hex");
    };

    let mac = match keyed_mac(&callback.order_id, &callback.payment_id, secret) {
        Ok(mac) => mac,
        Err(e) => return VerificationResult::rejected(e.to_string()),
    };

    match mac.verify_slice(&candidate) {
        Ok(()) => VerificationResult::verified(),
        Err(_) => VerificationResult::rejected("signature mismatch"),
    }
}
