//! Bearer Token Codec
//!
//! Reads the payload segment of a JWT-shaped token without verifying the
//! signature. Anything that fails to decode counts as an unusable token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("payload is not valid JSON: {0}")]
    Json(String),
}

/// Claims this client cares about. Identifier claims are kept loose since
/// they may arrive as numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub exp: Option<Value>,
    pub sub: Option<Value>,
    pub customer_id: Option<Value>,
    pub id: Option<Value>,
}

impl Claims {
    /// Expiration in seconds since epoch
    pub fn expiration(&self) -> Option<i64> {
        self.exp.as_ref().and_then(as_integer)
    }

    /// Customer identifier: `sub`, then `customerId`, then `id`
    pub fn customer_id(&self) -> Option<i64> {
        [&self.sub, &self.customer_id, &self.id]
            .into_iter()
            .flatten()
            .find_map(as_integer)
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode the middle segment of `header.payload.signature`
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// True unless the token decodes and `now_secs` is strictly before its `exp`
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    match decode_claims(token).map(|claims| claims.expiration()) {
        Ok(Some(exp)) => now_secs >= exp,
        _ => true,
    }
}

pub fn customer_id(token: &str) -> Option<i64> {
    decode_claims(token).ok()?.customer_id()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an unsigned token around a JSON payload
    pub(crate) fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_past_expiration_is_expired() {
        let token = make_token(r#"{"sub":"42","exp":1699999999}"#);
        assert!(is_expired_at(&token, NOW));
    }

    #[test]
    fn test_expiration_boundary() {
        let token = make_token(r#"{"sub":"42","exp":1700000000}"#);
        assert!(is_expired_at(&token, NOW));
        assert!(!is_expired_at(&token, NOW - 1));
    }

    #[test]
    fn test_future_expiration_is_usable() {
        let token = make_token(r#"{"sub":"42","exp":1800000000}"#);
        assert!(!is_expired_at(&token, NOW));
    }

    #[test]
    fn test_undecodable_tokens_are_expired() {
        assert!(is_expired_at("", NOW));
        assert!(is_expired_at("not-a-token", NOW));
        assert!(is_expired_at("a.%%%.c", NOW));
        assert!(is_expired_at(&format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain")), NOW));
        assert!(is_expired_at(&make_token(r#"{"sub":"42"}"#), NOW));
        assert!(is_expired_at(&make_token(r#"{"exp":"soon"}"#), NOW));
    }

    #[test]
    fn test_customer_id_from_subject() {
        assert_eq!(customer_id(&make_token(r#"{"sub":"42","exp":1}"#)), Some(42));
        assert_eq!(customer_id(&make_token(r#"{"sub":42}"#)), Some(42));
    }

    #[test]
    fn test_customer_id_fallback_claims() {
        assert_eq!(customer_id(&make_token(r#"{"customerId":7}"#)), Some(7));
        assert_eq!(customer_id(&make_token(r#"{"id":"9"}"#)), Some(9));
    }

    #[test]
    fn test_fractional_customer_id_rejected() {
        assert_eq!(customer_id(&make_token(r#"{"sub":42.9}"#)), None);
        assert_eq!(customer_id(&make_token(r#"{"sub":42.0}"#)), Some(42));
    }

    #[test]
    fn test_customer_id_absent() {
        assert_eq!(customer_id(&make_token(r#"{"sub":"joao@example.com"}"#)), None);
        assert_eq!(customer_id(&make_token(r#"{"exp":1800000000}"#)), None);
        assert_eq!(customer_id("garbage"), None);
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"5","exp":1800000000}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(customer_id(&token), Some(5));
    }
}
