//! Session token claims decoding. The token is an opaque compact string of
//! three dot-separated segments; the second segment is unpadded base64url
//! over a JSON object carrying at least a `role` claim. No signature
//! verification happens here, the token is consumed as issued.

use crate::auth::error::AuthError;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde_json::Value;

/// Extract the `role` claim from a session token.
///
/// # Errors
/// Returns `AuthError::MalformedToken` when the token does not have exactly
/// three segments, the claims segment is not valid base64url or JSON, or the
/// `role` claim is missing or not a string. A token is either entirely
/// well-formed or rejected here, before anything consumes it.
pub fn decode_role(token: &str) -> Result<String, AuthError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    let payload = Base64UrlUnpadded::decode_vec(segments[1]).map_err(|_| {
        AuthError::MalformedToken("claims segment is not valid base64url".to_string())
    })?;

    let claims: Value = serde_json::from_slice(&payload)
        .map_err(|_| AuthError::MalformedToken("claims segment is not valid JSON".to_string()))?;

    claims
        .get("role")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| AuthError::MalformedToken("missing role claim".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with_claims(claims: &Value) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = Base64UrlUnpadded::encode_string(claims.to_string().as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_role_claim() {
        let token = token_with_claims(&json!({"sub": "u1", "role": "admin"}));
        assert_eq!(decode_role(&token).unwrap(), "admin");
    }

    #[test]
    fn round_trips_any_role_value() {
        for role in ["user", "admin", "", "supervisor"] {
            let token = token_with_claims(&json!({"role": role}));
            assert_eq!(decode_role(&token).unwrap(), role);
        }
    }

    #[test]
    fn rejects_wrong_segment_count() {
        let err = decode_role("one.two").unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken(_)));
        assert!(err.to_string().contains("expected 3 segments"));
    }

    #[test]
    fn rejects_undecodable_claims_segment() {
        let err = decode_role("head.%%%.sig").unwrap_err();
        assert!(err.to_string().contains("base64url"));
    }

    #[test]
    fn rejects_non_json_claims() {
        let payload = Base64UrlUnpadded::encode_string(b"not-json");
        let err = decode_role(&format!("head.{payload}.sig")).unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn rejects_missing_or_non_string_role() {
        let missing = token_with_claims(&json!({"sub": "u1"}));
        assert!(decode_role(&missing)
            .unwrap_err()
            .to_string()
            .contains("missing role claim"));

        let numeric = token_with_claims(&json!({"role": 7}));
        assert!(decode_role(&numeric)
            .unwrap_err()
            .to_string()
            .contains("missing role claim"));
    }
}
