use serde::{Deserialize, Serialize};

/// Preview credentials stored per vendor under `storage::preview_auth_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewAuth {
    pub token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl PreviewAuth {
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|raw| serde_json::from_str::<PreviewAuth>(raw).ok())
            .filter(|auth| !auth.token.is_empty())
    }

    /// `expires_at` is epoch milliseconds; a missing expiry never expires.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.expires_at.is_none_or(|expires| expires > now_ms)
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_garbled_payloads_are_ignored() {
        assert_eq!(PreviewAuth::from_stored(None), None);
        assert_eq!(PreviewAuth::from_stored(Some("not json")), None);
        assert_eq!(PreviewAuth::from_stored(Some(r#"{"token":""}"#)), None);
    }

    #[test]
    fn expiry_is_checked_against_now() {
        let auth = PreviewAuth::from_stored(Some(r#"{"token":"abc","expiresAt":1000}"#)).unwrap();
        assert!(auth.is_valid_at(999));
        assert!(!auth.is_valid_at(1000));
        assert_eq!(auth.bearer(), "Bearer abc");
    }
}
