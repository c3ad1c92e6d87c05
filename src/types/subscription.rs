use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub endpoint: String,
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default = "default_content_encodings")]
    pub supported_content_encodings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<i64>,
}

fn default_content_encodings() -> Vec<String> {
    vec!["aesgcm".to_string()]
}

impl Subscription {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            keys: HashMap::new(),
            supported_content_encodings: default_content_encodings(),
            expiration_time: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.keys.insert(name.into(), value.into());
        self
    }

    pub fn with_content_encodings(mut self, encodings: Vec<String>) -> Self {
        self.supported_content_encodings = encodings;
        self
    }

    pub fn with_expiration_time(mut self, epoch_seconds: i64) -> Self {
        self.expiration_time = Some(epoch_seconds);
        self
    }

    pub fn key(&self, name: &str) -> Option<&str> {
        self.keys.get(name).map(String::as_str)
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn from_json__should_parse_push_registration_shape() {
        // Given
        let json = r#"{
            "endpoint": "https://push.example.org/v2/abc",
            "keys": {"p256dh": "BCVx", "auth": "BTBZ"},
            "supportedContentEncodings": ["aes128gcm", "aesgcm"],
            "expirationTime": 1754438400
        }"#;

        // When
        let subscription = Subscription::from_json(json).expect("parse subscription");

        // Then
        assert_eq!(subscription.endpoint, "https://push.example.org/v2/abc");
        assert_eq!(subscription.key("p256dh"), Some("BCVx"));
        assert_eq!(subscription.key("auth"), Some("BTBZ"));
        assert_eq!(
            subscription.supported_content_encodings,
            vec!["aes128gcm", "aesgcm"]
        );
        assert_eq!(subscription.expiration_time, Some(1754438400));
    }

    #[test]
    fn from_json__should_default_encodings_to_aesgcm_when_absent() {
        let json = r#"{"endpoint": "https://push.example.org/v2/abc", "keys": {}}"#;
        let subscription = Subscription::from_json(json).expect("parse subscription");
        assert_eq!(subscription.supported_content_encodings, vec!["aesgcm"]);
        assert!(subscription.expiration_time.is_none());
    }

    #[test]
    fn from_json__should_accept_null_expiration_time() {
        let json =
            r#"{"endpoint": "https://push.example.org/v2/abc", "expirationTime": null}"#;
        let subscription = Subscription::from_json(json).expect("parse subscription");
        assert!(subscription.expiration_time.is_none());
    }

    #[test]
    fn to_json__should_round_trip_with_camel_case_fields() {
        // Given
        let subscription = Subscription::new("https://push.example.org/v2/abc")
            .with_key("p256dh", "BCVx")
            .with_key("auth", "BTBZ")
            .with_content_encodings(vec!["aes128gcm".to_string()])
            .with_expiration_time(1754438400);

        // When
        let json = subscription.to_json().expect("serialize subscription");
        let parsed = Subscription::from_json(&json).expect("parse back");

        // Then
        assert!(json.contains("supportedContentEncodings"));
        assert!(json.contains("expirationTime"));
        assert_eq!(parsed, subscription);
    }
}
