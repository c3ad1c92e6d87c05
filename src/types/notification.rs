use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    VeryLow,
    Low,
    #[default]
    Normal,
    High,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::VeryLow => "very-low",
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "very-low" => Ok(Urgency::VeryLow),
            "low" => Ok(Urgency::Low),
            "normal" => Ok(Urgency::Normal),
            "high" => Ok(Urgency::High),
            other => Err(ValidationError::InvalidUrgency(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    payload: Option<Vec<u8>>,
    ttl: u32,
    urgency: Urgency,
    topic: Option<String>,
    respond_async: bool,
    metadata: HashMap<String, serde_json::Value>,
}

impl Notification {
    pub fn builder() -> NotificationBuilder {
        NotificationBuilder::default()
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn respond_async(&self) -> bool {
        self.respond_async
    }

    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationBuilder {
    payload: Option<Vec<u8>>,
    ttl: u32,
    urgency: Urgency,
    topic: Option<String>,
    respond_async: bool,
    metadata: HashMap<String, serde_json::Value>,
}

impl NotificationBuilder {
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn ttl(mut self, seconds: u32) -> Self {
        self.ttl = seconds;
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn respond_async(mut self, respond_async: bool) -> Self {
        self.respond_async = respond_async;
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn build(self) -> Result<Notification, ValidationError> {
        if let Some(topic) = self.topic.as_deref()
            && topic.trim().is_empty()
        {
            return Err(ValidationError::BlankTopic);
        }
        Ok(Notification {
            payload: self.payload,
            ttl: self.ttl,
            urgency: self.urgency,
            topic: self.topic,
            respond_async: self.respond_async,
            metadata: self.metadata,
        })
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn build__should_use_documented_defaults() {
        let notification = Notification::builder().build().expect("build");

        assert!(notification.payload().is_none());
        assert_eq!(notification.ttl(), 0);
        assert_eq!(notification.urgency(), Urgency::Normal);
        assert!(notification.topic().is_none());
        assert!(!notification.respond_async());
        assert!(notification.metadata().is_empty());
    }

    #[test]
    fn build__should_reject_blank_topic() {
        let result = Notification::builder().topic("   ").build();
        assert_eq!(result.unwrap_err(), ValidationError::BlankTopic);
    }

    #[test]
    fn build__should_keep_all_configured_fields() {
        // Given
        let notification = Notification::builder()
            .payload("hello".as_bytes())
            .ttl(2419200)
            .urgency(Urgency::High)
            .topic("updates")
            .respond_async(true)
            .metadata("campaign", serde_json::json!("spring"))
            .build()
            .expect("build");

        // Then
        assert_eq!(notification.payload(), Some(&b"hello"[..]));
        assert_eq!(notification.ttl(), 2419200);
        assert_eq!(notification.urgency(), Urgency::High);
        assert_eq!(notification.topic(), Some("updates"));
        assert!(notification.respond_async());
        assert_eq!(
            notification.metadata().get("campaign"),
            Some(&serde_json::json!("spring"))
        );
    }

    #[test]
    fn urgency__should_parse_wire_names_and_reject_unknown() {
        assert_eq!("very-low".parse::<Urgency>().unwrap(), Urgency::VeryLow);
        assert_eq!("high".parse::<Urgency>().unwrap(), Urgency::High);
        assert!(matches!(
            "urgent".parse::<Urgency>(),
            Err(ValidationError::InvalidUrgency(_))
        ));
    }
}
