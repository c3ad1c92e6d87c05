use crate::base64url::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingUserAgentPublicKey,
    MissingUserAgentAuthToken,
    PayloadTooLarge,
    InvalidPaddingSize,
    InvalidSubscriptionEndpoint,
    InvalidPublicKeyLength(usize),
    InvalidPrivateKeyLength(usize),
    BlankTopic,
    InvalidUrgency(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingUserAgentPublicKey => {
                f.write_str("The user-agent public key is missing")
            }
            ValidationError::MissingUserAgentAuthToken => {
                f.write_str("The user-agent authentication token is missing")
            }
            ValidationError::PayloadTooLarge => {
                f.write_str("size of payload must not be greater than 4096 bytes")
            }
            ValidationError::InvalidPaddingSize => f.write_str("Invalid padding size"),
            ValidationError::InvalidSubscriptionEndpoint => {
                f.write_str("Invalid subscription endpoint")
            }
            ValidationError::InvalidPublicKeyLength(len) => {
                write!(f, "public key must be 65 bytes, got {len}")
            }
            ValidationError::InvalidPrivateKeyLength(len) => {
                write!(f, "private key must be 32 bytes, got {len}")
            }
            ValidationError::BlankTopic => f.write_str("topic must not be blank"),
            ValidationError::InvalidUrgency(value) => write!(f, "invalid urgency '{value}'"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    InvalidKeyMaterial,
    Agreement,
    Cipher,
    Signing,
}

impl std::fmt::Display for CryptoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CryptoError::InvalidKeyMaterial => f.write_str("invalid EC key material"),
            CryptoError::Agreement => f.write_str("ECDH key agreement failed"),
            CryptoError::Cipher => f.write_str("AES-128-GCM encryption failed"),
            CryptoError::Signing => f.write_str("ES256 signing failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    NoSupportedContentEncoding(Vec<String>),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::NoSupportedContentEncoding(declared) => write!(
                f,
                "no registered payload encoder matches the subscription content encodings [{}]",
                declared.join(", ")
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPushError {
    Validation(ValidationError),
    Crypto(CryptoError),
    Configuration(ConfigurationError),
    Decode(DecodeError),
}

impl std::fmt::Display for WebPushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebPushError::Validation(err) => err.fmt(f),
            WebPushError::Crypto(err) => err.fmt(f),
            WebPushError::Configuration(err) => err.fmt(f),
            WebPushError::Decode(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for WebPushError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebPushError::Validation(err) => Some(err),
            WebPushError::Crypto(err) => Some(err),
            WebPushError::Configuration(err) => Some(err),
            WebPushError::Decode(err) => Some(err),
        }
    }
}

impl From<ValidationError> for WebPushError {
    fn from(err: ValidationError) -> Self {
        WebPushError::Validation(err)
    }
}

impl From<CryptoError> for WebPushError {
    fn from(err: CryptoError) -> Self {
        WebPushError::Crypto(err)
    }
}

impl From<ConfigurationError> for WebPushError {
    fn from(err: ConfigurationError) -> Self {
        WebPushError::Configuration(err)
    }
}

impl From<DecodeError> for WebPushError {
    fn from(err: DecodeError) -> Self {
        WebPushError::Decode(err)
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn display__should_use_exact_messages_for_subscription_key_errors() {
        assert_eq!(
            ValidationError::MissingUserAgentPublicKey.to_string(),
            "The user-agent public key is missing"
        );
        assert_eq!(
            ValidationError::MissingUserAgentAuthToken.to_string(),
            "The user-agent authentication token is missing"
        );
    }

    #[test]
    fn display__should_mention_4096_for_oversized_payload() {
        assert!(ValidationError::PayloadTooLarge.to_string().contains("4096"));
    }

    #[test]
    fn web_push_error__should_delegate_display_to_inner_error() {
        let err = WebPushError::from(ValidationError::InvalidPaddingSize);
        assert_eq!(err.to_string(), "Invalid padding size");
    }

    #[test]
    fn configuration_error__should_list_declared_encodings() {
        let err = ConfigurationError::NoSupportedContentEncoding(vec![
            "aes256gcm".to_string(),
            "rot13".to_string(),
        ]);
        assert!(err.to_string().contains("aes256gcm, rot13"));
    }
}
