pub mod coding;
pub mod padding;

pub use coding::ContentCoding;
pub use padding::Padding;

use std::sync::Arc;
use std::time::Duration;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::adapters::NullLogger;
use crate::base64url;
use crate::crypto::{ServerKey, agreement};
use crate::error::{CryptoError, ValidationError, WebPushError};
use crate::ports::{KeyCache, Logger};
use crate::types::{RequestData, Subscription};

pub const MAX_BODY_LENGTH: usize = 4096;

pub struct PayloadEncoder {
    coding: ContentCoding,
    padding: Padding,
    cache: Option<Arc<dyn KeyCache>>,
    cache_ttl: Duration,
    logger: Arc<dyn Logger>,
}

impl PayloadEncoder {
    pub fn new(coding: ContentCoding) -> Self {
        Self {
            coding,
            padding: Padding::default(),
            cache: None,
            cache_ttl: Duration::from_secs(3600),
            logger: Arc::new(NullLogger),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn KeyCache>, ttl: Duration) -> Self {
        self.cache = Some(cache);
        self.cache_ttl = ttl;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn coding(&self) -> ContentCoding {
        self.coding
    }

    pub fn encode(
        &self,
        payload: &[u8],
        subscription: &Subscription,
        request: &mut RequestData,
    ) -> Result<(), WebPushError> {
        let ua_public = subscription
            .key("p256dh")
            .ok_or(ValidationError::MissingUserAgentPublicKey)?;
        let auth = subscription
            .key("auth")
            .ok_or(ValidationError::MissingUserAgentAuthToken)?;
        let ua_public = base64url::decode(ua_public)?;
        let auth = base64url::decode(auth)?;

        let mut salt = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        let server_key = self.server_key();

        self.seal(payload, &ua_public, &auth, &server_key, salt, request)
    }

    fn server_key(&self) -> ServerKey {
        let Some(cache) = self.cache.as_deref() else {
            return ServerKey::generate();
        };
        let cache_key = self.coding.cache_key();
        if let Some(key) = cache.get(cache_key) {
            self.logger.debug(&format!("reusing cached {cache_key}"));
            return key;
        }
        let key = ServerKey::generate();
        cache.set(cache_key, key.clone(), self.cache_ttl);
        self.logger.debug(&format!("generated fresh {cache_key}"));
        key
    }

    fn seal(
        &self,
        payload: &[u8],
        ua_public: &[u8],
        auth: &[u8],
        server_key: &ServerKey,
        salt: [u8; 16],
        request: &mut RequestData,
    ) -> Result<(), WebPushError> {
        let target = self.padding.target(self.coding)?;

        let key_info = self.coding.key_info(ua_public, server_key.public_key());
        let ikm = agreement::compute_ikm(&key_info, auth, ua_public, server_key.private_key())?;

        let context = self.coding.context(ua_public, server_key.public_key());
        let mut cek = [0u8; 16];
        agreement::derive_material(&salt, &ikm, &content_info(self.coding.name(), &context), &mut cek)?;
        let mut nonce = [0u8; 12];
        agreement::derive_material(&salt, &ikm, &content_info("nonce", &context), &mut nonce)?;

        let padded = self.coding.pad(payload, target);
        let cipher = Aes128Gcm::new_from_slice(&cek).map_err(|_| CryptoError::Cipher)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), padded.as_slice())
            .map_err(|_| CryptoError::Cipher)?;

        let body = self.coding.frame(&salt, server_key.public_key(), ciphertext);
        if body.len() > MAX_BODY_LENGTH {
            return Err(ValidationError::PayloadTooLarge.into());
        }

        for (name, value) in self.coding.extra_headers(&salt, server_key.public_key()) {
            request.set_header(name, value);
        }
        request.set_header("Content-Type", "application/octet-stream");
        request.set_header("Content-Encoding", self.coding.name());
        request.set_header("Content-Length", body.len().to_string());
        request.set_body(body);
        Ok(())
    }
}

fn content_info(info_type: &str, context: &[u8]) -> Vec<u8> {
    let mut info = Vec::with_capacity(19 + info_type.len() + context.len());
    info.extend_from_slice(b"Content-Encoding: ");
    info.extend_from_slice(info_type.as_bytes());
    info.push(0);
    info.extend_from_slice(context);
    info
}
