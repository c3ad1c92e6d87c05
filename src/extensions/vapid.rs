use std::time::Duration;

use serde_json::{Map, Value};
use url::Url;

use crate::adapters::SystemClock;
use crate::error::{ValidationError, WebPushError};
use crate::extensions::Extension;
use crate::ports::Clock;
use crate::types::{Notification, RequestData, Subscription};
use crate::vapid::{VapidBackend, VapidConfig, VapidSigner, signer_from_config};

pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

pub struct VapidExtension<C = SystemClock> {
    signer: Box<dyn VapidSigner>,
    subject: String,
    token_ttl: Duration,
    clock: C,
}

impl VapidExtension<SystemClock> {
    pub fn new(signer: Box<dyn VapidSigner>, subject: impl Into<String>) -> Self {
        Self {
            signer,
            subject: subject.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
            clock: SystemClock,
        }
    }

    pub fn from_config(config: &VapidConfig, backend: VapidBackend) -> Result<Self, WebPushError> {
        let signer = signer_from_config(config, backend)?;
        Ok(Self::new(signer, config.subject.clone()))
    }
}

impl<C> VapidExtension<C> {
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> VapidExtension<C2> {
        VapidExtension {
            signer: self.signer,
            subject: self.subject,
            token_ttl: self.token_ttl,
            clock,
        }
    }
}

fn audience(endpoint: &str) -> Result<String, ValidationError> {
    let url = Url::parse(endpoint).map_err(|_| ValidationError::InvalidSubscriptionEndpoint)?;
    let host = url
        .host_str()
        .ok_or(ValidationError::InvalidSubscriptionEndpoint)?;
    match url.port() {
        Some(port) => Ok(format!("{}://{host}:{port}", url.scheme())),
        None => Ok(format!("{}://{host}", url.scheme())),
    }
}

impl<C: Clock> Extension for VapidExtension<C> {
    fn name(&self) -> &'static str {
        "vapid"
    }

    fn process(
        &self,
        request: &mut RequestData,
        _notification: &Notification,
        subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        let aud = audience(&subscription.endpoint)?;
        let exp = (self.clock.now() + self.token_ttl).unix_timestamp();

        let mut claims = Map::new();
        claims.insert("aud".to_string(), Value::from(aud));
        claims.insert("exp".to_string(), Value::from(exp));
        claims.insert("sub".to_string(), Value::from(self.subject.clone()));

        let header = self.signer.compute_header(&claims)?;
        request.set_header(
            "Authorization",
            format!("vapid t={}, k={}", header.token, header.key),
        );
        Ok(())
    }
}
