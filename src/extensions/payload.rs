use std::sync::Arc;

use crate::adapters::NullLogger;
use crate::encoder::PayloadEncoder;
use crate::error::{ConfigurationError, WebPushError};
use crate::extensions::Extension;
use crate::ports::Logger;
use crate::types::{Notification, RequestData, Subscription};

pub struct PayloadExtension {
    encoders: Vec<PayloadEncoder>,
    logger: Arc<dyn Logger>,
}

impl Default for PayloadExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadExtension {
    pub fn new() -> Self {
        Self {
            encoders: Vec::new(),
            logger: Arc::new(NullLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn register(mut self, encoder: PayloadEncoder) -> Self {
        self.encoders.push(encoder);
        self
    }
}

impl Extension for PayloadExtension {
    fn name(&self) -> &'static str {
        "payload"
    }

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        let Some(payload) = notification.payload() else {
            request.set_header("Content-Length", "0");
            return Ok(());
        };

        // first declared encoding with a registered encoder wins
        for encoding in &subscription.supported_content_encodings {
            if let Some(encoder) = self
                .encoders
                .iter()
                .find(|encoder| encoder.coding().name() == encoding)
            {
                self.logger
                    .debug(&format!("encrypting payload with {encoding}"));
                return encoder.encode(payload, subscription, request);
            }
        }

        Err(ConfigurationError::NoSupportedContentEncoding(
            subscription.supported_content_encodings.clone(),
        )
        .into())
    }
}
