pub mod adapters;
pub mod base64url;
pub mod crypto;
pub mod encoder;
pub mod error;
pub mod extensions;
pub mod ports;
pub mod types;
pub mod vapid;

pub use crate::encoder::{ContentCoding, Padding, PayloadEncoder};
pub use crate::error::{
    ConfigurationError, CryptoError, ValidationError, WebPushError,
};
pub use crate::extensions::{Extension, ExtensionPipeline};
pub use crate::types::{Notification, RequestData, Subscription, Urgency};
pub use crate::vapid::{VapidBackend, VapidConfig, VapidHeader};

pub struct WebPush {
    pipeline: ExtensionPipeline,
}

impl WebPush {
    pub fn new(pipeline: ExtensionPipeline) -> Self {
        Self { pipeline }
    }

    pub fn build_request(
        &self,
        notification: &Notification,
        subscription: &Subscription,
    ) -> Result<RequestData, WebPushError> {
        let mut request = RequestData::new();
        self.pipeline
            .process(&mut request, notification, subscription)?;
        Ok(request)
    }
}
