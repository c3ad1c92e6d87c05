use crate::error::WebPushError;
use crate::extensions::Extension;
use crate::types::{Notification, RequestData, Subscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct TopicExtension;

impl Extension for TopicExtension {
    fn name(&self) -> &'static str {
        "topic"
    }

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        _subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        if let Some(topic) = notification.topic() {
            request.set_header("Topic", topic);
        }
        Ok(())
    }
}
