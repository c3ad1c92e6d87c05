use crate::error::WebPushError;
use crate::extensions::Extension;
use crate::types::{Notification, RequestData, Subscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct UrgencyExtension;

impl Extension for UrgencyExtension {
    fn name(&self) -> &'static str {
        "urgency"
    }

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        _subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        request.set_header("Urgency", notification.urgency().as_str());
        Ok(())
    }
}
