use crate::error::WebPushError;
use crate::extensions::Extension;
use crate::types::{Notification, RequestData, Subscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct RespondAsyncExtension;

impl Extension for RespondAsyncExtension {
    fn name(&self) -> &'static str {
        "respond-async"
    }

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        _subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        if notification.respond_async() {
            request.set_header("Prefer", "respond-async");
        }
        Ok(())
    }
}
