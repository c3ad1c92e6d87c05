pub mod payload;
pub mod respond_async;
pub mod topic;
pub mod ttl;
pub mod urgency;
pub mod vapid;

pub use payload::PayloadExtension;
pub use respond_async::RespondAsyncExtension;
pub use topic::TopicExtension;
pub use ttl::TtlExtension;
pub use urgency::UrgencyExtension;
pub use vapid::VapidExtension;

use std::sync::Arc;

use crate::adapters::NullLogger;
use crate::error::WebPushError;
use crate::ports::Logger;
use crate::types::{Notification, RequestData, Subscription};

pub trait Extension: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        subscription: &Subscription,
    ) -> Result<(), WebPushError>;
}

pub struct ExtensionPipeline {
    extensions: Vec<Box<dyn Extension>>,
    logger: Arc<dyn Logger>,
}

impl Default for ExtensionPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtensionPipeline {
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
            logger: Arc::new(NullLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn register(mut self, extension: impl Extension + 'static) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    pub fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        for extension in &self.extensions {
            self.logger
                .debug(&format!("applying extension {}", extension.name()));
            extension.process(request, notification, subscription)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingExtension {
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Extension for RecordingExtension {
        fn name(&self) -> &'static str {
            self.name
        }

        fn process(
            &self,
            _request: &mut RequestData,
            _notification: &Notification,
            _subscription: &Subscription,
        ) -> Result<(), WebPushError> {
            self.order.lock().expect("order lock").push(self.name);
            Ok(())
        }
    }

    #[test]
    fn process__should_run_extensions_in_registration_order() {
        // Given
        let order = Arc::new(Mutex::new(Vec::new()));
        let pipeline = ExtensionPipeline::new()
            .register(RecordingExtension {
                name: "third",
                order: Arc::clone(&order),
            })
            .register(RecordingExtension {
                name: "first",
                order: Arc::clone(&order),
            })
            .register(RecordingExtension {
                name: "second",
                order: Arc::clone(&order),
            });
        let notification = Notification::builder().build().expect("build");
        let subscription = Subscription::new("https://push.example.net/p/abc");

        // When
        pipeline
            .process(&mut RequestData::new(), &notification, &subscription)
            .expect("process");

        // Then
        assert_eq!(
            order.lock().expect("order lock").clone(),
            vec!["third", "first", "second"]
        );
    }
}
