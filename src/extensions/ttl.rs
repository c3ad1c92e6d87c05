use crate::error::WebPushError;
use crate::extensions::Extension;
use crate::types::{Notification, RequestData, Subscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct TtlExtension;

impl Extension for TtlExtension {
    fn name(&self) -> &'static str {
        "ttl"
    }

    fn process(
        &self,
        request: &mut RequestData,
        notification: &Notification,
        _subscription: &Subscription,
    ) -> Result<(), WebPushError> {
        request.set_header("TTL", notification.ttl().to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn process__should_always_set_the_ttl_header() {
        let subscription = Subscription::new("https://push.example.net/p/abc");
        let mut request = RequestData::new();

        let notification = Notification::builder().build().expect("build");
        TtlExtension
            .process(&mut request, &notification, &subscription)
            .expect("process");
        assert_eq!(request.header("TTL"), Some("0"));

        let notification = Notification::builder().ttl(2419200).build().expect("build");
        TtlExtension
            .process(&mut request, &notification, &subscription)
            .expect("process");
        assert_eq!(request.header("TTL"), Some("2419200"));
    }
}
