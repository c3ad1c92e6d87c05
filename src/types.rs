pub mod notification;
pub mod request;
pub mod subscription;

pub use notification::{Notification, NotificationBuilder, Urgency};
pub use request::RequestData;
pub use subscription::Subscription;
