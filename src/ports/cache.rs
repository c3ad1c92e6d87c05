use std::time::Duration;

use crate::crypto::ServerKey;

pub trait KeyCache: Send + Sync {
    fn get(&self, key: &str) -> Option<ServerKey>;
    fn set(&self, key: &str, value: ServerKey, ttl: Duration);
}
