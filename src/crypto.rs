pub mod agreement;
pub mod keys;

pub use keys::ServerKey;
