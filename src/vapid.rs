pub mod signers;

pub use signers::{JwtSimpleSigner, P256Signer};

use serde_json::{Map, Value};

use crate::crypto::ServerKey;
use crate::error::WebPushError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VapidHeader {
    pub token: String,
    pub key: String,
}

pub trait VapidSigner: Send + Sync {
    fn compute_header(&self, claims: &Map<String, Value>) -> Result<VapidHeader, WebPushError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VapidBackend {
    #[default]
    JwtSimple,
    P256,
}

#[derive(Debug, Clone)]
pub struct VapidConfig {
    pub subject: String,
    pub public_key: String,
    pub private_key: String,
}

pub fn signer_from_config(
    config: &VapidConfig,
    backend: VapidBackend,
) -> Result<Box<dyn VapidSigner>, WebPushError> {
    let key = ServerKey::from_base64(&config.public_key, &config.private_key)?;
    match backend {
        VapidBackend::JwtSimple => Ok(Box::new(JwtSimpleSigner::new(&key)?)),
        VapidBackend::P256 => Ok(Box::new(P256Signer::new(&key)?)),
    }
}
