use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::base64url;
use crate::error::{ValidationError, WebPushError};

pub const PUBLIC_KEY_LENGTH: usize = 65;
pub const PRIVATE_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerKey {
    public_key: [u8; PUBLIC_KEY_LENGTH],
    private_key: [u8; PRIVATE_KEY_LENGTH],
}

impl ServerKey {
    pub fn new(public_key: &[u8], private_key: &[u8]) -> Result<Self, ValidationError> {
        if public_key.len() != PUBLIC_KEY_LENGTH || public_key[0] != 0x04 {
            return Err(ValidationError::InvalidPublicKeyLength(public_key.len()));
        }
        if private_key.len() != PRIVATE_KEY_LENGTH {
            return Err(ValidationError::InvalidPrivateKeyLength(private_key.len()));
        }
        let mut key = Self {
            public_key: [0u8; PUBLIC_KEY_LENGTH],
            private_key: [0u8; PRIVATE_KEY_LENGTH],
        };
        key.public_key.copy_from_slice(public_key);
        key.private_key.copy_from_slice(private_key);
        Ok(key)
    }

    pub fn from_base64(public_key: &str, private_key: &str) -> Result<Self, WebPushError> {
        let public_key = base64url::decode(public_key)?;
        let private_key = base64url::decode(private_key)?;
        Ok(Self::new(&public_key, &private_key)?)
    }

    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = p256::SecretKey::random(rng);
        let point = secret.public_key().to_encoded_point(false);

        let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
        public_key.copy_from_slice(point.as_bytes());
        let mut private_key = [0u8; PRIVATE_KEY_LENGTH];
        private_key.copy_from_slice(&secret.to_bytes());

        Self {
            public_key,
            private_key,
        }
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    pub fn public_key_b64(&self) -> String {
        base64url::encode(self.public_key)
    }
}
