use jwt_simple::algorithms::{ECDSAP256KeyPairLike, ES256KeyPair};
use jwt_simple::prelude::{Claims, Duration as JwtDuration};
use p256::ecdsa::signature::Signer;
use p256::ecdsa::{Signature, SigningKey};
use serde_json::{Map, Value};

use crate::base64url;
use crate::crypto::ServerKey;
use crate::error::{CryptoError, WebPushError};
use crate::vapid::{VapidHeader, VapidSigner};

pub struct JwtSimpleSigner {
    key_pair: ES256KeyPair,
    public_key: String,
}

impl JwtSimpleSigner {
    pub fn new(key: &ServerKey) -> Result<Self, WebPushError> {
        let key_pair = ES256KeyPair::from_bytes(key.private_key())
            .map_err(|_| CryptoError::InvalidKeyMaterial)?;
        Ok(Self {
            key_pair,
            public_key: key.public_key_b64(),
        })
    }
}

impl VapidSigner for JwtSimpleSigner {
    fn compute_header(&self, claims: &Map<String, Value>) -> Result<VapidHeader, WebPushError> {
        // every registered-claim slot stays empty so the payload is exactly
        // the given claims
        let mut claims = Claims::with_custom_claims(claims.clone(), JwtDuration::from_secs(0));
        claims.issued_at = None;
        claims.expires_at = None;
        claims.invalid_before = None;
        let token = self
            .key_pair
            .sign(claims)
            .map_err(|_| CryptoError::Signing)?;
        Ok(VapidHeader {
            token,
            key: self.public_key.clone(),
        })
    }
}

pub struct P256Signer {
    signing_key: SigningKey,
    public_key: String,
}

impl P256Signer {
    pub fn new(key: &ServerKey) -> Result<Self, WebPushError> {
        let signing_key = SigningKey::from_slice(key.private_key())
            .map_err(|_| CryptoError::InvalidKeyMaterial)?;
        Ok(Self {
            signing_key,
            public_key: key.public_key_b64(),
        })
    }
}

impl VapidSigner for P256Signer {
    fn compute_header(&self, claims: &Map<String, Value>) -> Result<VapidHeader, WebPushError> {
        let header = serde_json::json!({"typ": "JWT", "alg": "ES256"});
        let header = serde_json::to_vec(&header).map_err(|_| CryptoError::Signing)?;
        let payload = serde_json::to_vec(claims).map_err(|_| CryptoError::Signing)?;
        let signing_input = format!(
            "{}.{}",
            base64url::encode(header),
            base64url::encode(payload)
        );

        // JWS ES256 wants the raw 64-byte r||s form, not DER
        let signature: Signature = self.signing_key.sign(signing_input.as_bytes());
        let token = format!(
            "{signing_input}.{}",
            base64url::encode(signature.to_bytes())
        );
        Ok(VapidHeader {
            token,
            key: self.public_key.clone(),
        })
    }
}
