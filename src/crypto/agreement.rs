use hkdf::Hkdf;
use sha2::Sha256;

use crate::error::CryptoError;

pub fn derive_shared_secret(
    receiver_public: &[u8],
    sender_private: &[u8],
) -> Result<[u8; 32], CryptoError> {
    let secret =
        p256::SecretKey::from_slice(sender_private).map_err(|_| CryptoError::InvalidKeyMaterial)?;
    let public = p256::PublicKey::from_sec1_bytes(receiver_public)
        .map_err(|_| CryptoError::InvalidKeyMaterial)?;
    let shared = p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), public.as_affine());

    let mut out = [0u8; 32];
    out.copy_from_slice(shared.raw_secret_bytes());
    Ok(out)
}

pub fn compute_ikm(
    key_info: &[u8],
    auth_secret: &[u8],
    receiver_public: &[u8],
    sender_private: &[u8],
) -> Result<[u8; 32], CryptoError> {
    let shared = derive_shared_secret(receiver_public, sender_private)?;
    let mut ikm = [0u8; 32];
    derive_material(auth_secret, &shared, key_info, &mut ikm)?;
    Ok(ikm)
}

pub fn derive_material(
    salt: &[u8],
    ikm: &[u8],
    info: &[u8],
    out: &mut [u8],
) -> Result<(), CryptoError> {
    Hkdf::<Sha256>::new(Some(salt), ikm)
        .expand(info, out)
        .map_err(|_| CryptoError::Agreement)
}
