use crate::base64url;

pub const RECORD_SIZE: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCoding {
    AesGcm,
    Aes128Gcm,
}

impl ContentCoding {
    pub fn name(self) -> &'static str {
        match self {
            ContentCoding::AesGcm => "aesgcm",
            ContentCoding::Aes128Gcm => "aes128gcm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "aesgcm" => Some(ContentCoding::AesGcm),
            "aes128gcm" => Some(ContentCoding::Aes128Gcm),
            _ => None,
        }
    }

    pub(crate) fn padding_max(self) -> usize {
        match self {
            ContentCoding::AesGcm => 4078,
            ContentCoding::Aes128Gcm => 3993,
        }
    }

    pub(crate) fn cache_key(self) -> &'static str {
        match self {
            ContentCoding::AesGcm => "server-key.aesgcm",
            ContentCoding::Aes128Gcm => "server-key.aes128gcm",
        }
    }

    pub(crate) fn key_info(self, ua_public: &[u8], as_public: &[u8]) -> Vec<u8> {
        match self {
            ContentCoding::AesGcm => b"Content-Encoding: auth\0".to_vec(),
            ContentCoding::Aes128Gcm => {
                let mut info = Vec::with_capacity(14 + ua_public.len() + as_public.len());
                info.extend_from_slice(b"WebPush: info\0");
                info.extend_from_slice(ua_public);
                info.extend_from_slice(as_public);
                info
            }
        }
    }

    pub(crate) fn context(self, ua_public: &[u8], as_public: &[u8]) -> Vec<u8> {
        match self {
            ContentCoding::AesGcm => {
                let mut context = Vec::with_capacity(10 + ua_public.len() + as_public.len());
                context.extend_from_slice(b"P-256\0");
                context.extend_from_slice(&(ua_public.len() as u16).to_be_bytes());
                context.extend_from_slice(ua_public);
                context.extend_from_slice(&(as_public.len() as u16).to_be_bytes());
                context.extend_from_slice(as_public);
                context
            }
            ContentCoding::Aes128Gcm => Vec::new(),
        }
    }

    pub(crate) fn pad(self, payload: &[u8], target: usize) -> Vec<u8> {
        match self {
            // two-byte big-endian pad length, zeros, then the payload
            ContentCoding::AesGcm => {
                let pad_len = target.saturating_sub(payload.len());
                let mut padded = Vec::with_capacity(2 + pad_len + payload.len());
                padded.extend_from_slice(&(pad_len as u16).to_be_bytes());
                padded.resize(2 + pad_len, 0);
                padded.extend_from_slice(payload);
                padded
            }
            // payload, the 0x02 delimiter, then zeros up to the target
            ContentCoding::Aes128Gcm => {
                let mut padded = Vec::with_capacity(target.max(payload.len() + 1));
                padded.extend_from_slice(payload);
                padded.push(0x02);
                if target > padded.len() {
                    padded.resize(target, 0);
                }
                padded
            }
        }
    }

    pub(crate) fn frame(self, salt: &[u8; 16], as_public: &[u8; 65], ciphertext: Vec<u8>) -> Vec<u8> {
        match self {
            ContentCoding::AesGcm => ciphertext,
            ContentCoding::Aes128Gcm => {
                let mut body = Vec::with_capacity(16 + 4 + 1 + 65 + ciphertext.len());
                body.extend_from_slice(salt);
                body.extend_from_slice(&RECORD_SIZE.to_be_bytes());
                body.push(as_public.len() as u8);
                body.extend_from_slice(as_public);
                body.extend_from_slice(&ciphertext);
                body
            }
        }
    }

    pub(crate) fn extra_headers(
        self,
        salt: &[u8; 16],
        as_public: &[u8; 65],
    ) -> Vec<(&'static str, String)> {
        match self {
            ContentCoding::AesGcm => vec![
                ("Crypto-Key", format!("dh={}", base64url::encode(as_public))),
                ("Encryption", format!("salt={}", base64url::encode(salt))),
            ],
            ContentCoding::Aes128Gcm => Vec::new(),
        }
    }
}
