use base64::{URL_SAFE_NO_PAD, decode_config, encode_config};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError(base64::DecodeError);

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid base64url input: {}", self.0)
    }
}

impl std::error::Error for DecodeError {}

pub fn encode(data: impl AsRef<[u8]>) -> String {
    encode_config(data, URL_SAFE_NO_PAD)
}

pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode_config(input, URL_SAFE_NO_PAD).map_err(DecodeError)
}
