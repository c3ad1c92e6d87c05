use crate::encoder::coding::ContentCoding;
use crate::error::ValidationError;

pub const RECOMMENDED_PADDING: usize = 3052;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    None,
    #[default]
    Recommended,
    Max,
    Custom(usize),
}

impl Padding {
    // The target is a total record length, not an added-byte count.
    pub(crate) fn target(self, coding: ContentCoding) -> Result<usize, ValidationError> {
        match self {
            Padding::None => Ok(0),
            Padding::Recommended => Ok(RECOMMENDED_PADDING),
            Padding::Max => Ok(coding.padding_max()),
            Padding::Custom(size) if size <= coding.padding_max() => Ok(size),
            Padding::Custom(_) => Err(ValidationError::InvalidPaddingSize),
        }
    }
}
