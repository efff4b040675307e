/// Input resolved for one counting kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentUnit {
    /// Undecoded input, used for byte counts.
    Bytes(Vec<u8>),
    /// UTF-8 decoded input with line terminators left untouched.
    Text(String),
}

impl ContentUnit {
    /// Storage view of the content; for text this is its UTF-8 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Bytes(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}
