use crate::foundation::fixed::Ufixed8P8;
use crate::model::basic::Rect;
use crate::model::tags::Tag;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Movie {
    pub header: Header,
    pub tags: Vec<Tag>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Header {
    pub swf_version: u8,
    pub frame_size: Rect,
    pub frame_rate: Ufixed8P8,
    pub frame_count: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Container compression, reflected in the file signature.
pub enum CompressionMethod {
    #[default]
    None,
    Deflate,
    Lzma,
}

impl CompressionMethod {
    pub fn signature(self) -> [u8; 3] {
        match self {
            Self::None => *b"FWS",
            Self::Deflate => *b"CWS",
            Self::Lzma => *b"ZWS",
        }
    }
}
