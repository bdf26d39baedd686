use std::fmt;

use super::MimeType;
use crate::limits::SIGNATURE_LEN;

/// Font container formats the library accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    TrueType,
    OpenType,
    Woff,
    Woff2,
}

impl FontFormat {
    pub const ALL: [FontFormat; 4] = [
        FontFormat::TrueType,
        FontFormat::OpenType,
        FontFormat::Woff,
        FontFormat::Woff2,
    ];

    /// Big-endian value of the first four bytes of a file in this format.
    pub const fn magic(self) -> u32 {
        match self {
            FontFormat::TrueType => 0x0001_0000,
            FontFormat::OpenType => 0x4F54_544F, // "OTTO"
            FontFormat::Woff => 0x774F_4646,     // "wOFF"
            FontFormat::Woff2 => 0x774F_4632,    // "wOF2"
        }
    }

    /// Reads the leading signature of `head`, if it has at least four bytes.
    pub fn signature(head: &[u8]) -> Option<u32> {
        let bytes: [u8; SIGNATURE_LEN] = head.get(..SIGNATURE_LEN)?.try_into().ok()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// Identifies the format from the leading bytes of a file.
    ///
    /// The extension plays no part here: a `.ttf` carrying an `OTTO` header
    /// sniffs as OpenType, and any unknown header is rejected.
    pub fn sniff(head: &[u8]) -> Option<Self> {
        let signature = Self::signature(head)?;
        Self::ALL.into_iter().find(|f| f.magic() == signature)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ttf" => Some(FontFormat::TrueType),
            "otf" => Some(FontFormat::OpenType),
            "woff" => Some(FontFormat::Woff),
            "woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub fn from_mime(mime: &MimeType) -> Option<Self> {
        match mime.as_str() {
            "font/ttf" | "application/x-font-ttf" | "application/font-sfnt" => {
                Some(FontFormat::TrueType)
            }
            "font/otf" | "application/x-font-opentype" => Some(FontFormat::OpenType),
            "font/woff" | "application/font-woff" => Some(FontFormat::Woff),
            "font/woff2" => Some(FontFormat::Woff2),
            _ => None,
        }
    }

    pub fn mime_type(self) -> MimeType {
        let mime = match self {
            FontFormat::TrueType => "font/ttf",
            FontFormat::OpenType => "font/otf",
            FontFormat::Woff => "font/woff",
            FontFormat::Woff2 => "font/woff2",
        };
        MimeType::from(mime)
    }

    /// Value of the `format()` hint in an `@font-face` source.
    pub fn css_format(self) -> &'static str {
        match self {
            FontFormat::TrueType => "truetype",
            FontFormat::OpenType => "opentype",
            FontFormat::Woff => "woff",
            FontFormat::Woff2 => "woff2",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontFormat::TrueType => "TrueType",
            FontFormat::OpenType => "OpenType",
            FontFormat::Woff => "WOFF",
            FontFormat::Woff2 => "WOFF2",
        };
        f.write_str(name)
    }
}
