//! Text encodings used to store string content and to read it back.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};

use crate::error::EncodingError;

// Accepts base64 input with or without trailing `=` padding.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Character encoding applied when text is turned into file content or
/// file content is read back as text.
///
/// Names are parsed case-insensitively with the usual aliases:
///
/// ```
/// use fake_fs::Encoding;
///
/// assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
/// assert_eq!("latin1".parse::<Encoding>().unwrap(), Encoding::Binary);
/// assert!("klingon".parse::<Encoding>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    Utf8,
    /// 7-bit ASCII. Reading strips the high bit of every byte.
    Ascii,
    /// One byte per char (ISO-8859-1). Writing keeps the low 8 bits of each
    /// char. This is the encoding of text given without an explicit one.
    #[default]
    Binary,
    Base64,
    Hex,
    /// UTF-16 little endian, a.k.a. `ucs2`.
    Utf16Le,
}

impl Encoding {
    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Ascii => "ascii",
            Encoding::Binary => "binary",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Utf16Le => "utf16le",
        }
    }

    /// Converts `text` into the bytes it stands for in this encoding.
    ///
    /// Fails only for `base64` and `hex` text that is not well formed.
    pub fn to_bytes(self, text: &str) -> Result<Vec<u8>, EncodingError> {
        let bytes = match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Ascii | Encoding::Binary => text.chars().map(|c| c as u32 as u8).collect(),
            Encoding::Base64 => BASE64_LENIENT.decode(text.trim())?,
            Encoding::Hex => hex::decode(text.trim())?,
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        };
        Ok(bytes)
    }

    /// Renders `bytes` as text in this encoding. Never fails: invalid
    /// sequences are replaced with `U+FFFD`, a trailing odd byte of UTF-16
    /// content is dropped.
    pub fn to_text(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Ascii => bytes.iter().map(|&b| (b & 0x7f) as char).collect(),
            Encoding::Binary => bytes.iter().map(|&b| b as char).collect(),
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
            Encoding::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "binary" | "latin1" => Ok(Encoding::Binary),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            _ => Err(EncodingError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
