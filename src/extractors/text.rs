//! Detección de codificación y extracto de contenido para texto plano.

use super::{ExtractError, ExtractOptions};
use crate::metadata::report::{ExtractionResult, Payload};
use std::fs;
use std::path::Path;

pub const ENCODING_CATEGORY: &str = "Codificación";
pub const CONTENT_CATEGORY: &str = "Contenido";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextEncoding {
    Ascii,
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Latin1,
}

impl TextEncoding {
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ASCII",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf8Bom => "UTF-8-SIG",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Utf32Le => "UTF-32LE",
            TextEncoding::Utf32Be => "UTF-32BE",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    fn bom_len(self) -> usize {
        match self {
            TextEncoding::Utf8Bom => 3,
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => 2,
            TextEncoding::Utf32Le | TextEncoding::Utf32Be => 4,
            _ => 0,
        }
    }
}

pub fn extract_text_metadata(
    path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionResult, ExtractError> {
    let bytes = fs::read(path).map_err(|error| ExtractError::io(path, error))?;
    let encoding = detect_encoding(&bytes).ok_or(ExtractError::UndetectedEncoding)?;
    let content = decode(&bytes, encoding)?;

    tracing::debug!(
        file = %path.display(),
        encoding = encoding.name(),
        chars = content.chars().count(),
        "texto decodificado"
    );

    let mut result = ExtractionResult::new();
    result.insert(ENCODING_CATEGORY, Payload::Text(encoding.name().to_string()));
    result.insert_if_present(
        CONTENT_CATEGORY,
        Payload::Text(truncate_chars(&content, options.content_limit)),
    );
    Ok(result)
}

/// Primeros `limit` caracteres (no bytes) del texto.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

pub fn detect_encoding(bytes: &[u8]) -> Option<TextEncoding> {
    if bytes.is_empty() {
        return None;
    }
    if let Some(encoding) = detect_bom(bytes) {
        return Some(encoding);
    }
    if bytes.is_ascii() {
        return Some(TextEncoding::Ascii);
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(TextEncoding::Utf8);
    }
    Some(TextEncoding::Latin1)
}

fn detect_bom(bytes: &[u8]) -> Option<TextEncoding> {
    if bytes.starts_with(b"\x00\x00\xFE\xFF") {
        return Some(TextEncoding::Utf32Be);
    }
    if bytes.starts_with(b"\xFF\xFE\x00\x00") {
        return Some(TextEncoding::Utf32Le);
    }
    if bytes.starts_with(b"\xEF\xBB\xBF") {
        return Some(TextEncoding::Utf8Bom);
    }
    if bytes.starts_with(b"\xFF\xFE") {
        return Some(TextEncoding::Utf16Le);
    }
    if bytes.starts_with(b"\xFE\xFF") {
        return Some(TextEncoding::Utf16Be);
    }
    None
}

pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String, ExtractError> {
    let data = &bytes[encoding.bom_len().min(bytes.len())..];
    let invalid = || ExtractError::Decode {
        encoding: encoding.name(),
    };

    match encoding {
        TextEncoding::Ascii | TextEncoding::Utf8 | TextEncoding::Utf8Bom => {
            String::from_utf8(data.to_vec()).map_err(|_| invalid())
        }
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            if data.len() % 2 != 0 {
                return Err(invalid());
            }
            let units = data
                .chunks_exact(2)
                .map(|chunk| match encoding {
                    TextEncoding::Utf16Le => u16::from_le_bytes([chunk[0], chunk[1]]),
                    _ => u16::from_be_bytes([chunk[0], chunk[1]]),
                })
                .collect::<Vec<_>>();
            String::from_utf16(&units).map_err(|_| invalid())
        }
        TextEncoding::Utf32Le | TextEncoding::Utf32Be => {
            if data.len() % 4 != 0 {
                return Err(invalid());
            }
            data.chunks_exact(4)
                .map(|chunk| {
                    let value = match encoding {
                        TextEncoding::Utf32Le => {
                            u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
                        }
                        _ => u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
                    };
                    char::from_u32(value).ok_or_else(invalid)
                })
                .collect()
        }
        TextEncoding::Latin1 => Ok(data.iter().map(|&byte| byte as char).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_detection_prefers_utf32_over_utf16() {
        assert_eq!(
            detect_encoding(b"\xFF\xFE\x00\x00a\x00\x00\x00"),
            Some(TextEncoding::Utf32Le)
        );
        assert_eq!(detect_encoding(b"\xFF\xFEa\x00"), Some(TextEncoding::Utf16Le));
        assert_eq!(detect_encoding(b"\xEF\xBB\xBFhola"), Some(TextEncoding::Utf8Bom));
    }

    #[test]
    fn falls_back_to_latin1() {
        assert_eq!(detect_encoding(b"hola"), Some(TextEncoding::Ascii));
        assert_eq!(detect_encoding("ñandú".as_bytes()), Some(TextEncoding::Utf8));
        assert_eq!(detect_encoding(b"caf\xE9"), Some(TextEncoding::Latin1));
        assert_eq!(detect_encoding(b""), None);
    }

    #[test]
    fn decodes_each_family() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(decode(b"\xEF\xBB\xBFhola", TextEncoding::Utf8Bom)?, "hola");
        assert_eq!(decode(b"\xFE\xFF\x00h\x00i", TextEncoding::Utf16Be)?, "hi");
        assert_eq!(
            decode(b"\x00\x00\xFE\xFF\x00\x00\x00k", TextEncoding::Utf32Be)?,
            "k"
        );
        assert_eq!(decode(b"caf\xE9", TextEncoding::Latin1)?, "café");
        Ok(())
    }

    #[test]
    fn odd_utf16_payload_is_rejected() {
        assert!(matches!(
            decode(b"\xFF\xFEa", TextEncoding::Utf16Le),
            Err(ExtractError::Decode { encoding: "UTF-16LE" })
        ));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("ñañañ", 3), "ñañ");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
