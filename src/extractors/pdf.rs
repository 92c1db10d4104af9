//! Extracción de metadata en PDFs mediante lectura del diccionario Info.

use super::ExtractError;
use crate::formatting::format_pdf_date;
use crate::metadata::report::{ExtractionResult, FieldsBuilder};
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

pub const DOCUMENT_CATEGORY: &str = "Documento PDF";
pub const INFO_CATEGORY: &str = "Metadata PDF";

const DATE_KEYS: [&[u8]; 2] = [b"CreationDate", b"ModDate"];

pub fn extract_pdf_metadata(path: &Path) -> Result<ExtractionResult, ExtractError> {
    let doc = Document::load(path)?;
    let mut result = ExtractionResult::new();

    let mut document = FieldsBuilder::new();
    document.push("Versión", doc.version.clone());
    document.push("Páginas", doc.get_pages().len().to_string());
    result.insert(DOCUMENT_CATEGORY, document.build());

    let info = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|info| deref_dictionary(&doc, info));

    match info {
        Some(dict) => {
            result.insert_if_present(INFO_CATEGORY, info_fields(&doc, dict).build());
        }
        None => tracing::debug!(file = %path.display(), "PDF sin diccionario Info"),
    }

    Ok(result)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn info_fields(doc: &Document, dict: &Dictionary) -> FieldsBuilder {
    let mut fields = FieldsBuilder::new();
    for (key, value) in dict.iter() {
        let Some(text) = object_to_string(doc, value) else {
            continue;
        };
        let text = if DATE_KEYS.iter().any(|date_key| *date_key == key.as_slice()) {
            format_pdf_date(&text)
        } else {
            text
        };
        fields.push(String::from_utf8_lossy(key).into_owned(), text);
    }
    fields
}

fn object_to_string(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes).trim().to_string()),
        Object::Name(name) => Some(String::from_utf8_lossy(name).trim().to_string()),
        Object::Integer(value) => Some(value.to_string()),
        Object::Real(value) => Some(value.to_string()),
        Object::Boolean(value) => Some(value.to_string()),
        Object::Reference(reference) => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_string(doc, inner)),
        _ => None,
    }
}

/// Cadenas de texto PDF: UTF-16BE con BOM o, en su defecto, bytes Latin-1.
pub fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(data) = bytes.strip_prefix(b"\xFE\xFF") {
        let units = data
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect::<Vec<_>>();
        return String::from_utf16_lossy(&units);
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }
    bytes.iter().map(|&byte| byte as char).collect()
}
