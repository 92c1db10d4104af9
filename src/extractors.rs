//! Despacho por extensión hacia el extractor de metadata correspondiente.

mod audio;
mod error;
mod image;
mod kind;
mod office;
mod pdf;
mod text;


pub use audio::{PROPERTIES_CATEGORY as AUDIO_PROPERTIES_CATEGORY, TAGS_CATEGORY};
pub use error::{ExtractError, UNSUPPORTED_MESSAGE};
pub use image::{CONTAINER_EXIF_CATEGORY, DECODER_EXIF_CATEGORY, IMAGE_CATEGORY};
pub use kind::FileKind;
pub use office::PROPERTIES_CATEGORY as DOCUMENT_PROPERTIES_CATEGORY;
pub use pdf::{DOCUMENT_CATEGORY as PDF_DOCUMENT_CATEGORY, INFO_CATEGORY as PDF_INFO_CATEGORY};
pub use text::{CONTENT_CATEGORY, ENCODING_CATEGORY, TextEncoding, detect_encoding};

use crate::metadata::report::ExtractionResult;
use infer::Infer;
use std::path::Path;

pub const DEFAULT_CONTENT_LIMIT: usize = 1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExtractOptions {
    /// Máximo de caracteres mostrados del contenido de texto y Word.
    pub content_limit: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            content_limit: DEFAULT_CONTENT_LIMIT,
        }
    }
}

/// Extrae la metadata de `path`. Nunca falla: cualquier error queda
/// registrado en una única categoría `Error`.
pub fn extract(path: &Path) -> ExtractionResult {
    extract_with(path, &ExtractOptions::default())
}

pub fn extract_with(path: &Path, options: &ExtractOptions) -> ExtractionResult {
    match try_extract(path, options) {
        Ok(result) => result,
        Err(error) => {
            tracing::warn!(file = %path.display(), %error, "extracción fallida");
            ExtractionResult::error(error.to_string())
        }
    }
}

pub fn try_extract(path: &Path, options: &ExtractOptions) -> Result<ExtractionResult, ExtractError> {
    let kind = FileKind::from_path(path);
    tracing::debug!(file = %path.display(), kind = kind.label(), "archivo clasificado");

    if kind != FileKind::Unsupported {
        check_content_type(path, kind);
    }

    match kind {
        FileKind::Image => image::extract_image_metadata(path),
        FileKind::Audio => audio::extract_audio_metadata(path),
        FileKind::Text => text::extract_text_metadata(path, options),
        FileKind::Pdf => pdf::extract_pdf_metadata(path),
        FileKind::Word => office::extract_word_metadata(path, options),
        FileKind::Unsupported => Err(ExtractError::Unsupported),
    }
}

/// Avisa cuando el contenido detectado no coincide con la extensión.
fn check_content_type(path: &Path, kind: FileKind) {
    let Some(mime) = Infer::new()
        .get_from_path(path)
        .ok()
        .flatten()
        .map(|detected| detected.mime_type())
    else {
        return;
    };

    let consistent = match kind {
        FileKind::Image => mime.starts_with("image/"),
        FileKind::Audio => mime.starts_with("audio/"),
        FileKind::Pdf => mime == "application/pdf",
        FileKind::Word => mime.contains("officedocument") || mime == "application/zip",
        FileKind::Text | FileKind::Unsupported => true,
    };

    if !consistent {
        tracing::warn!(
            file = %path.display(),
            expected = kind.label(),
            detected = mime,
            "el contenido no coincide con la extensión"
        );
    }
}
