//! Extracción de metadata EXIF de imágenes con dos lectores independientes.

use super::ExtractError;
use crate::formatting::format_size;
use crate::metadata::report::{ExtractionResult, FieldsBuilder, Payload};
use exif::{Context, Exif, Field, In, Value};
use image::{ImageDecoder, ImageReader};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

pub const DECODER_EXIF_CATEGORY: &str = "Metadata EXIF";
pub const CONTAINER_EXIF_CATEGORY: &str = "Etiquetas EXIF";
pub const IMAGE_CATEGORY: &str = "Imagen";

const EXIF_HEADER: &[u8] = b"Exif\0\0";

pub fn extract_image_metadata(path: &Path) -> Result<ExtractionResult, ExtractError> {
    let mut result = ExtractionResult::new();

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|error| ExtractError::io(path, error))?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    let color = decoder.color_type();

    if let Some(raw) = decoder.exif_metadata()?
        && let Some(exif) = parse_raw_exif(raw)
    {
        result.insert_if_present(DECODER_EXIF_CATEGORY, decoder_fields(&exif).build());
    }

    let container = read_container_exif(path)?;
    tracing::debug!(
        file = %path.display(),
        tags = container.len(),
        "etiquetas EXIF del contenedor"
    );
    result.insert(CONTAINER_EXIF_CATEGORY, Payload::Fields(container));

    let mut info = FieldsBuilder::new();
    info.push_opt(
        "Formato",
        format.map(|value| format!("{value:?}").to_uppercase()),
    );
    info.push("Dimensiones", format!("{width}x{height}"));
    info.push("Color", format!("{color:?}"));
    if let Ok(metadata) = fs::metadata(path) {
        info.push("Tamaño", format_size(metadata.len()));
    }
    result.insert(IMAGE_CATEGORY, info.build());

    Ok(result)
}

/// El bloque crudo puede llegar con o sin la cabecera APP1 `Exif\0\0`.
fn parse_raw_exif(mut raw: Vec<u8>) -> Option<Exif> {
    if raw.starts_with(EXIF_HEADER) {
        raw.drain(..EXIF_HEADER.len());
    }
    if raw.is_empty() {
        return None;
    }
    match exif::Reader::new().read_raw(raw) {
        Ok(exif) => Some(exif),
        Err(error) => {
            tracing::debug!(%error, "EXIF del decodificador ilegible");
            None
        }
    }
}

fn decoder_fields(exif: &Exif) -> FieldsBuilder {
    let mut fields = FieldsBuilder::new();
    for field in exif.fields().filter(|field| field.ifd_num == In::PRIMARY) {
        fields.push(field.tag.to_string(), field_value(field, exif));
    }
    fields
}

/// Lee las etiquetas EXIF directamente del contenedor. La ausencia de EXIF
/// produce una lista vacía.
fn read_container_exif(path: &Path) -> Result<Vec<(String, String)>, ExtractError> {
    let file = File::open(path).map_err(|error| ExtractError::io(path, error))?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) | Err(exif::Error::BlankValue(_)) => return Ok(Vec::new()),
        Err(error) => return Err(error.into()),
    };

    Ok(exif
        .fields()
        .map(|field| {
            (
                format!("{} {}", group_label(field.ifd_num, field.tag.context()), field.tag),
                field_value(field, &exif),
            )
        })
        .collect())
}

/// Las cadenas ASCII se muestran sin las comillas que añade `display_value`.
fn field_value(field: &Field, exif: &Exif) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .iter()
            .map(|part| String::from_utf8_lossy(part).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}

fn group_label(ifd: In, context: Context) -> &'static str {
    match context {
        Context::Tiff if ifd == In::THUMBNAIL => "Thumbnail",
        Context::Tiff => "Image",
        Context::Exif => "EXIF",
        Context::Gps => "GPS",
        Context::Interop => "Interoperability",
        _ => "Otro",
    }
}
