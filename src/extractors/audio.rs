//! Extracción de etiquetas y propiedades de audio.

use super::ExtractError;
use crate::formatting::format_duration;
use crate::metadata::report::{ExtractionResult, FieldsBuilder};
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{ItemValue, Tag, TagItem};
use std::path::Path;

pub const TAGS_CATEGORY: &str = "Etiquetas de audio";
pub const PROPERTIES_CATEGORY: &str = "Propiedades de audio";

pub fn extract_audio_metadata(path: &Path) -> Result<ExtractionResult, ExtractError> {
    let tagged_file = Probe::open(path)?.read()?;

    let mut result = ExtractionResult::new();
    let tags = tag_fields(&tagged_file);
    tracing::debug!(
        file = %path.display(),
        tags = tagged_file.tags().len(),
        "etiquetas de audio leídas"
    );
    result.insert(TAGS_CATEGORY, tags.build());
    result.insert(PROPERTIES_CATEGORY, property_fields(&tagged_file).build());
    Ok(result)
}

fn tag_fields(tagged_file: &TaggedFile) -> FieldsBuilder {
    let mut fields = FieldsBuilder::new();
    for tag in tagged_file.tags() {
        for item in tag.items() {
            fields.push(item_key(tag, item), item_value(item.value()));
        }
        let pictures = tag.picture_count();
        if pictures > 0 {
            fields.push("Imágenes adjuntas", pictures.to_string());
        }
    }
    fields
}

/// Clave nativa del formato (p. ej. `TIT2`, `INAM`, `TITLE`).
fn item_key(tag: &Tag, item: &TagItem) -> String {
    item.key()
        .map_key(tag.tag_type(), true)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", item.key()))
}

fn item_value(value: &ItemValue) -> String {
    match value {
        ItemValue::Text(text) | ItemValue::Locator(text) => text.clone(),
        ItemValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

fn property_fields(tagged_file: &TaggedFile) -> FieldsBuilder {
    let properties = tagged_file.properties();
    let mut fields = FieldsBuilder::new();

    fields.push("Formato", file_type_label(tagged_file.file_type()));
    fields.push("Duración", format_duration(properties.duration()));
    fields.push_opt(
        "Bitrate",
        properties.audio_bitrate().map(|rate| format!("{rate} kbps")),
    );
    fields.push_opt(
        "Bitrate total",
        properties.overall_bitrate().map(|rate| format!("{rate} kbps")),
    );
    fields.push_opt(
        "Sample rate",
        properties.sample_rate().map(|rate| format!("{rate} Hz")),
    );
    fields.push_opt(
        "Bits por muestra",
        properties.bit_depth().map(|depth| depth.to_string()),
    );
    fields.push_opt(
        "Canales",
        properties.channels().map(|channels| channels.to_string()),
    );
    fields
}

fn file_type_label(file_type: FileType) -> String {
    match file_type {
        FileType::Mpeg => "MP3".to_string(),
        FileType::Flac => "FLAC".to_string(),
        FileType::Wav => "WAV".to_string(),
        other => format!("{other:?}"),
    }
}
