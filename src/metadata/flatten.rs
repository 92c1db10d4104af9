//! Conversión del resultado de extracción en líneas listas para mostrarse.

use super::report::{ExtractionResult, Payload};
use std::fmt;

pub const FALLBACK_LINE: &str = "No se encontró metadata o no se pudo procesar el archivo.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisplayLine {
    Header(String),
    Entry { key: String, value: String },
    Value(String),
    Error(String),
    Blank,
    Fallback,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayLine::Header(name) => write!(f, "{name}:"),
            DisplayLine::Entry { key, value } => write!(f, "{key}: {value}"),
            DisplayLine::Value(value) | DisplayLine::Error(value) => f.write_str(value),
            DisplayLine::Blank => Ok(()),
            DisplayLine::Fallback => f.write_str(FALLBACK_LINE),
        }
    }
}

pub fn flatten_lines(result: &ExtractionResult) -> Vec<DisplayLine> {
    if result.is_empty() {
        return vec![DisplayLine::Fallback];
    }

    let mut lines = Vec::new();
    for category in &result.categories {
        lines.push(DisplayLine::Header(category.name.clone()));
        match &category.payload {
            Payload::List(items) => {
                lines.extend(items.iter().cloned().map(DisplayLine::Value));
            }
            Payload::Fields(fields) => {
                lines.extend(fields.iter().map(|(key, value)| DisplayLine::Entry {
                    key: key.clone(),
                    value: value.clone(),
                }));
            }
            Payload::Text(text) => lines.push(DisplayLine::Value(text.clone())),
            Payload::Error(message) => lines.push(DisplayLine::Error(message.clone())),
        }
        lines.push(DisplayLine::Blank);
    }
    lines
}

pub fn flatten(result: &ExtractionResult) -> Vec<String> {
    flatten_lines(result)
        .iter()
        .map(ToString::to_string)
        .collect()
}
