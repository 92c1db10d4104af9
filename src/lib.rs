//! Extracción de metadata para imágenes, audio, texto, PDF y documentos Word.
//!
//! El flujo es lineal: [`extractors::extract`] produce un
//! [`metadata::ExtractionResult`], [`metadata::flatten`] lo convierte en líneas
//! y un [`metadata::DisplaySink`] las muestra.

pub mod extractors;
pub mod formatting;
pub mod metadata;

pub use extractors::{ExtractError, ExtractOptions, extract, extract_with, try_extract};
pub use metadata::{DisplaySink, ExtractionResult, Payload, flatten, render};
