//! Modelo del resultado de extracción y su presentación en líneas de texto.

pub mod flatten;
pub mod report;
pub mod sink;

pub use flatten::{DisplayLine, FALLBACK_LINE, flatten, flatten_lines};
pub use report::{Category, ERROR_CATEGORY, ExtractionResult, Payload};
pub use sink::{ConsoleSink, DisplaySink, MemorySink, render};
