use std::path::PathBuf;
use thiserror::Error;

pub const UNSUPPORTED_MESSAGE: &str = "Tipo de archivo no soportado. Solo se admiten imágenes \
(.jpg, .jpeg, .png, .tiff), audio (.mp3, .flac, .wav), texto (.txt), PDF (.pdf) y Word (.docx).";

/// Fallos posibles al extraer metadata de un archivo.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{}", UNSUPPORTED_MESSAGE)]
    Unsupported,

    #[error("No se pudo leer `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No se pudo procesar la imagen: {0}")]
    Image(#[from] image::ImageError),

    #[error("No se pudo leer la metadata EXIF: {0}")]
    Exif(#[from] exif::Error),

    #[error("No se pudo leer el archivo de audio: {0}")]
    Audio(#[from] lofty::error::LoftyError),

    #[error("No se pudo leer el PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("No se pudo abrir el documento: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML inválido en el documento: {0}")]
    Xml(String),

    #[error("El documento no contiene `{0}`")]
    MissingPart(&'static str),

    #[error("No se pudo detectar la codificación del texto")]
    UndetectedEncoding,

    #[error("El texto no es válido en la codificación {encoding}")]
    Decode { encoding: &'static str },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
