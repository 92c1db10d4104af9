//! Clasificación de archivos según su extensión.

use std::path::Path;

pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "tiff"];
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "flac", "wav"];
pub const TEXT_EXTENSIONS: [&str; 1] = ["txt"];
pub const PDF_EXTENSIONS: [&str; 1] = ["pdf"];
pub const WORD_EXTENSIONS: [&str; 1] = ["docx"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    Image,
    Audio,
    Text,
    Pdf,
    Word,
    Unsupported,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match name.rsplit_once('.') {
            Some((_, extension)) => Self::from_extension(extension),
            None => FileKind::Unsupported,
        }
    }

    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.trim_start_matches('.').to_lowercase();
        let extension = extension.as_str();
        if IMAGE_EXTENSIONS.contains(&extension) {
            FileKind::Image
        } else if AUDIO_EXTENSIONS.contains(&extension) {
            FileKind::Audio
        } else if TEXT_EXTENSIONS.contains(&extension) {
            FileKind::Text
        } else if PDF_EXTENSIONS.contains(&extension) {
            FileKind::Pdf
        } else if WORD_EXTENSIONS.contains(&extension) {
            FileKind::Word
        } else {
            FileKind::Unsupported
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Image => "imagen",
            FileKind::Audio => "audio",
            FileKind::Text => "texto",
            FileKind::Pdf => "PDF",
            FileKind::Word => "Word",
            FileKind::Unsupported => "no soportado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_case_insensitively() {
        assert_eq!(FileKind::from_path(Path::new("foto.JPG")), FileKind::Image);
        assert_eq!(FileKind::from_path(Path::new("scan.TiFf")), FileKind::Image);
        assert_eq!(FileKind::from_path(Path::new("tema.Flac")), FileKind::Audio);
        assert_eq!(FileKind::from_path(Path::new("notas.TXT")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("informe.Pdf")), FileKind::Pdf);
        assert_eq!(FileKind::from_path(Path::new("carta.DOCX")), FileKind::Word);
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        assert_eq!(FileKind::from_path(Path::new("archivo.tif")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("archivo.doc")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Unsupported);
    }

    #[test]
    fn bare_suffix_still_counts() {
        assert_eq!(FileKind::from_path(Path::new("/tmp/.jpg")), FileKind::Image);
    }
}
