//! Lectura de propiedades y texto en documentos Word (.docx).

use super::text::{CONTENT_CATEGORY, truncate_chars};
use super::{ExtractError, ExtractOptions};
use crate::metadata::report::{ExtractionResult, FieldsBuilder, Payload};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use xmltree::{Element, XMLNode};
use zip::ZipArchive;
use zip::result::ZipError;

pub const PROPERTIES_CATEGORY: &str = "Propiedades del documento";

pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CP_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";
pub const APP_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const DOCUMENT_PART: &str = "word/document.xml";
const CORE_PART: &str = "docProps/core.xml";
const APP_PART: &str = "docProps/app.xml";

struct PropertyField {
    label: &'static str,
    local_name: &'static str,
    namespace: &'static str,
}

const CORE_FIELDS: [PropertyField; 15] = [
    PropertyField { label: "Título", local_name: "title", namespace: DC_NS },
    PropertyField { label: "Asunto", local_name: "subject", namespace: DC_NS },
    PropertyField { label: "Autor", local_name: "creator", namespace: DC_NS },
    PropertyField { label: "Palabras clave", local_name: "keywords", namespace: CP_NS },
    PropertyField { label: "Descripción", local_name: "description", namespace: DC_NS },
    PropertyField { label: "Última modificación por", local_name: "lastModifiedBy", namespace: CP_NS },
    PropertyField { label: "Revisión", local_name: "revision", namespace: CP_NS },
    PropertyField { label: "Fecha de creación", local_name: "created", namespace: DCTERMS_NS },
    PropertyField { label: "Fecha de modificación", local_name: "modified", namespace: DCTERMS_NS },
    PropertyField { label: "Categoría", local_name: "category", namespace: CP_NS },
    PropertyField { label: "Estado de contenido", local_name: "contentStatus", namespace: CP_NS },
    PropertyField { label: "Idioma", local_name: "language", namespace: DC_NS },
    PropertyField { label: "Identificador", local_name: "identifier", namespace: DC_NS },
    PropertyField { label: "Versión", local_name: "version", namespace: CP_NS },
    PropertyField { label: "Última impresión", local_name: "lastPrinted", namespace: CP_NS },
];

const APP_FIELDS: [PropertyField; 5] = [
    PropertyField { label: "Aplicación", local_name: "Application", namespace: APP_NS },
    PropertyField { label: "Empresa", local_name: "Company", namespace: APP_NS },
    PropertyField { label: "Páginas", local_name: "Pages", namespace: APP_NS },
    PropertyField { label: "Palabras", local_name: "Words", namespace: APP_NS },
    PropertyField { label: "Caracteres", local_name: "Characters", namespace: APP_NS },
];

pub fn extract_word_metadata(
    path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionResult, ExtractError> {
    let file = File::open(path).map_err(|error| ExtractError::io(path, error))?;
    let mut archive = ZipArchive::new(file)?;

    let document = read_part(&mut archive, DOCUMENT_PART, path)?
        .ok_or(ExtractError::MissingPart(DOCUMENT_PART))?;
    let paragraphs = body_paragraphs(&parse_xml(&document)?);

    let mut properties = FieldsBuilder::new();
    if let Some(core) = read_part(&mut archive, CORE_PART, path)? {
        extract_fields(&parse_xml(&core)?, &CORE_FIELDS, &mut properties);
    }
    if let Some(app) = read_part(&mut archive, APP_PART, path)? {
        extract_fields(&parse_xml(&app)?, &APP_FIELDS, &mut properties);
    }

    tracing::debug!(
        file = %path.display(),
        paragraphs = paragraphs.len(),
        "documento Word leído"
    );

    let mut result = ExtractionResult::new();
    result.insert_if_present(PROPERTIES_CATEGORY, properties.build());
    let content = truncate_chars(&paragraphs.join("\n"), options.content_limit);
    result.insert_if_present(CONTENT_CATEGORY, Payload::Text(content));
    Ok(result)
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &'static str,
    path: &Path,
) -> Result<Option<String>, ExtractError> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(error) => return Err(error.into()),
    };
    let mut contents = String::new();
    entry
        .read_to_string(&mut contents)
        .map_err(|error| ExtractError::io(path, error))?;
    Ok(Some(contents))
}

fn parse_xml(contents: &str) -> Result<Element, ExtractError> {
    Element::parse(contents.as_bytes()).map_err(|error| ExtractError::Xml(error.to_string()))
}

fn extract_fields(root: &Element, fields: &[PropertyField], properties: &mut FieldsBuilder) {
    for field in fields {
        properties.push_opt(
            field.label,
            find_child_text(root, field.local_name, field.namespace),
        );
    }
}

fn find_child_text(root: &Element, local_name: &str, namespace: &str) -> Option<String> {
    root.children.iter().find_map(|node| match node {
        XMLNode::Element(child) if is_named(child, local_name, namespace) => {
            Some(element_text_content(child))
        }
        _ => None,
    })
}

fn is_named(element: &Element, local_name: &str, namespace: &str) -> bool {
    element.name == local_name && element.namespace.as_deref() == Some(namespace)
}

fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    for node in &element.children {
        if let XMLNode::Text(text) = node {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}

/// Párrafos de primer nivel dentro de `w:body`, sin incluir tablas.
fn body_paragraphs(document: &Element) -> Vec<String> {
    let Some(body) = document.children.iter().find_map(|node| match node {
        XMLNode::Element(child) if is_named(child, "body", W_NS) => Some(child),
        _ => None,
    }) else {
        return Vec::new();
    };

    body.children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(child) if is_named(child, "p", W_NS) => {
                let mut text = String::new();
                collect_run_text(child, &mut text);
                Some(text)
            }
            _ => None,
        })
        .collect()
}

fn collect_run_text(element: &Element, out: &mut String) {
    for node in &element.children {
        let XMLNode::Element(child) = node else {
            continue;
        };
        if child.namespace.as_deref() != Some(W_NS) {
            continue;
        }
        match child.name.as_str() {
            "t" => {
                for inner in &child.children {
                    if let XMLNode::Text(text) = inner {
                        out.push_str(text);
                    }
                }
            }
            "tab" => out.push('\t'),
            "br" | "cr" => out.push('\n'),
            _ => collect_run_text(child, out),
        }
    }
}
