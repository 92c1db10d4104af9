//! Modelos compartidos para reportar la metadata extraída de manera consistente.

use serde::Serialize;

/// Nombre de la categoría reservada para fallos de extracción.
pub const ERROR_CATEGORY: &str = "Error";

/// Contenido asociado a una categoría.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Fields(Vec<(String, String)>),
    List(Vec<String>),
    Text(String),
    Error(String),
}

impl Payload {
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Fields(fields) => fields.is_empty(),
            Payload::List(items) => items.is_empty(),
            Payload::Text(text) | Payload::Error(text) => text.is_empty(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub payload: Payload,
}

/// Resultado de una extracción: categorías en orden de inserción.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub categories: Vec<Category>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resultado con una única categoría `Error`.
    pub fn error(message: impl Into<String>) -> Self {
        let mut result = Self::new();
        result.insert(ERROR_CATEGORY, Payload::Error(message.into()));
        result
    }

    /// Inserta una categoría; si el nombre ya existe reemplaza su contenido
    /// sin alterar la posición original.
    pub fn insert(&mut self, name: impl Into<String>, payload: Payload) {
        let name = name.into();
        match self.categories.iter_mut().find(|category| category.name == name) {
            Some(existing) => existing.payload = payload,
            None => self.categories.push(Category { name, payload }),
        }
    }

    /// Inserta la categoría solo si su contenido no está vacío.
    pub fn insert_if_present(&mut self, name: impl Into<String>, payload: Payload) {
        if !payload.is_empty() {
            self.insert(name, payload);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Payload> {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| &category.payload)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.get(ERROR_CATEGORY) {
            Some(Payload::Error(message)) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Acumula pares clave/valor en orden, descartando valores vacíos.
#[derive(Debug, Default)]
pub struct FieldsBuilder {
    fields: Vec<(String, String)>,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.fields.push((key.into(), value));
    }

    pub fn push_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn build(self) -> Payload {
        Payload::Fields(self.fields)
    }
}
