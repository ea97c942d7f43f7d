use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use super::schema::{FieldKind, FieldSpec};
use crate::error::{AdminError, AdminResult};
use crate::masks::remove_mask;

/// Field name → displayed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// Builds the request body: masked fields lose their punctuation and empty
/// optional fields become `null`.
pub fn payload_from_values(fields: &[FieldSpec], values: &FormValues) -> Map<String, Value> {
    let mut body = Map::new();
    for spec in fields {
        let value = values.get(spec.name).trim();
        let json = match spec.kind {
            FieldKind::Masked(_) => Value::String(remove_mask(value)),
            _ if value.is_empty() && !spec.is_required() => Value::Null,
            _ => Value::String(value.to_string()),
        };
        body.insert(spec.name.to_string(), json);
    }
    body
}

/// Values, validation and dirty tracking for one form instance.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: &'static [FieldSpec],
    initial: FormValues,
    values: FormValues,
    touched: BTreeSet<String>,
}

impl FormState {
    pub fn new(fields: &'static [FieldSpec], initial: FormValues) -> Self {
        Self {
            fields,
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn spec(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn initial(&self) -> &FormValues {
        &self.initial
    }

    /// Stores `raw` through the field's mask and marks the field touched.
    pub fn set_value(&mut self, name: &str, raw: &str) -> AdminResult<()> {
        let spec = self
            .spec(name)
            .ok_or_else(|| AdminError::InvalidInput(format!("Unknown field '{}'", name)))?;
        self.values.set(spec.name, spec.normalize(raw));
        self.touched.insert(spec.name.to_string());
        Ok(())
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(spec) = self.spec(name) {
            self.touched.insert(spec.name.to_string());
        }
    }

    pub fn touch_all(&mut self) {
        for spec in self.fields {
            self.touched.insert(spec.name.to_string());
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_dirty(&self) -> bool {
        self.fields
            .iter()
            .any(|f| self.values.get(f.name) != self.initial.get(f.name))
    }

    pub fn errors(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .filter_map(|f| f.validate(self.values.get(f.name)).map(|e| (f.name, e)))
            .collect()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.spec(name).and_then(|f| f.validate(self.values.get(f.name)))
    }

    /// Error text for display: only once the field was touched.
    pub fn visible_error(&self, name: &str) -> Option<String> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
