use chrono::NaiveDate;
use regex::Regex;

use crate::masks::{remove_mask, Mask};
use crate::models::Status;

lazy_static::lazy_static! {
    static ref EMAIL: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex");
    static ref UF: Regex = Regex::new(r"^[A-Za-z]{2}$").expect("static regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Shown masked, sent as raw digits.
    Masked(Mask),
    Email,
    /// ISO `YYYY-MM-DD`.
    Date,
    /// `active` / `inactive` switch.
    Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    MaxLen(usize),
    /// Exact digit count once the mask is removed.
    Digits(usize),
    Email,
    Date,
    /// Two-letter state code.
    Uf,
}

impl Rule {
    /// Returns the message for a failing value, `None` when it passes.
    pub fn check(&self, value: &str) -> Option<String> {
        let trimmed = value.trim();
        match self {
            Rule::Required => trimmed.is_empty().then(|| "Campo obrigatório".to_string()),
            _ if trimmed.is_empty() => None,
            Rule::MaxLen(max) => (trimmed.chars().count() > *max)
                .then(|| format!("Máximo de {} caracteres", max)),
            Rule::Digits(count) => (remove_mask(trimmed).len() != *count)
                .then(|| format!("Deve conter {} dígitos", count)),
            Rule::Email => (!EMAIL.is_match(trimmed)).then(|| "E-mail inválido".to_string()),
            Rule::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .is_err()
                .then(|| "Data inválida".to_string()),
            Rule::Uf => (!UF.is_match(trimmed)).then(|| "UF inválida".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// Formats raw user input the way the field displays it.
    pub fn normalize(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Masked(mask) => mask.apply(raw),
            FieldKind::Date => raw.split('T').next().unwrap_or_default().to_string(),
            _ => raw.to_string(),
        }
    }

    pub fn validate(&self, value: &str) -> Option<String> {
        if self.kind == FieldKind::Switch && value.parse::<Status>().is_err() {
            return Some("Status inválido".to_string());
        }
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

pub const fn field(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
    rules: &'static [Rule],
) -> FieldSpec {
    FieldSpec { name, label, placeholder, kind, rules }
}
