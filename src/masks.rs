use regex::Regex;

lazy_static::lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"\D").expect("static regex");
}

pub const CNPJ_PATTERN: &str = "00.000.000/0000-00";
pub const CPF_PATTERN: &str = "000.000.000-00";
pub const CEP_PATTERN: &str = "00000-000";

/// Display masks applied to tax ids and postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Cnpj,
    Cpf,
    Cep,
}

impl Mask {
    pub fn pattern(&self) -> &'static str {
        match self {
            Mask::Cnpj => CNPJ_PATTERN,
            Mask::Cpf => CPF_PATTERN,
            Mask::Cep => CEP_PATTERN,
        }
    }

    /// Number of raw digits a complete value holds.
    pub fn digit_count(&self) -> usize {
        self.pattern().chars().filter(|c| *c == '0').count()
    }

    pub fn apply(&self, value: &str) -> String {
        apply_pattern(value, self.pattern())
    }
}

/// Formats the digits of `value` into `pattern`, where every `0` is a digit slot.
///
/// Masking is progressive: separators are only emitted while digits remain, so a
/// partially typed value renders as far as it goes. Extra digits are dropped.
pub fn apply_pattern(value: &str, pattern: &str) -> String {
    let mut digits = value.chars().filter(|c| c.is_ascii_digit()).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '0' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

pub fn cnpj_mask(value: &str) -> String {
    Mask::Cnpj.apply(value)
}

pub fn cpf_mask(value: &str) -> String {
    Mask::Cpf.apply(value)
}

pub fn cep_mask(value: &str) -> String {
    Mask::Cep.apply(value)
}

pub fn remove_mask(value: &str) -> String {
    NON_DIGITS.replace_all(value, "").into_owned()
}
