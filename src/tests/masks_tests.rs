use crate::masks::{apply_pattern, cep_mask, cnpj_mask, cpf_mask, remove_mask, Mask};

#[test]
fn test_full_masks() {
    assert_eq!(cnpj_mask("12345678000195"), "12.345.678/0001-95");
    assert_eq!(cpf_mask("12345678900"), "123.456.789-00");
    assert_eq!(cep_mask("01310100"), "01310-100");
}

#[test]
fn test_masks_are_progressive() {
    assert_eq!(cpf_mask(""), "");
    assert_eq!(cpf_mask("1"), "1");
    assert_eq!(cpf_mask("123"), "123");
    assert_eq!(cpf_mask("1234"), "123.4");
    assert_eq!(cnpj_mask("12345"), "12.345");
    assert_eq!(cep_mask("013101"), "01310-1");
}

#[test]
fn test_mask_ignores_non_digits_and_extra_digits() {
    assert_eq!(cpf_mask("123.456.789-00"), "123.456.789-00");
    assert_eq!(cpf_mask("abc123456789001234"), "123.456.789-00");
    assert_eq!(cep_mask("01310-100"), "01310-100");
}

#[test]
fn test_remove_mask() {
    assert_eq!(remove_mask("12.345.678/0001-95"), "12345678000195");
    assert_eq!(remove_mask("123.456.789-00"), "12345678900");
    assert_eq!(remove_mask("01310-100"), "01310100");
    assert_eq!(remove_mask(""), "");
}

#[test]
fn test_mask_then_unmask_keeps_digits() {
    for (mask, raw) in [
        (Mask::Cnpj, "12345678000195"),
        (Mask::Cpf, "98765432100"),
        (Mask::Cep, "20040002"),
    ] {
        assert_eq!(remove_mask(&mask.apply(raw)), raw);
    }
}

#[test]
fn test_digit_counts() {
    assert_eq!(Mask::Cnpj.digit_count(), 14);
    assert_eq!(Mask::Cpf.digit_count(), 11);
    assert_eq!(Mask::Cep.digit_count(), 8);
}

#[test]
fn test_apply_pattern_custom() {
    assert_eq!(apply_pattern("5511987654321", "+00 (00) 00000-0000"), "+55 (11) 98765-4321");
}
