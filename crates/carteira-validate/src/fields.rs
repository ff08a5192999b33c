//! Single-value field validators.
//!
//! Every validator is a pure predicate and accepts the empty string:
//! requiredness is enforced separately by the row rules.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use carteira_model::{ContractTypeTag, TaxIdMode};

use crate::domains::{PORTES_EMPRESA, UFS, VALID_TIPOS_CONTRATO};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

/// Area code in parentheses, 8 or 9 digit number, optional hyphen.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\)\s?\d{4,5}-?\d{4}$").expect("Invalid phone regex")
});

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

pub fn validate_email(value: &str) -> bool {
    value.is_empty() || EMAIL_REGEX.is_match(value)
}

/// Strict `YYYY-MM-DD` that must also be a real calendar date.
pub fn validate_date(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if !DATE_REGEX.is_match(value) {
        return false;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .is_ok_and(|date| date.format("%Y-%m-%d").to_string() == value)
}

/// Case-insensitive `true` / `false`.
pub fn validate_boolean(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

/// The whole value must be the phone number; embedded numbers are rejected.
pub fn validate_phone(value: &str) -> bool {
    value.is_empty() || PHONE_REGEX.is_match(value)
}

/// CPF (11 digits) or CNPJ (14 digits). Punctuation is ignored.
///
/// [`TaxIdMode::Strict`] also verifies both check digits and rejects
/// sequences of a single repeated digit.
pub fn validate_cpf_cnpj(value: &str, mode: TaxIdMode) -> bool {
    if value.is_empty() {
        return true;
    }
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LEN && digits.len() != CNPJ_LEN {
        return false;
    }
    match mode {
        TaxIdMode::Lenient => true,
        TaxIdMode::Strict => {
            if digits.iter().all(|&digit| digit == digits[0]) {
                return false;
            }
            if digits.len() == CPF_LEN {
                cpf_check_digits_match(&digits)
            } else {
                cnpj_check_digits_match(&digits)
            }
        }
    }
}

fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}

fn cpf_check_digits_match(digits: &[u32]) -> bool {
    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(digit, weight)| digit * weight).sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}

fn cnpj_check_digits_match(digits: &[u32]) -> bool {
    cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS) == digits[13]
}

/// UF code; compared upper-cased.
pub fn validate_estado(value: &str) -> bool {
    value.is_empty() || UFS.contains(&value.to_uppercase().as_str())
}

pub fn validate_porte(value: &str) -> bool {
    value.is_empty() || PORTES_EMPRESA.contains(&value)
}

/// Client-sheet contract-type label (case-sensitive).
pub fn validate_tipo_contrato(value: &str) -> bool {
    value.is_empty() || VALID_TIPOS_CONTRATO.contains(&value)
}

/// Contract-import type tag (case-sensitive).
pub fn validate_contract_tag(value: &str) -> bool {
    value.is_empty() || value.parse::<ContractTypeTag>().is_ok()
}

/// Integer score between 1 and 10.
pub fn validate_nota_potencial(value: &str) -> bool {
    value.is_empty() || value.parse::<i64>().is_ok_and(|score| (1..=10).contains(&score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_always_valid() {
        assert!(validate_email(""));
        assert!(validate_date(""));
        assert!(validate_boolean(""));
        assert!(validate_phone(""));
        assert!(validate_cpf_cnpj("", TaxIdMode::Strict));
        assert!(validate_estado(""));
        assert!(validate_porte(""));
        assert!(validate_tipo_contrato(""));
        assert!(validate_contract_tag(""));
        assert!(validate_nota_potencial(""));
    }

    #[test]
    fn email() {
        assert!(validate_email("a@b.c"));
        assert!(validate_email("maria.silva@empresa.com.br"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a @b.c"));
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn date_must_exist_on_the_calendar() {
        assert!(validate_date("2024-02-29"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("2024-02-30"));
        assert!(!validate_date("2024-2-3"));
        assert!(!validate_date("03/02/2024"));
    }

    #[test]
    fn boolean_ignores_case() {
        assert!(validate_boolean("TRUE"));
        assert!(validate_boolean("False"));
        assert!(!validate_boolean("sim"));
        assert!(!validate_boolean("1"));
    }

    #[test]
    fn phone_formats() {
        assert!(validate_phone("(11) 91234-5678"));
        assert!(validate_phone("(11)912345678"));
        assert!(validate_phone("(21) 3456-7890"));
        assert!(!validate_phone("11 91234-5678"));
        assert!(!validate_phone("(11) 91234-5678 ramal 2"));
        assert!(!validate_phone("Tel: (11) 91234-5678"));
    }

    #[test]
    fn cpf_strict() {
        assert!(validate_cpf_cnpj("111.444.777-35", TaxIdMode::Strict));
        assert!(validate_cpf_cnpj("11144477735", TaxIdMode::Strict));
        assert!(!validate_cpf_cnpj("111.444.777-36", TaxIdMode::Strict));
        assert!(!validate_cpf_cnpj("111.111.111-11", TaxIdMode::Strict));
        assert!(!validate_cpf_cnpj("123", TaxIdMode::Strict));
    }

    #[test]
    fn cnpj_strict() {
        assert!(validate_cpf_cnpj("11.222.333/0001-81", TaxIdMode::Strict));
        assert!(!validate_cpf_cnpj("11.222.333/0001-82", TaxIdMode::Strict));
        assert!(!validate_cpf_cnpj("00.000.000/0000-00", TaxIdMode::Strict));
    }

    #[test]
    fn lenient_only_checks_length() {
        assert!(validate_cpf_cnpj("111.111.111-11", TaxIdMode::Lenient));
        assert!(validate_cpf_cnpj("12345678901234", TaxIdMode::Lenient));
        assert!(!validate_cpf_cnpj("123456789012", TaxIdMode::Lenient));
        assert!(!validate_cpf_cnpj("123", TaxIdMode::Lenient));
    }

    #[test]
    fn estado_is_upper_cased_first() {
        assert!(validate_estado("sp"));
        assert!(validate_estado("RJ"));
        assert!(!validate_estado("XX"));
    }

    #[test]
    fn enumerations_are_case_sensitive() {
        assert!(validate_porte("Média"));
        assert!(!validate_porte("media"));
        assert!(validate_tipo_contrato("Por Hora"));
        assert!(!validate_tipo_contrato("por hora"));
        assert!(validate_contract_tag("hora"));
        assert!(!validate_contract_tag("Por Hora"));
        assert!(!validate_contract_tag("Hora"));
    }

    #[test]
    fn nota_potencial_range() {
        assert!(validate_nota_potencial("1"));
        assert!(validate_nota_potencial("10"));
        assert!(!validate_nota_potencial("0"));
        assert!(!validate_nota_potencial("11"));
        assert!(!validate_nota_potencial("7.5"));
        assert!(!validate_nota_potencial("alta"));
    }
}
