//! Input rules for customer and user records.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DIGITS: Lazy<Regex> = Lazy::new(|| compile(r"^\d+$"));
// Egyptian mobile numbers: 010, 011, 012, 015 prefixes.
static PHONE: Lazy<Regex> = Lazy::new(|| compile(r"^01[0125]\d{8}$"));
static EMAIL: Lazy<Regex> = Lazy::new(|| compile(r"^[\w\.-]+@[\w\.-]+\.\w+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static validation pattern")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationRules {
    pub national_id_length: usize,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            national_id_length: 14,
            password_min_length: 6,
            password_max_length: 100,
        }
    }
}

impl ValidationRules {
    pub fn is_valid_national_id(&self, value: &str) -> bool {
        value.chars().count() == self.national_id_length && DIGITS.is_match(value)
    }

    pub fn is_valid_phone(&self, value: &str) -> bool {
        PHONE.is_match(value)
    }

    pub fn is_valid_email(&self, value: &str) -> bool {
        EMAIL.is_match(value)
    }

    /// Length is counted in characters, not bytes.
    pub fn is_valid_password(&self, value: &str) -> bool {
        let len = value.chars().count();
        (self.password_min_length..=self.password_max_length).contains(&len)
    }
}
