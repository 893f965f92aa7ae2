use std::collections::BTreeMap;

use regex::Regex;

use crate::models::FormData;

pub type FieldErrors = BTreeMap<&'static str, String>;

pub trait FormValidator {
    fn validate(&self, form: &FormData) -> FieldErrors;
}

pub struct DefaultRules {
    email: Regex,
    phone: Regex,
}

impl DefaultRules {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"),
            phone: Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,4}[-\s.]?[0-9]{1,9}$")
                .expect("static phone pattern"),
        }
    }
}

impl Default for DefaultRules {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator for DefaultRules {
    fn validate(&self, form: &FormData) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let name = form.name.trim();
        if name.is_empty() {
            errors.insert("name", "Full name is required".to_string());
        } else if name.chars().count() < 2 {
            errors.insert("name", "Name must be at least 2 characters".to_string());
        }

        let email = form.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email address is required".to_string());
        } else if !self.email.is_match(email) {
            errors.insert("email", "Please enter a valid email address".to_string());
        }

        let phone = form.phone.trim();
        if phone.is_empty() {
            errors.insert("phone", "Phone number is required".to_string());
        } else if !self.phone.is_match(phone) {
            errors.insert("phone", "Please enter a valid phone number".to_string());
        }

        errors
    }
}

pub struct NoValidation;

impl FormValidator for NoValidation {
    fn validate(&self, _form: &FormData) -> FieldErrors {
        FieldErrors::new()
    }
}
