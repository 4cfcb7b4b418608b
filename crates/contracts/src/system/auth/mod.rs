//! Login and registration form rules.
//!
//! There is no authentication protocol on the client: a valid form signs the
//! visitor into a local session that lives until the page is reloaded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// The signed-in visitor as shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub display_name: String,
    pub email: String,
}

impl SessionUser {
    /// Two-letter avatar fallback.
    pub fn initials(&self) -> String {
        let source = if self.display_name.trim().is_empty() {
            &self.email
        } else {
            &self.display_name
        };
        source
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        }
        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        }
        errors
    }

    /// Session for a valid form; the display name is the local part of the email.
    pub fn session_user(&self) -> Option<SessionUser> {
        if !self.validate().is_empty() {
            return None;
        }
        let email = self.email.trim().to_string();
        let display_name = email.split('@').next().unwrap_or_default().to_string();
        Some(SessionUser {
            display_name,
            email,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(FormField::Email, "Email is required");
        }
        if self.password.is_empty() {
            errors.insert(FormField::Password, "Password is required");
        }
        if self.password != self.confirm_password {
            errors.insert(FormField::ConfirmPassword, "Passwords do not match");
        }
        errors
    }

    pub fn session_user(&self) -> Option<SessionUser> {
        if !self.validate().is_empty() {
            return None;
        }
        Some(SessionUser {
            display_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}
