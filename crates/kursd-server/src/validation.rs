//! Contact form payload and validation rules.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Known project type keys and their human-readable labels.
pub const PROJECT_TYPES: [(&str, &str); 5] = [
    ("bot", "Telegram-бот"),
    ("website", "Веб-сайт"),
    ("pwa", "PWA приложение"),
    ("automation", "Автоматизация"),
    ("other", "Другое"),
];

/// Contact form payload, as submitted by the site frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Reply email address.
    pub email: String,
    /// Phone number, free-form.
    #[serde(default)]
    pub phone: Option<String>,
    /// Project type key, one of [`PROJECT_TYPES`].
    #[serde(default)]
    pub project_type: Option<String>,
    /// Budget range, free-form.
    #[serde(default)]
    pub budget: Option<String>,
    /// Message text.
    pub message: String,
}

/// A single contact form violation.
///
/// Display strings are user-facing and returned verbatim in the `details`
/// array of a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is shorter than 2 characters.
    #[error("Имя должно содержать минимум 2 символа")]
    NameTooShort,
    /// Name is longer than 50 characters.
    #[error("Имя не должно превышать 50 символов")]
    NameTooLong,
    /// Email address does not look deliverable.
    #[error("Некорректный email адрес")]
    InvalidEmail,
    /// Phone number does not match the accepted formats.
    #[error("Некорректный номер телефона")]
    InvalidPhone,
    /// Project type key is not one of [`PROJECT_TYPES`].
    #[error("Неизвестный тип проекта: {0}")]
    UnknownProjectType(String),
    /// Message is shorter than 10 characters.
    #[error("Сообщение должно содержать минимум 10 символов")]
    MessageTooShort,
    /// Message is longer than 1000 characters.
    #[error("Сообщение не должно превышать 1000 символов")]
    MessageTooLong,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$")
            .expect("Invalid phone pattern")
    })
}

/// Returns the label for a project type key, if known.
#[must_use]
pub fn project_type_label(key: &str) -> Option<&'static str> {
    PROJECT_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, label)| *label)
}

/// Validates a contact form, collecting every violation.
///
/// Name and message lengths are measured in characters, not bytes. Phone,
/// project type and budget are optional; an empty phone string passes.
///
/// # Errors
///
/// Returns the full list of violations when any field is invalid.
pub fn validate_contact(form: &ContactForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name_len = form.name.chars().count();
    if name_len < 2 {
        errors.push(ValidationError::NameTooShort);
    } else if name_len > 50 {
        errors.push(ValidationError::NameTooLong);
    }

    if !email_pattern().is_match(&form.email) {
        errors.push(ValidationError::InvalidEmail);
    }

    if let Some(phone) = form.phone.as_deref()
        && !phone.is_empty()
        && !phone_pattern().is_match(phone)
    {
        errors.push(ValidationError::InvalidPhone);
    }

    if let Some(project_type) = form.project_type.as_deref()
        && project_type_label(project_type).is_none()
    {
        errors.push(ValidationError::UnknownProjectType(project_type.to_string()));
    }

    let message_len = form.message.chars().count();
    if message_len < 10 {
        errors.push(ValidationError::MessageTooShort);
    } else if message_len > 1000 {
        errors.push(ValidationError::MessageTooLong);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
