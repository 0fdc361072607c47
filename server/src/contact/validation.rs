use super::draft::{ContactDraft, ContactField};
use crate::validation::Validator;
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize, actual: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize, actual: usize },
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            FieldError::NameTooShort { .. } => ContactField::Name,
            FieldError::InvalidEmail => ContactField::Email,
            FieldError::MessageTooShort { .. } => ContactField::Message,
        }
    }
}

/// Field name to error mapping produced by the schema.
///
/// Iteration follows form order (name, email, message).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ContactField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn remove(&mut self, field: ContactField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Minimum length check counted in characters of the raw input.
///
/// Surrounding whitespace counts; only the email shape check trims.
#[derive(Debug, Clone, Copy)]
pub struct MinChars(pub usize);

impl Validator<str> for MinChars {
    /// The actual character count.
    type Error = usize;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let count = input.chars().count();
        if count < self.0 { Err(count) } else { Ok(()) }
    }
}

/// Structural email check: one `@`, a sane local part and a dotted domain
/// whose last label is at least two letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAddress;

impl EmailAddress {
    fn valid_local(local: &str) -> bool {
        !local.is_empty()
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "._%+-'".contains(c))
    }

    fn valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 {
            return false;
        }

        let labels_ok = labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

        let tld_ok = labels
            .last()
            .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

        labels_ok && tld_ok
    }
}

impl Validator<str> for EmailAddress {
    type Error = ();

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let trimmed = input.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(());
        };
        if domain.contains('@') || !Self::valid_local(local) || !Self::valid_domain(domain) {
            return Err(());
        }
        Ok(())
    }
}

/// The contact form schema. Every failing field is reported, not just the first.
#[derive(Debug, Clone, Copy)]
pub struct ContactSchema {
    name: MinChars,
    email: EmailAddress,
    message: MinChars,
}

impl Default for ContactSchema {
    fn default() -> Self {
        Self {
            name: MinChars(MIN_NAME_CHARS),
            email: EmailAddress,
            message: MinChars(MIN_MESSAGE_CHARS),
        }
    }
}

impl ContactSchema {
    /// Validate one field in isolation.
    pub fn validate_field(&self, draft: &ContactDraft, field: ContactField) -> Option<FieldError> {
        let value = draft.get(field);
        match field {
            ContactField::Name => self.name.validate(value).err().map(|actual| {
                FieldError::NameTooShort {
                    min: self.name.0,
                    actual,
                }
            }),
            ContactField::Email => self
                .email
                .validate(value)
                .err()
                .map(|()| FieldError::InvalidEmail),
            ContactField::Message => self.message.validate(value).err().map(|actual| {
                FieldError::MessageTooShort {
                    min: self.message.0,
                    actual,
                }
            }),
        }
    }
}

impl Validator<ContactDraft> for ContactSchema {
    type Error = ValidationErrors;

    fn validate(&self, draft: &ContactDraft) -> Result<(), Self::Error> {
        let mut errors = ValidationErrors::new();
        for field in ContactField::ALL {
            if let Some(error) = self.validate_field(draft, field) {
                errors.insert(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_draft_is_valid() {
        let draft = ContactDraft::new("Al", "a@b.com", "1234567890");
        assert!(ContactSchema::default().validate(&draft).is_ok());
    }

    #[test]
    fn test_short_name_and_message_report_two_errors() {
        let draft = ContactDraft::new("A", "a@b.com", "short");
        let errors = ContactSchema::default().validate(&draft).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Name, ContactField::Message]
        );
        assert_eq!(
            errors.message(ContactField::Name).as_deref(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(ContactField::Message),
            Some(&FieldError::MessageTooShort { min: 10, actual: 5 })
        );
    }

    #[test]
    fn test_email_shapes() {
        let email = EmailAddress;
        for ok in ["a@b.com", "first.last+tag@sub.example.org", "x_y@host-name.io"] {
            assert!(email.is_valid(ok), "{ok} should be valid");
        }
        for bad in [
            "",
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@@b.com",
            "a@b.c",
            "a..b@c.com",
            ".a@b.com",
            "a@-b.com",
            "a b@c.com",
            "a@b.c0m",
        ] {
            assert!(!email.is_valid(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        assert!(MinChars(2).is_valid("Zé"));
        assert_eq!(MinChars(10).validate("   hi   "), Err(8));
    }

    #[test]
    fn test_surrounding_spaces_count_towards_length() {
        let draft = ContactDraft::new(" A", "a@b.com", "         x");
        assert!(ContactSchema::default().validate(&draft).is_ok());

        let draft = ContactDraft::new(" ", " a@b.com ", "        x");
        let errors = ContactSchema::default().validate(&draft).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![ContactField::Name, ContactField::Message]
        );
    }

    #[test]
    fn test_validate_field_isolated() {
        let draft = ContactDraft::new("Al", "nope", "");
        let schema = ContactSchema::default();
        assert_eq!(schema.validate_field(&draft, ContactField::Name), None);
        assert_eq!(
            schema.validate_field(&draft, ContactField::Email),
            Some(FieldError::InvalidEmail)
        );
    }
}
