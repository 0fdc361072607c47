use std::fmt::Display;

/// Identifies one of the contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Fields in form order.
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress contents of the contact form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_visits_every_field() {
        let mut field = ContactField::Name;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(field);
            field = field.next();
        }
        assert_eq!(seen, ContactField::ALL.to_vec());
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }

    #[test]
    fn test_set_and_clear() {
        let mut draft = ContactDraft::default();
        assert!(draft.is_empty());

        draft.set(ContactField::Email, "a@b.com");
        draft.field_mut(ContactField::Message).push_str("hello");
        assert_eq!(draft.get(ContactField::Email), "a@b.com");
        assert_eq!(draft.get(ContactField::Message), "hello");
        assert!(!draft.is_empty());

        draft.clear();
        assert_eq!(draft, ContactDraft::default());
    }
}
