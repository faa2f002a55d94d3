use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{
    error::ValidationError,
    record::{Draft, Record, RecordId},
};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Phone,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl Draft for UserDraft {
    type Field = UserField;

    fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Phone => &self.phone,
            UserField::Email => &self.email,
        }
    }

    fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Phone => self.phone = value,
            UserField::Email => self.email = value,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl Record for User {
    type Draft = UserDraft;

    const STORAGE_KEY: &'static str = "@users";
    const NOUN: &'static str = "User";
    const FIELDS: &'static [UserField] = &[
        UserField::FirstName,
        UserField::LastName,
        UserField::Phone,
        UserField::Email,
    ];

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn field_label(field: UserField) -> &'static str {
        match field {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Phone => "Phone",
            UserField::Email => "Email",
        }
    }

    fn field_value(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Phone => &self.phone,
            UserField::Email => &self.email,
        }
    }

    fn from_draft(id: RecordId, draft: &UserDraft) -> Result<Self, ValidationError> {
        if Self::FIELDS.iter().any(|&field| draft.get(field).is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&draft.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(User {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str, phone: &str, email: &str) -> UserDraft {
        UserDraft {
            first_name: first.into(),
            last_name: last.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    #[test]
    fn accepts_complete_draft() {
        let user = User::from_draft(RecordId::from("1"), &draft("A", "B", "1", "a@b.com")).unwrap();
        assert_eq!(user.first_name, "A");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id.as_str(), "1");
    }

    #[test]
    fn rejects_any_empty_field() {
        for d in [
            draft("", "B", "1", "a@b.com"),
            draft("A", "", "1", "a@b.com"),
            draft("A", "B", "", "a@b.com"),
            draft("A", "B", "1", ""),
        ] {
            assert_eq!(
                User::from_draft(RecordId::generate(), &d),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("ab.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("@b.com"));
        assert_eq!(
            User::from_draft(RecordId::generate(), &draft("A", "B", "1", "nope")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let user = User::from_draft(RecordId::from("42"), &draft("A", "B", "1", "a@b.com")).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "firstName": "A",
                "lastName": "B",
                "phone": "1",
                "email": "a@b.com",
            })
        );
    }

    #[test]
    fn draft_round_trips_record_values() {
        let user = User::from_draft(RecordId::from("7"), &draft("A", "B", "1", "a@b.com")).unwrap();
        assert_eq!(user.to_draft(), draft("A", "B", "1", "a@b.com"));
    }
}
