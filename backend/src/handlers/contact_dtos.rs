use serde::{Deserialize, Serialize};

use crate::utils::mailer::ContactMessage;

/// Body of `POST /api/contact`. Absent and `null` fields both land as `None`
/// so they get the same 400 as blank ones.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn filled(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl ContactRequest {
    /// The trimmed message, or `None` when any field is missing or blank.
    pub fn into_contact_message(self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: filled(self.name)?,
            email: filled(self.email)?,
            message: filled(self.message)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> ContactRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn null_and_absent_fields_are_missing() {
        assert!(request(r#"{"name":null,"email":"a@b.com","message":"hi"}"#)
            .into_contact_message()
            .is_none());
        assert!(request(r#"{"email":"a@b.com","message":"hi"}"#)
            .into_contact_message()
            .is_none());
        assert!(request(r#"{"name":"A","email":"a@b.com","message":"  "}"#)
            .into_contact_message()
            .is_none());
    }

    #[test]
    fn filled_fields_are_trimmed() {
        let message = request(r#"{"name":" Ada ","email":"ada@example.com ","message":"hi\n"}"#)
            .into_contact_message()
            .unwrap();
        assert_eq!(message.name, "Ada");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(message.message, "hi");
    }
}
