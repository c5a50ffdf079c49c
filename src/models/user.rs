use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthProvider {
    PhoneNumber,
    Google,
    Apple,
}

/// Display-only label derived from `isVerified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLabel {
    Active,
    Inactive,
}

impl fmt::Display for ActivityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLabel::Active => f.write_str("Active"),
            ActivityLabel::Inactive => f.write_str("Inactive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub pancard_number: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub pin_code: String,
    #[serde(default)]
    pub marital_status: String,
    pub role: UserRole,
    pub auth_provider: AuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn activity(&self) -> ActivityLabel {
        if self.is_verified {
            ActivityLabel::Active
        } else {
            ActivityLabel::Inactive
        }
    }

    /// Up to two upper-case initials from the full name.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pancard_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
}

/// `data` of `/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub user: User,
}

/// `data` of `/admin/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberChange {
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// `data` of `/admin/login`. The token may be missing from a malformed reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLogin {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(is_verified: bool) -> User {
        serde_json::from_value(json!({
            "_id": "u1",
            "fullName": "riya mehta kapoor",
            "email": "riya@example.com",
            "phoneNumber": "9811111111",
            "isVerified": is_verified,
            "role": "user",
            "authProvider": "phone-number"
        }))
        .unwrap()
    }

    #[test]
    fn activity_follows_verification() {
        assert_eq!(user(true).activity(), ActivityLabel::Active);
        assert_eq!(user(false).activity().to_string(), "Inactive");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(user(true).initials(), "RM");
    }

    #[test]
    fn closed_enums_reject_unknown_values() {
        assert!(serde_json::from_value::<UserRole>(json!("superuser")).is_err());
        assert_eq!(
            serde_json::from_value::<AuthProvider>(json!("phone-number")).unwrap(),
            AuthProvider::PhoneNumber
        );
    }
}
