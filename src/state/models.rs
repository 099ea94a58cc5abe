//! Manager and employee records
//!
//! Stored records plus the request payloads that create or update them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

/// Unique identifier for a manager
pub type ManagerId = Uuid;

/// Unique identifier for an employee
pub type EmployeeId = Uuid;

/// Minimum number of characters in a manager password
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A manager account
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    /// Unique identifier, assigned by the server
    pub id: ManagerId,
    /// Login email, compared case-insensitively
    pub email: String,
    /// Argon2 PHC string, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub full_name: String,
    /// Creation time (UTC)
    pub created_date: DateTime<Utc>,
}

impl Manager {
    /// Create a manager with a fresh id and the current timestamp
    pub fn new(email: String, password_hash: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            created_date: Utc::now(),
        }
    }

    /// Whether this manager logs in with the given email
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// An employee, linked to one manager by id
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, assigned by the server
    pub id: EmployeeId,
    /// Contact email
    pub email: String,
    /// Argon2 PHC string, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub full_name: String,
    /// Creation time (UTC)
    pub created_date: DateTime<Utc>,
    /// Owning manager
    pub manager_id: ManagerId,
}

impl Employee {
    /// Create an employee with a fresh id and the current timestamp
    pub fn new(
        email: String,
        password_hash: String,
        full_name: String,
        manager_id: ManagerId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            created_date: Utc::now(),
            manager_id,
        }
    }

    /// Overwrite every editable field from the update payload
    ///
    /// Fields missing from the payload have already defaulted to empty values
    /// and are written as such. The manager reference is not re-checked.
    pub fn apply_update(&mut self, update: EmployeeUpdate) {
        self.email = update.email;
        self.full_name = update.full_name;
        self.manager_id = update.manager_id;
    }

    /// Case-insensitive substring match on the full name
    pub fn name_contains(&self, query: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Manager registration payload
///
/// Client-supplied `id` and `createdDate` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewManager {
    /// Login email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Display name
    pub full_name: String,
}

impl NewManager {
    /// Validate the registration fields
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full Name is required.".to_string());
        }
        if !is_strong_password(&self.password) {
            return Err(format!(
                "Password must be at least {} characters long and contain at least one uppercase letter.",
                MIN_PASSWORD_LENGTH
            ));
        }
        if !is_valid_email(&self.email) {
            return Err("Invalid email format.".to_string());
        }
        Ok(())
    }
}

/// Manager login payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plaintext password
    pub password: String,
}

impl LoginRequest {
    /// Both fields must be non-blank
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err("Email and Password are required.".to_string());
        }
        Ok(())
    }
}

/// Employee creation payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    /// Contact email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Display name
    pub full_name: String,
    /// Manager the employee reports to
    pub manager_id: ManagerId,
}

impl NewEmployee {
    /// Validate the fields that do not need the store
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Employee details are required.".to_string());
        }
        Ok(())
    }
}

/// Employee update payload
///
/// Every field is written on update; omitted fields become `""` or the nil id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    /// New contact email
    pub email: String,
    /// New display name
    pub full_name: String,
    /// New manager
    pub manager_id: ManagerId,
}

/// At least [`MIN_PASSWORD_LENGTH`] characters with one uppercase letter
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH && password.chars().any(char::is_uppercase)
}

/// Mailbox-shaped email (`local@domain`)
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email.validate_email()
}
