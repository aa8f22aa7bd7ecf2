//! Back-office accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::resource::{flag_cell, Draft, Resource};
use super::validation::{blank_to_none, require, require_email, ValidationError};

choice_enum! {
    UserRole as "role" {
        Admin => "admin",
        Editor => "editor",
        Viewer => "viewer",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
    /// Only sent when set; an update without it keeps the current password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Draft for UserInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.password);
        require("name", &mut self.name)?;
        require_email("email", &mut self.email)
    }
}

impl Resource for User {
    type Id = Uuid;
    type Input = UserInput;
    const PATH: &'static str = "users";
    const LABEL: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &["id", "name", "email", "role", "active"];

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn to_input(&self) -> UserInput {
        UserInput {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            is_active: self.is_active,
            password: None,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "role" => Some(self.role.to_string()),
            "active" => Some(flag_cell(self.is_active)),
            _ => None,
        }
    }
}
