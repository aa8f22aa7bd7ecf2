//! Contact page content and the inbound message inbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{flag_cell, opt_cell, Draft, HasStatus, Resource};
use super::validation::{blank_to_none, require, require_email, ValidationError};
use crate::reorder::{Orderable, ReorderStrategy};

choice_enum! {
    /// What a contact info line describes.
    ContactInfoKind as "info_type" {
        Phone => "phone",
        Email => "email",
        Address => "address",
        Hours => "hours",
        Social => "social",
    }
}

choice_enum! {
    MessageStatus as "status" {
        New => "new",
        Read => "read",
        Replied => "replied",
        Archived => "archived",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: i64,
    pub info_type: ContactInfoKind,
    #[serde(default)]
    pub label: Option<String>,
    pub value: String,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfoInput {
    pub info_type: ContactInfoKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

impl Draft for ContactInfoInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.label);
        require("value", &mut self.value)
    }

    fn default_display_order(&mut self, next: u32) {
        self.display_order.get_or_insert(next);
    }
}

impl Resource for ContactInfo {
    type Id = i64;
    type Input = ContactInfoInput;
    const PATH: &'static str = "contact-info";
    const LABEL: &'static str = "contact info";
    const COLUMNS: &'static [&'static str] = &["id", "display_order", "info_type", "label", "value"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ContactInfoInput {
        ContactInfoInput {
            info_type: self.info_type,
            label: self.label.clone(),
            value: self.value.clone(),
            display_order: None,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "display_order" => Some(self.display_order.to_string()),
            "info_type" => Some(self.info_type.to_string()),
            "label" => Some(opt_cell(self.label.as_ref())),
            "value" => Some(self.value.clone()),
            _ => None,
        }
    }
}

impl Orderable for ContactInfo {
    const STRATEGY: ReorderStrategy = ReorderStrategy::PairwiseSwap;

    fn display_order(&self) -> u32 {
        self.display_order
    }
}

/// An entry of the contact form's subject picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubject {
    pub id: i64,
    pub label: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubjectInput {
    pub label: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

fn default_active() -> bool {
    true
}

impl Draft for ContactSubjectInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        require("label", &mut self.label)
    }

    fn default_display_order(&mut self, next: u32) {
        self.display_order.get_or_insert(next);
    }
}

impl Resource for ContactSubject {
    type Id = i64;
    type Input = ContactSubjectInput;
    const PATH: &'static str = "contact-subjects";
    const LABEL: &'static str = "contact subject";
    const COLUMNS: &'static [&'static str] = &["id", "display_order", "label", "active"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ContactSubjectInput {
        ContactSubjectInput {
            label: self.label.clone(),
            is_active: self.is_active,
            display_order: None,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "display_order" => Some(self.display_order.to_string()),
            "label" => Some(self.label.clone()),
            "active" => Some(flag_cell(self.is_active)),
            _ => None,
        }
    }
}

impl Orderable for ContactSubject {
    const STRATEGY: ReorderStrategy = ReorderStrategy::PairwiseSwap;

    fn display_order(&self) -> u32 {
        self.display_order
    }
}

/// A message left through the public contact form (a "discussion").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    pub status: MessageStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessageInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub status: MessageStatus,
}

impl Draft for ContactMessageInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.phone);
        blank_to_none(&mut self.subject);
        require("name", &mut self.name)?;
        require_email("email", &mut self.email)?;
        require("message", &mut self.message)
    }
}

impl Resource for ContactMessage {
    type Id = i64;
    type Input = ContactMessageInput;
    const PATH: &'static str = "contact-messages";
    const LABEL: &'static str = "message";
    const COLUMNS: &'static [&'static str] = &["id", "name", "email", "subject", "status", "created_at"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ContactMessageInput {
        ContactMessageInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            status: self.status,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "subject" => Some(opt_cell(self.subject.as_ref())),
            "status" => Some(self.status.to_string()),
            "created_at" => Some(
                self.created_at
                    .map_or_else(String::new, |at| at.format("%Y-%m-%d %H:%M").to_string()),
            ),
            _ => None,
        }
    }
}

impl HasStatus for ContactMessage {
    type Status = MessageStatus;

    fn status(&self) -> MessageStatus {
        self.status
    }
}
