//! Orders, reservations and flower subscriptions.
//!
//! Status values are free to move in any direction from the client's side;
//! the backend decides which transitions it accepts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::resource::{opt_cell, Draft, HasStatus, Resource};
use super::validation::{blank_to_none, require, require_email, require_non_negative, ValidationError};

choice_enum! {
    /// Fulfilment state of a shop order.
    OrderStatus as "status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Processing => "processing",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}

choice_enum! {
    ReservationStatus as "status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

choice_enum! {
    SubscriptionStatus as "status" {
        Active => "active",
        Paused => "paused",
        Cancelled => "cancelled",
        Expired => "expired",
    }
}

choice_enum! {
    /// How often a subscription bouquet is delivered.
    DeliveryFrequency as "frequency" {
        Weekly => "weekly",
        Biweekly => "biweekly",
        Monthly => "monthly",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub reference: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: OrderStatus,
}

impl Draft for OrderInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        require("customer_name", &mut self.customer_name)?;
        require_email("customer_email", &mut self.customer_email)?;
        require_non_negative("total", self.total)
    }
}

impl Resource for Order {
    type Id = i64;
    type Input = OrderInput;
    const PATH: &'static str = "orders";
    const LABEL: &'static str = "order";
    const COLUMNS: &'static [&'static str] =
        &["id", "reference", "customer_name", "customer_email", "total", "status", "created_at"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> OrderInput {
        OrderInput {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            total: self.total,
            status: self.status,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "reference" => Some(opt_cell(self.reference.as_ref())),
            "customer_name" => Some(self.customer_name.clone()),
            "customer_email" => Some(self.customer_email.clone()),
            "total" => Some(format!("{:.2}", self.total)),
            "status" => Some(self.status.to_string()),
            "created_at" => Some(self.created_at.map_or_else(String::new, |at| at.format("%Y-%m-%d %H:%M").to_string())),
            _ => None,
        }
    }
}

impl HasStatus for Order {
    type Status = OrderStatus;

    fn status(&self) -> OrderStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationInput {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: ReservationStatus,
}

impl Draft for ReservationInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        blank_to_none(&mut self.phone);
        blank_to_none(&mut self.time);
        blank_to_none(&mut self.notes);
        require("customer_name", &mut self.customer_name)?;
        require_email("customer_email", &mut self.customer_email)
    }
}

impl Resource for Reservation {
    type Id = i64;
    type Input = ReservationInput;
    const PATH: &'static str = "reservations";
    const LABEL: &'static str = "reservation";
    const COLUMNS: &'static [&'static str] =
        &["id", "customer_name", "customer_email", "date", "time", "service_id", "status"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> ReservationInput {
        ReservationInput {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            phone: self.phone.clone(),
            service_id: self.service_id,
            date: self.date,
            time: self.time.clone(),
            notes: self.notes.clone(),
            status: self.status,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "customer_name" => Some(self.customer_name.clone()),
            "customer_email" => Some(self.customer_email.clone()),
            "date" => Some(self.date.to_string()),
            "time" => Some(opt_cell(self.time.as_ref())),
            "service_id" => Some(opt_cell(self.service_id.as_ref())),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl HasStatus for Reservation {
    type Status = ReservationStatus;

    fn status(&self) -> ReservationStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub plan: String,
    pub frequency: DeliveryFrequency,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub status: SubscriptionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInput {
    pub customer_name: String,
    pub customer_email: String,
    pub plan: String,
    pub frequency: DeliveryFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub status: SubscriptionStatus,
}

impl Draft for SubscriptionInput {
    fn finalize(&mut self) -> Result<(), ValidationError> {
        require("customer_name", &mut self.customer_name)?;
        require_email("customer_email", &mut self.customer_email)?;
        require("plan", &mut self.plan)
    }
}

impl Resource for Subscription {
    type Id = i64;
    type Input = SubscriptionInput;
    const PATH: &'static str = "subscriptions";
    const LABEL: &'static str = "subscription";
    const COLUMNS: &'static [&'static str] =
        &["id", "customer_name", "plan", "frequency", "start_date", "status"];

    fn id(&self) -> &i64 {
        &self.id
    }

    fn to_input(&self) -> SubscriptionInput {
        SubscriptionInput {
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            plan: self.plan.clone(),
            frequency: self.frequency,
            start_date: self.start_date,
            status: self.status,
        }
    }

    fn cell(&self, column: &str) -> Option<String> {
        match column {
            "id" => Some(self.id.to_string()),
            "customer_name" => Some(self.customer_name.clone()),
            "plan" => Some(self.plan.clone()),
            "frequency" => Some(self.frequency.to_string()),
            "start_date" => Some(opt_cell(self.start_date.as_ref())),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

impl HasStatus for Subscription {
    type Status = SubscriptionStatus;

    fn status(&self) -> SubscriptionStatus {
        self.status
    }
}
