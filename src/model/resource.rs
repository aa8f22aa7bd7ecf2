//! Traits every back-office entity implements.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use super::validation::ValidationError;

/// An entity exposed under `/api/admin/<PATH>`.
///
/// `COLUMNS` and [`Resource::cell`] drive both the table rendering and the
/// search-by-column filter of the list screens.
pub trait Resource: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Stable identifier, integer or UUID depending on the entity.
    type Id: Clone
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + FromStr
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;
    /// Body sent on create and update.
    type Input: Draft;

    const PATH: &'static str;
    /// Human label used in notifications ("FAQ", "order").
    const LABEL: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &Self::Id;

    /// Pre-fill an edit dialog from an existing row.
    ///
    /// `display_order` stays unset so a saved edit never overwrites a move
    /// made while the dialog was open.
    fn to_input(&self) -> Self::Input;

    fn cell(&self, column: &str) -> Option<String>;

    fn row(&self) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|column| self.cell(column).unwrap_or_default())
            .collect()
    }
}

/// Form data built once at submit time.
pub trait Draft: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Normalize (trim, derive) and validate required fields.
    fn finalize(&mut self) -> Result<(), ValidationError>;

    /// Fill an absent display order with `next`. No-op for unordered entities.
    fn default_display_order(&mut self, _next: u32) {}
}

/// Entities with a status field patched through `/{id}/status`.
pub trait HasStatus: Resource {
    type Status: Copy
        + Eq
        + fmt::Debug
        + fmt::Display
        + FromStr<Err = ValidationError>
        + Serialize
        + Send
        + Sync
        + 'static;

    fn status(&self) -> Self::Status;
}

/// Entities with a featured flag patched through `/{id}/featured`.
pub trait Featurable: Resource {
    fn is_featured(&self) -> bool;
}

/// Render an optional value for a table cell.
#[must_use]
pub fn opt_cell<T: fmt::Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Render a flag for a table cell.
#[must_use]
pub fn flag_cell(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}
