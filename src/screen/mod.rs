//! Headless list screens.
//!
//! A [`ListScreen`] owns what one back-office page shows: the fetched rows,
//! the create/edit dialog, the delete confirmation and the column search.
//! Every successful write is followed by a full refetch; local rows are
//! only ever replaced by what the backend returned.

mod list;
mod patches;
mod state;

pub use list::ListScreen;
pub use state::{ActionOutcome, DialogState, Search};

/// "contact info" -> "Contact info"
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
