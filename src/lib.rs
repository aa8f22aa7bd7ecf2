//! Typed client for the Chez Flora back-office API.
//!
//! [`api`] talks to the backend, [`services`] maps each entity onto its
//! endpoints and [`screen`] holds the list/dialog state a front end renders.
//! Display-order lists are reordered through [`reorder`].

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

#[macro_use]
pub mod model;
pub mod api;
pub mod logging;
pub mod notify;
pub mod reorder;
pub mod screen;
pub mod services;
pub mod session;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, HttpTransport, Transport};
pub use model::{Draft, Featurable, HasStatus, Resource, ValidationError};
pub use notify::{Notification, NotificationCenter, Notifier};
pub use reorder::{BusyPolicy, Direction, Orderable, ReorderGate, SwapPersistence};
pub use screen::{ActionOutcome, DialogState, ListScreen};
pub use services::ResourceService;
pub use session::{Session, SessionError, SessionStore};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
