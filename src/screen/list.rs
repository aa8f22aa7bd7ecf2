use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::capitalize;
use super::state::{ActionOutcome, DialogState, ScreenState, Search};
use crate::api::{ApiClient, ApiError};
use crate::model::{Draft, Resource};
use crate::notify::{Notification, Notifier};
use crate::reorder::{ReorderGate, SwapPersistence};
use crate::services::ResourceService;

/// Controller for one entity's list page.
pub struct ListScreen<E: Resource> {
    pub(super) service: ResourceService<E>,
    pub(super) notifier: Arc<dyn Notifier>,
    pub(super) gate: Arc<ReorderGate>,
    pub(super) persistence: SwapPersistence,
    pub(super) state: Mutex<ScreenState<E>>,
}

impl<E: Resource> ListScreen<E> {
    #[must_use]
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service: ResourceService::new(client),
            notifier,
            gate: Arc::new(ReorderGate::default()),
            persistence: SwapPersistence::default(),
            state: Mutex::new(ScreenState::default()),
        }
    }

    /// Share a reorder gate between screens and pick the swap wire shape.
    #[must_use]
    pub fn with_reorder(mut self, gate: Arc<ReorderGate>, persistence: SwapPersistence) -> Self {
        self.gate = gate;
        self.persistence = persistence;
        self
    }

    #[must_use]
    pub fn service(&self) -> &ResourceService<E> {
        &self.service
    }

    pub async fn rows(&self) -> Vec<E> {
        self.state.lock().await.rows.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    pub async fn is_saving(&self) -> bool {
        self.state.lock().await.saving
    }

    pub async fn dialog(&self) -> DialogState<E> {
        self.state.lock().await.dialog.clone()
    }

    pub async fn pending_delete(&self) -> Option<E::Id> {
        self.state.lock().await.pending_delete.clone()
    }

    /// Fetch the list and replace the rows wholesale.
    pub async fn refresh(&self) -> ActionOutcome {
        match self.reload().await {
            Ok(()) => ActionOutcome::Done,
            Err(e) => self.fail(&format!("load {} list", E::LABEL), &e),
        }
    }

    pub async fn open_create(&self, draft: E::Input) {
        self.state.lock().await.dialog = DialogState::Creating { draft };
    }

    /// Open the edit dialog pre-filled from the row. `false` if the row is
    /// not on screen.
    pub async fn open_edit(&self, id: &E::Id) -> bool {
        let mut state = self.state.lock().await;
        let Some(row) = state.rows.iter().find(|row| row.id() == id) else {
            return false;
        };
        let draft = row.to_input();
        state.dialog = DialogState::Editing {
            id: id.clone(),
            draft,
        };
        true
    }

    /// Change fields of the open dialog's draft.
    pub async fn edit_draft(&self, edit: impl FnOnce(&mut E::Input) + Send) -> bool {
        let mut state = self.state.lock().await;
        match &mut state.dialog {
            DialogState::Closed => false,
            DialogState::Creating { draft } | DialogState::Editing { draft, .. } => {
                edit(draft);
                true
            }
        }
    }

    pub async fn close_dialog(&self) {
        self.state.lock().await.dialog = DialogState::Closed;
    }

    /// Validate and send the open dialog.
    ///
    /// On success the dialog closes and the list is refetched. On failure
    /// the dialog stays open with the draft as the user left it.
    pub async fn submit(&self) -> ActionOutcome {
        let (dialog, next_order) = {
            let mut state = self.state.lock().await;
            if !state.dialog.is_open() || state.saving {
                return ActionOutcome::NoOp;
            }
            state.saving = true;
            let next_order = u32::try_from(state.rows.len())
                .unwrap_or(u32::MAX)
                .saturating_add(1);
            (state.dialog.clone(), next_order)
        };

        let outcome = match dialog {
            DialogState::Closed => ActionOutcome::NoOp,
            DialogState::Creating { mut draft } => {
                let action = format!("create {}", E::LABEL);
                draft.default_display_order(next_order);
                match draft.finalize() {
                    Err(e) => self.reject(&action, &e.to_string()),
                    Ok(()) => match self.service.create(&draft).await {
                        Ok(()) => self.after_write(format!("{} created", capitalize(E::LABEL)), true).await,
                        Err(e) => self.fail(&action, &e),
                    },
                }
            }
            DialogState::Editing { id, mut draft } => {
                let action = format!("update {}", E::LABEL);
                match draft.finalize() {
                    Err(e) => self.reject(&action, &e.to_string()),
                    Ok(()) => match self.service.update(&id, &draft).await {
                        Ok(()) => self.after_write(format!("{} updated", capitalize(E::LABEL)), true).await,
                        Err(e) => self.fail(&action, &e),
                    },
                }
            }
        };
        self.state.lock().await.saving = false;
        outcome
    }

    /// Ask for confirmation before deleting. `false` if the row is not on
    /// screen.
    pub async fn request_delete(&self, id: &E::Id) -> bool {
        let mut state = self.state.lock().await;
        if !state.rows.iter().any(|row| row.id() == id) {
            return false;
        }
        state.pending_delete = Some(id.clone());
        true
    }

    pub async fn cancel_delete(&self) {
        self.state.lock().await.pending_delete = None;
    }

    /// Delete the row awaiting confirmation. Orders of the remaining rows
    /// are left as the backend has them.
    pub async fn confirm_delete(&self) -> ActionOutcome {
        let Some(id) = self.state.lock().await.pending_delete.take() else {
            return ActionOutcome::NoOp;
        };
        match self.service.delete(&id).await {
            Ok(()) => {
                self.after_write(format!("{} deleted", capitalize(E::LABEL)), false)
                    .await
            }
            Err(e) => self.fail(&format!("delete {}", E::LABEL), &e),
        }
    }

    /// Filter [`ListScreen::visible_rows`] by `column`. `false` if the
    /// entity has no such column.
    pub async fn set_search(&self, column: &str, text: &str) -> bool {
        if !E::COLUMNS.contains(&column) {
            return false;
        }
        let text = text.trim();
        self.state.lock().await.search = if text.is_empty() {
            None
        } else {
            Some(Search {
                column: column.to_string(),
                text: text.to_string(),
            })
        };
        true
    }

    pub async fn clear_search(&self) {
        self.state.lock().await.search = None;
    }

    pub async fn search(&self) -> Option<Search> {
        self.state.lock().await.search.clone()
    }

    pub async fn visible_rows(&self) -> Vec<E> {
        let state = self.state.lock().await;
        match &state.search {
            Some(search) => state
                .rows
                .iter()
                .filter(|row| search.matches(*row))
                .cloned()
                .collect(),
            None => state.rows.clone(),
        }
    }

    pub(super) async fn reload(&self) -> Result<(), ApiError> {
        self.state.lock().await.loading = true;
        let result = self.service.list().await;
        let mut state = self.state.lock().await;
        state.loading = false;
        let rows = result?;
        debug!(entity = E::PATH, count = rows.len(), "Rows replaced");
        state.rows = rows;
        Ok(())
    }

    /// Success path shared by every write: notify, optionally close the
    /// dialog, refetch.
    pub(super) async fn after_write(&self, message: String, close_dialog: bool) -> ActionOutcome {
        if close_dialog {
            self.state.lock().await.dialog = DialogState::Closed;
        }
        self.notifier.notify(Notification::success(message));
        match self.reload().await {
            Ok(()) => ActionOutcome::Done,
            Err(e) => {
                warn!(entity = E::PATH, "Refetch after write failed: {}", e);
                match self.fail(&format!("reload {} list", E::LABEL), &e) {
                    ActionOutcome::LoginRequired => ActionOutcome::LoginRequired,
                    _ => ActionOutcome::Done,
                }
            }
        }
    }

    /// Turn an API failure into a notification or a login redirect.
    pub(super) fn fail(&self, action: &str, err: &ApiError) -> ActionOutcome {
        if err.is_unauthorized() {
            self.notifier.redirect_to_login();
            return ActionOutcome::LoginRequired;
        }
        self.notifier.notify(Notification::error(err.user_message(action)));
        ActionOutcome::Failed
    }

    fn reject(&self, action: &str, reason: &str) -> ActionOutcome {
        self.notifier
            .notify(Notification::error(format!("Failed to {action}: {reason}")));
        ActionOutcome::Failed
    }
}
