use crate::model::Resource;

/// Result of a screen action, after notifications have been emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The write (if any) succeeded and rows were refetched.
    Done,
    /// An error notification was shown; rows and dialog are unchanged.
    Failed,
    /// Nothing to do: boundary move, unknown row, closed dialog.
    NoOp,
    /// Another reorder on this list is in flight.
    Busy,
    /// The session was rejected and a login redirect was requested.
    LoginRequired,
}

#[derive(Debug, Clone)]
pub enum DialogState<E: Resource> {
    Closed,
    Creating { draft: E::Input },
    Editing { id: E::Id, draft: E::Input },
}

impl<E: Resource> DialogState<E> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn draft(&self) -> Option<&E::Input> {
        match self {
            Self::Closed => None,
            Self::Creating { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Case-insensitive substring filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub column: String,
    pub text: String,
}

impl Search {
    pub(crate) fn matches<E: Resource>(&self, row: &E) -> bool {
        let needle = self.text.to_lowercase();
        row.cell(&self.column)
            .is_some_and(|cell| cell.to_lowercase().contains(&needle))
    }
}

pub(crate) struct ScreenState<E: Resource> {
    pub(crate) rows: Vec<E>,
    pub(crate) loading: bool,
    pub(crate) saving: bool,
    pub(crate) dialog: DialogState<E>,
    pub(crate) pending_delete: Option<E::Id>,
    pub(crate) search: Option<Search>,
}

impl<E: Resource> Default for ScreenState<E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            saving: false,
            dialog: DialogState::Closed,
            pending_delete: None,
            search: None,
        }
    }
}
