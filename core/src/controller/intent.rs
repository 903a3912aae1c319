use crate::error::ApiError;
use crate::types::{Book, BookId};

/// Events that move a `CollectionState`. `*Started` intents are applied when
/// an action is dispatched; `*Finished` intents when its request resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionIntent {
    LoadStarted,
    LoadFinished(Result<Vec<Book>, ApiError>),
    /// A mutation (add, save, delete) was dispatched.
    ActionStarted,
    AddFinished(Result<Book, ApiError>),
    BeginEdit(BookId),
    CancelEdit,
    UpdateFinished {
        id: BookId,
        result: Result<Book, ApiError>,
    },
    RemoveFinished {
        id: BookId,
        result: Result<(), ApiError>,
    },
}

impl CollectionIntent {
    /// Action name and error for intents that report a failed request.
    pub fn failure(&self) -> Option<(&'static str, &ApiError)> {
        match self {
            CollectionIntent::LoadFinished(Err(err)) => Some(("load", err)),
            CollectionIntent::AddFinished(Err(err)) => Some(("add", err)),
            CollectionIntent::UpdateFinished { result: Err(err), .. } => Some(("update", err)),
            CollectionIntent::RemoveFinished { result: Err(err), .. } => Some(("delete", err)),
            _ => None,
        }
    }
}
