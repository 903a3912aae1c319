use super::intent::CollectionIntent;
use super::state::{CollectionState, ADD_FAILED, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED};

/// The only place collection state changes. Pure: (State, Intent) -> State.
///
/// A failed request only ever touches `error` (and `loading` for loads);
/// books and the editing target are left as they were.
pub struct CollectionReducer;

impl CollectionReducer {
    pub fn reduce(mut state: CollectionState, intent: CollectionIntent) -> CollectionState {
        match intent {
            CollectionIntent::LoadStarted => {
                state.loading = true;
                state.error = None;
            }
            CollectionIntent::LoadFinished(result) => {
                state.loading = false;
                match result {
                    Ok(books) => {
                        state.books = books;
                        state.error = None;
                    }
                    Err(_) => state.error = Some(LOAD_FAILED.to_string()),
                }
            }
            CollectionIntent::ActionStarted => state.error = None,
            CollectionIntent::AddFinished(result) => match result {
                Ok(book) => state.books.push(book),
                Err(_) => state.error = Some(ADD_FAILED.to_string()),
            },
            CollectionIntent::BeginEdit(id) => state.editing = Some(id),
            CollectionIntent::CancelEdit => state.editing = None,
            CollectionIntent::UpdateFinished { id, result } => match result {
                Ok(book) => {
                    // A book deleted while the save was in flight stays deleted.
                    if let Some(slot) = state.books.iter_mut().find(|b| b.id == id) {
                        *slot = book;
                    }
                    if state.editing == Some(id) {
                        state.editing = None;
                    }
                }
                Err(_) => state.error = Some(UPDATE_FAILED.to_string()),
            },
            CollectionIntent::RemoveFinished { id, result } => match result {
                Ok(()) => {
                    state.books.retain(|b| b.id != id);
                    if state.editing == Some(id) {
                        state.editing = None;
                    }
                }
                Err(_) => state.error = Some(DELETE_FAILED.to_string()),
            },
        }
        state
    }
}
