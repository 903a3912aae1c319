//! Collection controller: owns the cached book list and transient UI state
//! and drives `RecordApi` calls in response to user intents.
//!
//! # Design
//! State changes go through `CollectionReducer` only. Each network action is
//! split in two: `dispatch_*` applies the start intent and hands back an owned
//! future resolving to the finish intent, and `apply` folds that intent in.
//! Several actions may be pending at once and are applied in whatever order
//! they resolve; the last one applied wins. The `load`/`add`/`save_edit`/
//! `remove` methods run the whole sequence for callers that await one action
//! at a time.

mod intent;
mod reducer;
mod state;

use std::future::Future;

pub use intent::CollectionIntent;
pub use reducer::CollectionReducer;
pub use state::{
    CollectionState, CollectionView, ADD_FAILED, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED,
};

use crate::api::RecordApi;
use crate::form::{BookForm, Clock, SystemClock};
use crate::transport::Transport;
use crate::types::{Book, BookId, BookPatch};

pub struct CollectionController<T, C = SystemClock> {
    api: RecordApi<T>,
    clock: C,
    state: CollectionState,
}

impl<T> CollectionController<T, SystemClock>
where
    T: Transport + Clone + 'static,
{
    pub fn new(api: RecordApi<T>) -> Self {
        Self::with_clock(api, SystemClock)
    }
}

impl<T, C> CollectionController<T, C>
where
    T: Transport + Clone + 'static,
    C: Clock,
{
    pub fn with_clock(api: RecordApi<T>, clock: C) -> Self {
        Self {
            api,
            clock,
            state: CollectionState::default(),
        }
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn books(&self) -> &[Book] {
        &self.state.books
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn view(&self) -> CollectionView<'_> {
        self.state.view()
    }

    /// Year used when a form's year field does not parse.
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn apply(&mut self, intent: CollectionIntent) {
        if let Some((action, err)) = intent.failure() {
            tracing::warn!(action, kind = err.kind(), error = %err, "book action failed");
        }
        let state = std::mem::take(&mut self.state);
        self.state = CollectionReducer::reduce(state, intent);
    }

    pub fn dispatch_load(&mut self) -> impl Future<Output = CollectionIntent> + 'static {
        self.apply(CollectionIntent::LoadStarted);
        let api = self.api.clone();
        async move { CollectionIntent::LoadFinished(api.list().await) }
    }

    /// `None` when the form fails validation; nothing is sent and no error is set.
    pub fn dispatch_add(
        &mut self,
        form: &BookForm,
    ) -> Option<impl Future<Output = CollectionIntent> + 'static> {
        let draft = form.to_new_book(self.clock.current_year())?;
        self.apply(CollectionIntent::ActionStarted);
        let api = self.api.clone();
        Some(async move { CollectionIntent::AddFinished(api.create(&draft).await) })
    }

    pub fn begin_edit(&mut self, book: &Book) {
        self.apply(CollectionIntent::BeginEdit(book.id));
    }

    /// Ends editing. The caller's form is cleared along with the target.
    pub fn cancel_edit(&mut self, form: &mut BookForm) {
        form.clear();
        self.apply(CollectionIntent::CancelEdit);
    }

    /// `None` when nothing is being edited or the patch would blank out the
    /// title or author.
    pub fn dispatch_save_edit(
        &mut self,
        patch: &BookPatch,
    ) -> Option<impl Future<Output = CollectionIntent> + 'static> {
        let id = self.state.editing?;
        let patch = patch.validated()?;
        self.apply(CollectionIntent::ActionStarted);
        let api = self.api.clone();
        Some(async move {
            let result = api.update(id, &patch).await;
            CollectionIntent::UpdateFinished { id, result }
        })
    }

    pub fn dispatch_remove(&mut self, id: BookId) -> impl Future<Output = CollectionIntent> + 'static {
        self.apply(CollectionIntent::ActionStarted);
        let api = self.api.clone();
        async move {
            let result = api.remove(id).await;
            CollectionIntent::RemoveFinished { id, result }
        }
    }

    pub async fn load(&mut self) {
        let pending = self.dispatch_load();
        let finished = pending.await;
        self.apply(finished);
    }

    /// Returns whether a request was sent.
    pub async fn add(&mut self, form: &BookForm) -> bool {
        match self.dispatch_add(form) {
            Some(pending) => {
                let finished = pending.await;
                self.apply(finished);
                true
            }
            None => false,
        }
    }

    /// Saves the edit form as a full-field patch. Returns whether a request was sent.
    pub async fn save_edit_form(&mut self, form: &BookForm) -> bool {
        match form.to_patch(self.clock.current_year()) {
            Some(patch) => self.save_edit(&patch).await,
            None => false,
        }
    }

    /// Returns whether a request was sent.
    pub async fn save_edit(&mut self, patch: &BookPatch) -> bool {
        match self.dispatch_save_edit(patch) {
            Some(pending) => {
                let finished = pending.await;
                self.apply(finished);
                true
            }
            None => false,
        }
    }

    pub async fn remove(&mut self, id: BookId) {
        let pending = self.dispatch_remove(id);
        let finished = pending.await;
        self.apply(finished);
    }
}
