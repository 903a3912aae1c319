use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_GENRE: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

#[derive(Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default = "default_genre")]
    pub genre: String,
}

#[derive(Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

/// Books keyed by id; ids come from `next_id` and are never reused.
#[derive(Debug)]
pub struct Store {
    next_id: i64,
    books: BTreeMap<i64, Book>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            books: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, input: NewBook) -> Book {
        let book = Book {
            id: self.next_id,
            title: input.title,
            author: input.author,
            year: input.year,
            genre: input.genre,
        };
        self.next_id += 1;
        self.books.insert(book.id, book.clone());
        book
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Three books so that the first book created against a fresh dev server
/// gets id 4.
pub fn sample_books() -> Vec<NewBook> {
    vec![
        NewBook {
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            year: 1969,
            genre: "SciFi".to_string(),
        },
        NewBook {
            title: "Middlemarch".to_string(),
            author: "George Eliot".to_string(),
            year: 1871,
            genre: "Fiction".to_string(),
        },
        NewBook {
            title: "The Selfish Gene".to_string(),
            author: "Richard Dawkins".to_string(),
            year: 1976,
            genre: "Science".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(seed: Vec<NewBook>) -> Router {
    let mut store = Store::new();
    for book in seed {
        store.insert(book);
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, seed: Vec<NewBook>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let store = db.read().await;
    Json(store.books.values().cloned().collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), StatusCode> {
    if is_blank(&input.title) || is_blank(&input.author) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let book = db.write().await.insert(input);
    tracing::debug!(id = book.id, "created book");
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, StatusCode> {
    let store = db.read().await;
    store.books.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<BookPatch>,
) -> Result<Json<Book>, StatusCode> {
    let blank_title = input.title.as_deref().is_some_and(is_blank);
    let blank_author = input.author.as_deref().is_some_and(is_blank);

    let mut store = db.write().await;
    let book = store.books.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if blank_title || blank_author {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    if let Some(title) = input.title {
        book.title = title;
    }
    if let Some(author) = input.author {
        book.author = author;
    }
    if let Some(year) = input.year {
        book.year = year;
    }
    if let Some(genre) = input.genre {
        book.genre = genre;
    }
    Ok(Json(book.clone()))
}

async fn delete_book(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.books.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_to_json() {
        let book = Book {
            id: 1,
            title: "A".to_string(),
            author: "B".to_string(),
            year: 2020,
            genre: "Fiction".to_string(),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "A");
        assert_eq!(json["author"], "B");
        assert_eq!(json["year"], 2020);
        assert_eq!(json["genre"], "Fiction");
    }

    #[test]
    fn new_book_defaults_genre() {
        let input: NewBook =
            serde_json::from_str(r#"{"title":"X","author":"Y","year":2025}"#).unwrap();
        assert_eq!(input.genre, DEFAULT_GENRE);
    }

    #[test]
    fn new_book_rejects_missing_author() {
        let result: Result<NewBook, _> = serde_json::from_str(r#"{"title":"X","year":2025}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_all_fields_optional() {
        let input: BookPatch = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.author.is_none());
        assert!(input.year.is_none());
        assert!(input.genre.is_none());
    }

    #[test]
    fn store_assigns_increasing_ids() {
        let mut store = Store::new();
        let ids: Vec<i64> = sample_books().into_iter().map(|b| store.insert(b).id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn store_does_not_reuse_ids_after_delete() {
        let mut store = Store::new();
        for book in sample_books() {
            store.insert(book);
        }
        store.books.remove(&3);
        let book = store.insert(NewBook {
            title: "X".to_string(),
            author: "Y".to_string(),
            year: 2025,
            genre: "SciFi".to_string(),
        });
        assert_eq!(book.id, 4);
    }
}
