//! Request handlers for the to-do routes.
//!
//! Form bodies are parsed into explicit serde schemas; malformed
//! submissions are rejected by the `Form` extractor before a handler runs.
//! Mutations are awaited and confirmed before the redirect is issued.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use bson::oid::ObjectId;
use serde::Deserialize;

use listkeeper_core::{default_items, Error, Item, ListName, TodoList};

use crate::server::AppState;
use crate::views;

/// Error wrapper mapping [`Error`] onto HTTP responses.
pub struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::ListNotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidItemId { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self.0, status = status.as_u16(), "Request failed");

        match views::error_page(status.as_u16(), &self.0.to_string()) {
            Ok(body) => (status, Html(body)).into_response(),
            // If the error page itself fails to render, fall back to text.
            Err(_) => (status, self.0.to_string()).into_response(),
        }
    }
}

/// Health probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /` — renders the default "Today" list, seeding the welcome items
/// into an empty store first.
pub async fn show_today(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let mut items = state.store.find_today_items().await?;

    if items.is_empty() {
        items = default_items();
        state.store.insert_today_items(items.clone()).await?;
        tracing::info!(count = items.len(), "Seeded welcome items");
    }

    let body = views::list_page(ListName::today().as_str(), &items)?;
    Ok(Html(body).into_response())
}

/// `GET /{name}` — renders the named list, lazily creating it (seeded with
/// the welcome items) and redirecting to its canonical path if absent.
pub async fn show_list(
    State(state): State<Arc<AppState>>,
    Path(raw_name): Path<String>,
) -> Result<Response, AppError> {
    let name = ListName::new(&raw_name);

    match state.store.find_list(&name).await? {
        Some(list) => {
            let body = views::list_page(&list.name, &list.items)?;
            Ok(Html(body).into_response())
        }
        None => {
            let list = TodoList::seeded(&name);
            state.store.insert_list(&list).await?;
            tracing::info!(list = %name, "Created list");
            Ok(Redirect::to(&format!("/{name}")).into_response())
        }
    }
}

/// Form body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    /// Text of the new item.
    #[serde(rename = "newItem")]
    pub new_item: String,
    /// Name of the target list.
    pub list: String,
}

/// `POST /` — appends an item to the target list and redirects to it.
///
/// A target list that does not exist yet is created on the fly, seeded and
/// with the submitted item appended.
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    let target = ListName::new(&form.list);
    let item = Item::new(form.new_item);

    if target.is_today() {
        state.store.insert_today_items(vec![item]).await?;
        return Ok(Redirect::to("/"));
    }

    if !state.store.push_item(&target, &item).await? {
        let mut list = TodoList::seeded(&target);
        list.items.push(item);
        state.store.insert_list(&list).await?;
        tracing::info!(list = %target, "Created list for submitted item");
    }

    Ok(Redirect::to(&format!("/{target}")))
}

/// Form body for `POST /delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    /// Hex id of the checked item.
    pub checkbox: String,
    /// Name of the list the item belongs to.
    #[serde(rename = "listName")]
    pub list_name: String,
}

/// `POST /delete` — removes the checked item, then redirects to its list.
///
/// The redirect is only issued once the mutation has been confirmed; a
/// missing list is a 404 and a malformed id a 400.
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Redirect, AppError> {
    let id = ObjectId::parse_str(&form.checkbox).map_err(|_| Error::InvalidItemId {
        value: form.checkbox.clone(),
    })?;
    let target = ListName::new(&form.list_name);

    if target.is_today() {
        state.store.delete_today_item(id).await?;
        tracing::debug!(item = %id, "Deleted item from default list");
        return Ok(Redirect::to("/"));
    }

    if state.store.pull_item(&target, id).await? {
        tracing::debug!(list = %target, item = %id, "Pulled item from list");
        Ok(Redirect::to(&format!("/{target}")))
    } else {
        Err(Error::list_not_found(target.to_string()).into())
    }
}
