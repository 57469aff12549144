//! Handlers for the fruit resource.
//!
//! Each handler is one store call plus one response action: render a view,
//! redirect back to the listing, or emit JSON (seed only). Unknown ids fall
//! through to views rendering an absent record; store failures surface as a
//! 500 via [`crate::error::ServerError`].

use crate::error::ServerResult;
use crate::model::{starter_fruits, Fruit, FruitForm};
use crate::state::AppState;
use crate::views;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::Json;

/// GET /fruits - render the full collection, in whatever order the store
/// returns it.
pub async fn index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let fruits = state.store.find_all().await?;
    Ok(views::fruits_index(&fruits))
}

/// GET /fruits/seed - reset the collection to the five starter records and
/// respond with the created records as JSON. Destructive: everything that
/// was there before is gone. The delete and the bulk insert are two separate
/// store calls, so a concurrent read can observe an empty collection between
/// them.
pub async fn seed(State(state): State<AppState>) -> ServerResult<Json<Vec<Fruit>>> {
    state.store.delete_all().await?;
    let created = state.store.create_many(starter_fruits()).await?;
    Ok(Json(created))
}

/// GET /fruits/new - render the create form.
pub async fn new_form() -> Html<String> {
    views::fruits_new()
}

/// POST /fruits - create a record from the form body and bounce the browser
/// back to the listing.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<FruitForm>,
) -> ServerResult<Redirect> {
    state.store.create_one(form.into_fields()).await?;
    Ok(Redirect::to("/fruits"))
}

/// GET /fruits/{id} - render the detail view.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Html<String>> {
    let fruit = state.store.find_by_id(&id).await?;
    Ok(views::fruits_show(fruit.as_ref()))
}

/// GET /fruits/{id}/edit - render the edit form with current values.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Html<String>> {
    let fruit = state.store.find_by_id(&id).await?;
    Ok(views::fruits_edit(fruit.as_ref()))
}

/// PUT /fruits/{id} - full replace of the editable fields, then redirect.
/// A missing id is not an error; the redirect happens regardless.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<FruitForm>,
) -> ServerResult<Redirect> {
    state.store.replace_by_id(&id, form.into_fields()).await?;
    Ok(Redirect::to("/fruits"))
}

/// DELETE /fruits/{id} - remove the record, then redirect. Deleting an id
/// that does not exist still redirects.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Redirect> {
    state.store.delete_by_id(&id).await?;
    Ok(Redirect::to("/fruits"))
}
