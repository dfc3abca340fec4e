//! HTTP route handlers for the web application.
//!
//! Listing pages render HTML; every mutating endpoint is a form POST that
//! answers with a redirect back to a listing page (`next` when it is a local
//! path, else the endpoint's default).

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Form, Path, Query, State,
    },
    response::{Html, Redirect},
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{
    parse_id, AddCategoryForm, AddNoteForm, AddRecipeForm, CategoryFilter, CategoryKind, DbId,
    NoteFilter, RedirectForm,
};
use crate::service;
use crate::templates::{render_notes_page, render_recipes_page};
use crate::AppState;

/// Where to send the browser after a mutation. Only same-site paths are
/// honored so a crafted form cannot bounce users to another host.
pub fn redirect_target(next: Option<&str>, default: &str) -> String {
    match next {
        Some(n) if n.starts_with('/') && !n.starts_with("//") && !n.contains('\\') => {
            n.to_string()
        }
        _ => default.to_string(),
    }
}

/// The delete endpoints accept an empty POST as well as a form with `next`.
fn redirect_form(form: Result<Form<RedirectForm>, FormRejection>) -> RedirectForm {
    form.map(|Form(f)| f).unwrap_or_default()
}

/// An id segment that does not parse names no row, so it is a 404 like any
/// other missing item.
fn path_id(path: Result<Path<DbId>, PathRejection>, entity: &'static str) -> AppResult<DbId> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(entity, error = %rejection, "Unparsable id in path");
        AppError::MalformedId { entity }
    })
}

// ============================================================================
// Listing Handlers
// ============================================================================

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Html<String>> {
    let filter = filter.note_filter();
    let categories = service::list_categories(&state.pool, CategoryKind::Note).await?;
    let notes = match filter {
        NoteFilter::All => service::list_notes(&state.pool, None).await?,
        NoteFilter::Category(id) => service::list_notes(&state.pool, Some(id)).await?,
        NoteFilter::Unmatched => Vec::new(),
    };

    Ok(Html(render_notes_page(&categories, &notes, filter.category_id())))
}

pub async fn recipes(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Html<String>> {
    let active = filter.category_id();
    let categories = service::list_categories(&state.pool, CategoryKind::Recipe).await?;
    let recipes = service::list_recipes(&state.pool, active).await?;

    Ok(Html(render_recipes_page(&categories, &recipes, active)))
}

// ============================================================================
// Category Handlers
// ============================================================================

async fn add_category_of(
    state: &AppState,
    kind: CategoryKind,
    form: AddCategoryForm,
) -> AppResult<Redirect> {
    service::create_category(&state.pool, kind, form.name.as_deref()).await?;
    Ok(Redirect::to(&redirect_target(
        form.next.as_deref(),
        kind.listing_path(),
    )))
}

async fn delete_category_of(
    state: &AppState,
    kind: CategoryKind,
    id: DbId,
    form: RedirectForm,
) -> AppResult<Redirect> {
    service::delete_category(&state.pool, kind, id).await?;
    Ok(Redirect::to(&redirect_target(
        form.next.as_deref(),
        kind.listing_path(),
    )))
}

pub async fn add_category(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddCategoryForm>,
) -> AppResult<Redirect> {
    add_category_of(&state, CategoryKind::Note, form).await
}

pub async fn add_category_recipe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddCategoryForm>,
) -> AppResult<Redirect> {
    add_category_of(&state, CategoryKind::Recipe, form).await
}

pub async fn delete_category(
    path: Result<Path<DbId>, PathRejection>,
    State(state): State<Arc<AppState>>,
    form: Result<Form<RedirectForm>, FormRejection>,
) -> AppResult<Redirect> {
    let kind = CategoryKind::Note;
    let id = path_id(path, kind.entity_name())?;
    delete_category_of(&state, kind, id, redirect_form(form)).await
}

pub async fn delete_category_recipe(
    path: Result<Path<DbId>, PathRejection>,
    State(state): State<Arc<AppState>>,
    form: Result<Form<RedirectForm>, FormRejection>,
) -> AppResult<Redirect> {
    let kind = CategoryKind::Recipe;
    let id = path_id(path, kind.entity_name())?;
    delete_category_of(&state, kind, id, redirect_form(form)).await
}

// ============================================================================
// Note Handlers
// ============================================================================

pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddNoteForm>,
) -> AppResult<Redirect> {
    let next = redirect_target(form.next.as_deref(), "/");
    service::create_note(&state.pool, form.into_new_note()).await?;
    Ok(Redirect::to(&next))
}

pub async fn delete_note(
    path: Result<Path<DbId>, PathRejection>,
    State(state): State<Arc<AppState>>,
    form: Result<Form<RedirectForm>, FormRejection>,
) -> AppResult<Redirect> {
    let id = path_id(path, "Note")?;
    service::delete_note(&state.pool, id).await?;
    let form = redirect_form(form);
    Ok(Redirect::to(&redirect_target(form.next.as_deref(), "/")))
}

// ============================================================================
// Recipe Handlers
// ============================================================================

pub async fn add_recipe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddRecipeForm>,
) -> AppResult<Redirect> {
    let next = redirect_target(form.next.as_deref(), "/recipes");
    let url = form.url.as_deref().unwrap_or_default();
    let category_id = parse_id(form.category_id.as_deref());

    service::create_recipe(&state.pool, &state.extractor, url, category_id).await?;
    Ok(Redirect::to(&next))
}

pub async fn delete_recipe(
    path: Result<Path<DbId>, PathRejection>,
    State(state): State<Arc<AppState>>,
    form: Result<Form<RedirectForm>, FormRejection>,
) -> AppResult<Redirect> {
    let id = path_id(path, "Recipe")?;
    service::delete_recipe(&state.pool, id).await?;
    let form = redirect_form(form);
    Ok(Redirect::to(&redirect_target(form.next.as_deref(), "/recipes")))
}
