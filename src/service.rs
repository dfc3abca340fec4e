//! Category and item operations.
//!
//! These sit between the HTTP handlers and the repositories. Creation that
//! cannot proceed (empty name, failed page fetch, missing category) is a
//! silent no-op reported as `Ok(None)`; deleting something that does not
//! exist is [`AppError::NotFound`].

use crate::db::DbPool;
use crate::error::{is_foreign_key_violation, AppError, AppResult};
use crate::extractor::MetadataExtractor;
use crate::models::{Category, CategoryKind, DbId, NewNote, NewRecipe, Note, Recipe};
use crate::repository::{CategoryRepo, NoteRepo, RecipeRepo};

// ============================================================================
// Categories
// ============================================================================

pub async fn list_categories(pool: &DbPool, kind: CategoryKind) -> AppResult<Vec<Category>> {
    Ok(CategoryRepo::list(pool, kind).await?)
}

/// Create a category unless `name` is absent or empty. Names are stored as
/// given and need not be unique.
pub async fn create_category(
    pool: &DbPool,
    kind: CategoryKind,
    name: Option<&str>,
) -> AppResult<Option<Category>> {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        tracing::debug!(?kind, "Ignoring category without a name");
        return Ok(None);
    };

    let category = CategoryRepo::create(pool, kind, name).await?;
    tracing::info!(?kind, id = category.id, name = %category.name, "Category created");
    Ok(Some(category))
}

/// Delete a category together with every item filed under it.
pub async fn delete_category(pool: &DbPool, kind: CategoryKind, id: DbId) -> AppResult<()> {
    match CategoryRepo::delete_with_children(pool, kind, id).await? {
        Some(children) => {
            tracing::info!(?kind, id, children, "Category deleted");
            Ok(())
        }
        None => Err(AppError::NotFound {
            entity: kind.entity_name(),
            id,
        }),
    }
}

// ============================================================================
// Notes
// ============================================================================

pub async fn list_notes(pool: &DbPool, category_id: Option<DbId>) -> AppResult<Vec<Note>> {
    Ok(NoteRepo::list(pool, category_id).await?)
}

/// Title and content are optional. A `category_id` naming a category that
/// does not exist is refused by the database and the note is dropped.
pub async fn create_note(pool: &DbPool, input: NewNote) -> AppResult<Option<Note>> {
    match NoteRepo::create(pool, &input).await {
        Ok(note) => {
            tracing::info!(id = note.id, category_id = ?note.category_id, "Note created");
            Ok(Some(note))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            tracing::warn!(category_id = ?input.category_id, "Note references missing category, not saved");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_note(pool: &DbPool, id: DbId) -> AppResult<()> {
    if NoteRepo::delete(pool, id).await? {
        tracing::info!(id, "Note deleted");
        Ok(())
    } else {
        Err(AppError::NotFound { entity: "Note", id })
    }
}

// ============================================================================
// Recipes
// ============================================================================

pub async fn list_recipes(pool: &DbPool, category_id: Option<DbId>) -> AppResult<Vec<Recipe>> {
    Ok(RecipeRepo::list(pool, category_id).await?)
}

/// Fetch `url`, derive its title and preview image, and save a recipe.
/// Nothing is written when the fetch or parse fails.
pub async fn create_recipe(
    pool: &DbPool,
    extractor: &MetadataExtractor,
    url: &str,
    category_id: Option<DbId>,
) -> AppResult<Option<Recipe>> {
    let meta = match extractor.extract(url).await {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!(url, error = %e, "Recipe metadata extraction failed, skipping");
            return Ok(None);
        }
    };

    let input = NewRecipe::from_metadata(url, meta, category_id);
    match RecipeRepo::create(pool, &input).await {
        Ok(recipe) => {
            tracing::info!(id = recipe.id, title = %recipe.title, "Recipe created");
            Ok(Some(recipe))
        }
        Err(e) if is_foreign_key_violation(&e) => {
            tracing::warn!(?category_id, "Recipe references missing category, not saved");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_recipe(pool: &DbPool, id: DbId) -> AppResult<()> {
    if RecipeRepo::delete(pool, id).await? {
        tracing::info!(id, "Recipe deleted");
        Ok(())
    } else {
        Err(AppError::NotFound {
            entity: "Recipe",
            id,
        })
    }
}
