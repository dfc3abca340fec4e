//! Repositories for the four tables.
//!
//! Each repository is a unit struct with associated async functions taking
//! the pool explicitly. Queries are plain SQL strings; rows come back in
//! insertion (id) order.

use crate::db::DbPool;
use crate::models::{Category, CategoryKind, DbId, NewNote, NewRecipe, Note, Recipe};

const NOTE_COLUMNS: &str = "id, title, content, category_id";
const RECIPE_COLUMNS: &str = "id, title, image_url, url, category_id";

// ============================================================================
// Categories
// ============================================================================

/// CRUD for both category tables, selected by [`CategoryKind`].
pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list(pool: &DbPool, kind: CategoryKind) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT id, name FROM {} ORDER BY id ASC", kind.table());
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    pub async fn create(
        pool: &DbPool,
        kind: CategoryKind,
        name: &str,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (name) VALUES (?) RETURNING id, name",
            kind.table()
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Delete a category and every item that references it in a single
    /// transaction. Returns `Ok(None)` when no such category exists, else
    /// the number of child items removed.
    pub async fn delete_with_children(
        pool: &DbPool,
        kind: CategoryKind,
        id: DbId,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists_query = format!("SELECT id FROM {} WHERE id = ?", kind.table());
        let exists: Option<(DbId,)> = sqlx::query_as(&exists_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let children_query = format!("DELETE FROM {} WHERE category_id = ?", kind.child_table());
        let children = sqlx::query(&children_query)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let parent_query = format!("DELETE FROM {} WHERE id = ?", kind.table());
        sqlx::query(&parent_query).bind(id).execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(Some(children))
    }
}

// ============================================================================
// Notes
// ============================================================================

pub struct NoteRepo;

impl NoteRepo {
    /// All notes, or only those in `category_id` when given.
    pub async fn list(pool: &DbPool, category_id: Option<DbId>) -> Result<Vec<Note>, sqlx::Error> {
        match category_id {
            Some(category_id) => {
                let query = format!(
                    "SELECT {NOTE_COLUMNS} FROM note WHERE category_id = ? ORDER BY id ASC"
                );
                sqlx::query_as::<_, Note>(&query)
                    .bind(category_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {NOTE_COLUMNS} FROM note ORDER BY id ASC");
                sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
            }
        }
    }

    pub async fn create(pool: &DbPool, input: &NewNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO note (title, content, category_id)
             VALUES (?, ?, ?)
             RETURNING {NOTE_COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM note WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Recipes
// ============================================================================

pub struct RecipeRepo;

impl RecipeRepo {
    pub async fn list(
        pool: &DbPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<Recipe>, sqlx::Error> {
        match category_id {
            Some(category_id) => {
                let query = format!(
                    "SELECT {RECIPE_COLUMNS} FROM recipe WHERE category_id = ? ORDER BY id ASC"
                );
                sqlx::query_as::<_, Recipe>(&query)
                    .bind(category_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {RECIPE_COLUMNS} FROM recipe ORDER BY id ASC");
                sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
            }
        }
    }

    pub async fn create(pool: &DbPool, input: &NewRecipe) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipe (title, image_url, url, category_id)
             VALUES (?, ?, ?, ?)
             RETURNING {RECIPE_COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.url)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipe WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
