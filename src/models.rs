//! Data models for the notes application.
//!
//! Row types for the four tables (note categories, notes, recipe categories,
//! recipes), the inputs used to create them, and the form payloads accepted
//! by the HTTP handlers.

use serde::Deserialize;
use sqlx::FromRow;

/// Database primary key type.
pub type DbId = i64;

/// Title stored for a recipe whose page has no usable `<title>`.
pub const UNTITLED_RECIPE: &str = "Без названия";

// ============================================================================
// Categories
// ============================================================================

/// Which of the two parallel category tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Note,
    Recipe,
}

impl CategoryKind {
    pub fn table(self) -> &'static str {
        match self {
            CategoryKind::Note => "category",
            CategoryKind::Recipe => "category_recipe",
        }
    }

    /// Table holding the items owned by a category of this kind.
    pub fn child_table(self) -> &'static str {
        match self {
            CategoryKind::Note => "note",
            CategoryKind::Recipe => "recipe",
        }
    }

    /// Listing page the kind's mutations return to by default.
    pub fn listing_path(self) -> &'static str {
        match self {
            CategoryKind::Note => "/",
            CategoryKind::Recipe => "/recipes",
        }
    }

    pub fn entity_name(self) -> &'static str {
        match self {
            CategoryKind::Note => "Category",
            CategoryKind::Recipe => "RecipeCategory",
        }
    }
}

/// A row from either `category` or `category_recipe`. Both tables share
/// the same shape, the kind is carried by whoever loaded it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

// ============================================================================
// Notes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
}

// ============================================================================
// Recipes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub url: String,
    pub category_id: Option<DbId>,
}

/// Display metadata pulled from a recipe page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMetadata {
    pub title: String,
    /// `og:image` of the page, empty when the page declares none.
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub title: String,
    pub image_url: String,
    pub url: String,
    pub category_id: Option<DbId>,
}

impl NewRecipe {
    pub fn from_metadata(url: &str, meta: RecipeMetadata, category_id: Option<DbId>) -> Self {
        Self {
            title: meta.title,
            image_url: meta.image_url,
            url: url.to_string(),
            category_id,
        }
    }
}

// ============================================================================
// Forms and Queries
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

impl CategoryFilter {
    /// Lenient parse used by the recipes listing: a value that is not an
    /// integer is the same as no filter.
    pub fn category_id(&self) -> Option<DbId> {
        parse_id(self.category.as_deref())
    }

    /// Strict parse used by the notes listing. Any non-blank value filters,
    /// so one that is not an integer matches no note at all.
    pub fn note_filter(&self) -> NoteFilter {
        match self.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => NoteFilter::All,
            Some(raw) => raw
                .parse()
                .map_or(NoteFilter::Unmatched, NoteFilter::Category),
        }
    }
}

/// How the notes listing narrows its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFilter {
    All,
    Category(DbId),
    /// The filter names no category that could exist.
    Unmatched,
}

impl NoteFilter {
    /// Category to highlight in the sidebar.
    pub fn category_id(self) -> Option<DbId> {
        match self {
            NoteFilter::Category(id) => Some(id),
            NoteFilter::All | NoteFilter::Unmatched => None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AddCategoryForm {
    pub name: Option<String>,
    pub next: Option<String>,
}

/// Body of the per-item delete forms; only carries the redirect target.
#[derive(Debug, Deserialize, Default)]
pub struct RedirectForm {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AddNoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
    pub next: Option<String>,
}

impl AddNoteForm {
    pub fn into_new_note(self) -> NewNote {
        NewNote {
            category_id: parse_id(self.category_id.as_deref()),
            title: self.title,
            content: self.content,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AddRecipeForm {
    pub url: Option<String>,
    pub category_id: Option<String>,
    pub next: Option<String>,
}

/// Parse an optional id from a form or query value. Absent, blank and
/// non-numeric values all mean "no category".
pub fn parse_id(raw: Option<&str>) -> Option<DbId> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
