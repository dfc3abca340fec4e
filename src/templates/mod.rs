//! HTML templates and styling for the notes application.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (nav bar, category sidebar, base template)
//! - `notes_page` - Notes listing with the add-note form
//! - `recipes_page` - Recipe cards with the add-recipe form

mod components;
mod notes_page;
mod recipes_page;
mod styles;

pub use components::{base_html, error_page, html_escape, listing_url};
pub use notes_page::render_notes_page;
pub use recipes_page::render_recipes_page;
