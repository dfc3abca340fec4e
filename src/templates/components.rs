//! Shared HTML components for the notes application.
//!
//! Contains navigation bar, the category sidebar, and the base HTML template.

use axum::http::StatusCode;

use crate::models::{Category, CategoryKind, DbId};

use super::styles::STYLE;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Path of a listing page, filtered to `category_id` when given.
pub fn listing_url(kind: CategoryKind, category_id: Option<DbId>) -> String {
    match category_id {
        Some(id) => format!("{}?category={}", kind.listing_path(), id),
        None => kind.listing_path().to_string(),
    }
}

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(active: CategoryKind) -> String {
    let class = |kind: CategoryKind| if kind == active { "active" } else { "" };

    format!(
        r#"<nav class="nav-bar">
            <a href="/" class="{notes}">Notes</a>
            <a href="/recipes" class="{recipes}">Recipes</a>
        </nav>"#,
        notes = class(CategoryKind::Note),
        recipes = class(CategoryKind::Recipe),
    )
}

// ============================================================================
// Category Sidebar
// ============================================================================

/// Category list with per-category delete buttons and the add-category form.
/// Every form posts `next` so the browser lands back on the current view.
pub fn category_sidebar(
    kind: CategoryKind,
    categories: &[Category],
    active: Option<DbId>,
) -> String {
    let (add_action, delete_prefix) = match kind {
        CategoryKind::Note => ("/add_category", "/delete_category"),
        CategoryKind::Recipe => ("/add_category_recipe", "/delete_category_recipe"),
    };
    let current = listing_url(kind, active);

    let mut html = String::from("<aside><h2>Categories</h2><ul class=\"category-list\">");

    html.push_str(&format!(
        r#"<li class="category-item{class}"><a href="{href}">All</a></li>"#,
        class = if active.is_none() { " active" } else { "" },
        href = kind.listing_path(),
    ));

    for category in categories {
        let is_active = active == Some(category.id);
        // Deleting the category being viewed would leave an empty filter.
        let after_delete = if is_active {
            kind.listing_path().to_string()
        } else {
            current.clone()
        };
        html.push_str(&format!(
            r#"<li class="category-item{class}">
                <a href="{href}">{name}</a>
                <form class="inline-form" method="post" action="{delete_prefix}/{id}">
                    <input type="hidden" name="next" value="{next}">
                    <button type="submit" class="link-button" title="Delete category and its contents">&times;</button>
                </form>
            </li>"#,
            class = if is_active { " active" } else { "" },
            href = listing_url(kind, Some(category.id)),
            name = html_escape(&category.name),
            delete_prefix = delete_prefix,
            id = category.id,
            next = html_escape(&after_delete),
        ));
    }

    html.push_str("</ul>");
    html.push_str(&format!(
        r#"<form class="add-form" method="post" action="{add_action}">
            <input type="text" name="name" placeholder="New category" maxlength="100">
            <input type="hidden" name="next" value="{next}">
            <button type="submit">Add category</button>
        </form></aside>"#,
        add_action = add_action,
        next = html_escape(&current),
    ));

    html
}

/// `<select>` for filing a new item, preselecting the active category.
pub fn category_select(categories: &[Category], active: Option<DbId>) -> String {
    let mut html = String::from(r#"<select name="category_id"><option value="">No category</option>"#);
    for category in categories {
        html.push_str(&format!(
            r#"<option value="{id}"{selected}>{name}</option>"#,
            id = category.id,
            selected = if active == Some(category.id) { " selected" } else { "" },
            name = html_escape(&category.name),
        ));
    }
    html.push_str("</select>");
    html
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, active: CategoryKind) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        nav = nav_bar(active),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let content = format!(
        r#"<h1>{code}</h1>
        <div class="message error">{message}</div>
        <a href="/">Back to notes</a>"#,
        code = status.as_u16(),
        message = html_escape(message),
    );
    base_html("Error", &content, CategoryKind::Note)
}
