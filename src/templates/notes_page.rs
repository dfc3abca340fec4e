//! Notes listing page.

use crate::models::{Category, CategoryKind, DbId, Note};

use super::components::{base_html, category_select, category_sidebar, html_escape, listing_url};

pub fn render_notes_page(categories: &[Category], notes: &[Note], active: Option<DbId>) -> String {
    let current = listing_url(CategoryKind::Note, active);

    let heading = active
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| html_escape(&c.name))
        .unwrap_or_else(|| "All notes".to_string());

    let mut main = format!(
        r#"<section><h1>{heading}</h1>
        <form class="add-form" method="post" action="/add_note">
            <input type="text" name="title" placeholder="Title" maxlength="200">
            <textarea name="content" placeholder="Write a note..."></textarea>
            {select}
            <input type="hidden" name="next" value="{next}">
            <button type="submit">Add note</button>
        </form>"#,
        heading = heading,
        select = category_select(categories, active),
        next = html_escape(&current),
    );

    if notes.is_empty() {
        main.push_str(r#"<p class="empty">No notes yet.</p>"#);
    } else {
        main.push_str("<ul class=\"note-list\">");
        for note in notes {
            let category = note
                .category_id
                .and_then(|id| categories.iter().find(|c| c.id == id))
                .map(|c| {
                    format!(
                        r#"<a href="{}">{}</a>"#,
                        listing_url(CategoryKind::Note, Some(c.id)),
                        html_escape(&c.name)
                    )
                })
                .unwrap_or_default();

            main.push_str(&format!(
                r#"<li class="note-item">
                    <div class="item-header">
                        <span class="title">{title}</span>
                        <span class="meta">{category}
                            <form class="inline-form" method="post" action="/delete_note/{id}">
                                <input type="hidden" name="next" value="{next}">
                                <button type="submit" class="link-button">delete</button>
                            </form>
                        </span>
                    </div>
                    <div class="body">{content}</div>
                </li>"#,
                title = html_escape(note.title.as_deref().unwrap_or("")),
                category = category,
                id = note.id,
                next = html_escape(&current),
                content = html_escape(note.content.as_deref().unwrap_or("")),
            ));
        }
        main.push_str("</ul>");
    }
    main.push_str("</section>");

    let content = format!(
        r#"<div class="layout">{sidebar}{main}</div>"#,
        sidebar = category_sidebar(CategoryKind::Note, categories, active),
        main = main,
    );

    base_html("Notes", &content, CategoryKind::Note)
}
