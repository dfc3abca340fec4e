//! Recipes listing page: one card per saved link with its preview image.

use crate::models::{Category, CategoryKind, DbId, Recipe};

use super::components::{base_html, category_select, category_sidebar, html_escape, listing_url};

pub fn render_recipes_page(
    categories: &[Category],
    recipes: &[Recipe],
    active: Option<DbId>,
) -> String {
    let current = listing_url(CategoryKind::Recipe, active);

    let heading = active
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| html_escape(&c.name))
        .unwrap_or_else(|| "All recipes".to_string());

    let mut main = format!(
        r#"<section><h1>{heading}</h1>
        <form class="add-form" method="post" action="/add_recipe">
            <input type="url" name="url" placeholder="https://..." required>
            {select}
            <input type="hidden" name="next" value="{next}">
            <button type="submit">Save recipe</button>
        </form>"#,
        heading = heading,
        select = category_select(categories, active),
        next = html_escape(&current),
    );

    if recipes.is_empty() {
        main.push_str(r#"<p class="empty">No recipes yet.</p>"#);
    } else {
        main.push_str("<div class=\"recipe-grid\">");
        for recipe in recipes {
            let image = if recipe.image_url.is_empty() {
                r#"<div class="no-image"></div>"#.to_string()
            } else {
                format!(
                    r#"<img src="{}" alt="" loading="lazy">"#,
                    html_escape(&recipe.image_url)
                )
            };

            main.push_str(&format!(
                r#"<div class="recipe-card">
                    {image}
                    <div class="card-body">
                        <a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a>
                    </div>
                    <div class="card-footer">
                        <span>{category}</span>
                        <form class="inline-form" method="post" action="/delete_recipe/{id}">
                            <input type="hidden" name="next" value="{next}">
                            <button type="submit" class="link-button">delete</button>
                        </form>
                    </div>
                </div>"#,
                image = image,
                url = html_escape(&recipe.url),
                title = html_escape(&recipe.title),
                category = recipe
                    .category_id
                    .and_then(|id| categories.iter().find(|c| c.id == id))
                    .map(|c| html_escape(&c.name))
                    .unwrap_or_default(),
                id = recipe.id,
                next = html_escape(&current),
            ));
        }
        main.push_str("</div>");
    }
    main.push_str("</section>");

    let content = format!(
        r#"<div class="layout">{sidebar}{main}</div>"#,
        sidebar = category_sidebar(CategoryKind::Recipe, categories, active),
        main = main,
    );

    base_html("Recipes", &content, CategoryKind::Recipe)
}
