//! CSS styles for the notes application.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
    --highlight: #f7f2e2;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1.5em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }
h2 { font-size: 1.2rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    z-index: 100;
}
.nav-bar a { font-size: 0.9rem; }
.nav-bar a.active { font-weight: 600; color: var(--base01); }

.layout {
    display: grid;
    grid-template-columns: 220px 1fr;
    gap: 2rem;
}

.category-list { list-style: none; }
.category-item {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.3rem 0.5rem;
    border-radius: 4px;
}
.category-item.active { background: var(--highlight); font-weight: 600; }

.inline-form { display: inline; }

button.link-button {
    background: none;
    border: none;
    color: var(--muted);
    cursor: pointer;
    font-family: inherit;
    font-size: 0.8rem;
}
button.link-button:hover { color: var(--red); }

.add-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    margin: 1rem 0;
}
.add-form input, .add-form textarea, .add-form select {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-family: inherit;
    font-size: 0.9rem;
}
.add-form textarea { min-height: 6rem; resize: vertical; }
.add-form button {
    align-self: flex-start;
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.9rem;
}

.note-list { list-style: none; }
.note-item {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border);
}
.note-item:last-child { border-bottom: none; }
.note-item .item-header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    gap: 1rem;
}
.note-item .title { font-size: 1rem; font-weight: 600; }
.note-item .body { white-space: pre-wrap; margin-top: 0.25rem; }
.note-item .meta { font-size: 0.8rem; color: var(--muted); }

.recipe-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 1rem;
}
.recipe-card {
    border: 1px solid var(--border);
    border-radius: 6px;
    overflow: hidden;
    display: flex;
    flex-direction: column;
}
.recipe-card img { width: 100%; height: 140px; object-fit: cover; background: var(--accent); }
.recipe-card .no-image { height: 140px; background: var(--accent); }
.recipe-card .card-body { padding: 0.5rem 0.75rem; flex: 1; }
.recipe-card .card-footer {
    display: flex;
    justify-content: space-between;
    padding: 0 0.75rem 0.5rem;
    font-size: 0.8rem;
    color: var(--muted);
}

.empty { color: var(--muted); font-style: italic; }

.message {
    padding: 0.75rem 1rem;
    border-radius: 4px;
    margin: 1rem 0;
}
.message.error { background: #fdf0ef; color: var(--red); border: 1px solid var(--red); }
"#;
