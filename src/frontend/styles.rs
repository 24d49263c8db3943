//! Inline stylesheet for the desktop window.

pub const STYLES: &str = r#"
body {
    margin: 0;
    background: #16181d;
    color: #e6e6e6;
    font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
}
.page { max-width: 640px; margin: 0 auto; padding: 32px 24px; }
h1 { margin: 0 0 4px; font-size: 1.6rem; }
h2 { margin-top: 32px; font-size: 1.1rem; }
.muted { color: #8b8f99; font-size: 0.9rem; }
.assistant-form { display: flex; flex-direction: column; gap: 14px; margin-top: 20px; }
.field { display: flex; flex-direction: column; gap: 6px; }
.field label { font-size: 0.85rem; color: #b7bac2; }
.field input, .field textarea {
    background: #1f2229;
    border: 1px solid #2e323b;
    border-radius: 6px;
    color: inherit;
    font: inherit;
    padding: 8px 10px;
}
.field textarea { resize: vertical; }
.create-button {
    align-self: flex-start;
    background: #4caf50;
    border: none;
    border-radius: 6px;
    color: white;
    cursor: pointer;
    font-size: 1rem;
    padding: 10px 28px;
}
.create-button:disabled { opacity: 0.6; cursor: default; }
.status { min-height: 1.2em; margin: 0; }
.status-ok { color: #7ddc84; }
.status-error { color: #ff7b72; white-space: pre-wrap; }
.recent { list-style: none; padding: 0; margin: 0; }
.recent li {
    display: flex;
    gap: 12px;
    align-items: baseline;
    padding: 8px 0;
    border-bottom: 1px solid #2a2d35;
}
.recent-name { flex: 1; }
.recent-id { color: #b7bac2; font-size: 0.85rem; }
"#;
