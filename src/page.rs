//! HTML for the home page.

const PAGE_STYLES: &str = r"
body {
    font-family: system-ui, sans-serif;
    background: #1b1b1b;
    color: #e0e0e0;
    display: flex;
    justify-content: center;
    padding-top: 4rem;
}
.container { text-align: center; }
input, button { font-size: 1rem; padding: 0.4rem 0.8rem; }
img { image-rendering: pixelated; margin-top: 1.5rem; }
code { color: #9cdcfe; }
";

/// Path of the avatar endpoint for a player identifier, inserted verbatim.
#[must_use]
pub fn avatar_url(uuid: &str) -> String {
    format!("/avatar/{uuid}")
}

/// Render the home page: a lookup form and, once a username was submitted,
/// its avatar.
///
/// The username goes straight into the avatar URL; it is not resolved to
/// a UUID first.
#[must_use]
pub fn render_home(username: Option<&str>) -> String {
    let result = match username.filter(|u| !u.is_empty()) {
        Some(name) => {
            let url = avatar_url(name);
            format!(
                r#"<h2>{name}</h2>
        <p>Avatar URL: <code>{url_text}</code></p>
        <img src="{url_attr}" alt="Avatar of {name}" width="192" height="192">"#,
                name = html_escape::encode_text(name),
                url_text = html_escape::encode_text(&url),
                url_attr = html_escape::encode_double_quoted_attribute(&url),
            )
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>skinface</title>
    <style>{PAGE_STYLES}</style>
</head>
<body>
    <div class="container">
        <h1>Minecraft avatar</h1>
        <form action="/" method="get">
            <input type="text" name="username" placeholder="Player UUID" required>
            <button type="submit">Show</button>
        </form>
        {result}
    </div>
</body>
</html>"#
    )
}
