//! HTML templates for the web interface
//!
//! Simple inline HTML templates without a template engine. Every value that
//! originates from a request goes through [`html_escape`].

use crate::{
    comment::{Category, Comment},
    feed::FeedPage,
};

/// Common CSS styles for all pages
const COMMON_STYLES: &str = r#"
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
        max-width: 800px;
        margin: 40px auto;
        padding: 0 20px;
        background: #f5f5f5;
    }
    .container {
        background: white;
        padding: 30px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    h1 {
        color: #333;
        border-bottom: 2px solid #0066cc;
        padding-bottom: 10px;
    }
    a {
        color: #0066cc;
        text-decoration: none;
    }
    .form-group {
        margin: 15px 0;
    }
    label {
        display: block;
        font-weight: bold;
        margin-bottom: 5px;
        color: #333;
    }
    textarea, select {
        width: 100%;
        padding: 10px;
        border: 1px solid #ddd;
        border-radius: 4px;
        font-size: 14px;
        box-sizing: border-box;
    }
    textarea {
        resize: vertical;
    }
    button {
        background: #0066cc;
        color: white;
        padding: 10px 20px;
        border: none;
        border-radius: 4px;
        cursor: pointer;
        font-size: 14px;
        font-weight: bold;
    }
    button:hover {
        background: #0052a3;
    }
    ul.comments {
        list-style: none;
        padding: 0;
    }
    .comment {
        margin: 10px 0;
        padding: 12px;
        background: #f9f9f9;
        border-left: 4px solid #999;
        border-radius: 4px;
    }
    .comment.positive {
        border-left-color: #28a745;
    }
    .comment.negative {
        border-left-color: #d9534f;
    }
    .category {
        font-size: 12px;
        font-weight: bold;
        text-transform: uppercase;
        color: #666;
    }
    .pagination {
        display: flex;
        justify-content: space-between;
        margin-top: 20px;
    }
    .empty {
        color: #666;
        font-style: italic;
    }
    .error {
        color: #d9534f;
        background: #f2dede;
        padding: 10px;
        border-radius: 4px;
        margin: 10px 0;
    }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>VoxPop - {title}</title>
    <style>{COMMON_STYLES}</style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>"#
    )
}

/// Render the landing page
pub fn home_page() -> String {
    layout(
        "Home",
        r#"        <h1>Welcome to VoxPop!</h1>
        <p><a href="/feed">Go to Public Feed</a></p>
        <p><a href="/comments/new">Leave a Comment</a></p>"#,
    )
}

/// Render the submission form, optionally with an error and the text the
/// user already typed.
pub fn new_comment_page(error: Option<&str>, text: &str) -> String {
    let error_html = error.map_or(String::new(), |e| {
        format!(r#"<div class="error">{}</div>"#, html_escape(e))
    });

    let options: String = Category::ALL
        .iter()
        .map(|c| format!(r#"<option value="{}">{}</option>"#, c.as_str(), c.label()))
        .collect();

    let body = format!(
        r#"        <h1>Leave a Comment</h1>
        {error_html}
        <form method="POST" action="/comments/new">
            <div class="form-group">
                <label for="text">Comment:</label>
                <textarea id="text" name="text" rows="4" required autofocus>{}</textarea>
            </div>
            <div class="form-group">
                <label for="category">Category:</label>
                <select id="category" name="category" required>
                    {options}
                </select>
            </div>
            <button type="submit">Submit</button>
        </form>
        <p><a href="/feed">View the feed</a></p>"#,
        html_escape(text)
    );

    layout("New Comment", &body)
}

/// Render one page of the public feed
pub fn feed_page(page: &FeedPage) -> String {
    let comments_html = if page.items.is_empty() {
        r#"<p class="empty">No comments on this page.</p>"#.to_string()
    } else {
        let rows: String = page.items.iter().map(comment_item).collect();
        format!(r#"<ul class="comments">{rows}</ul>"#)
    };

    let prev_link = page.prev_page.map_or(String::new(), |p| {
        format!(
            r#"<a rel="prev" href="{}">&larr; Previous</a>"#,
            feed_href(p, page.page_size)
        )
    });
    let next_link = page.next_page.map_or(String::new(), |p| {
        format!(
            r#"<a rel="next" href="{}">Next &rarr;</a>"#,
            feed_href(p, page.page_size)
        )
    });

    let body = format!(
        r#"        <h1>Public Feed</h1>
        <p><a href="/comments/new">Leave a Comment</a></p>
        {comments_html}
        <div class="pagination">
            <span>{prev_link}</span>
            <span class="current-page">Page {}</span>
            <span>{next_link}</span>
        </div>"#,
        page.current_page
    );

    layout("Feed", &body)
}

/// Render an error page
pub fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        r#"        <h1>{}</h1>
        <div class="error">{}</div>
        <p><a href="/">Back to VoxPop</a></p>"#,
        html_escape(title),
        html_escape(message)
    );
    layout("Error", &body)
}

fn comment_item(comment: &Comment) -> String {
    let category = comment.category().as_str();
    format!(
        r#"<li class="comment {category}"><span class="category">{category}</span><p class="text">{}</p></li>"#,
        html_escape(comment.text())
    )
}

fn feed_href(page: usize, page_size: usize) -> String {
    format!("/feed?page={page}&amp;page_size={page_size}")
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
