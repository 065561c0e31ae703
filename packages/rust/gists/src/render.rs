//! Pure HTML rendering for the Gist listing page.
//!
//! Deterministic string construction only: no I/O, no date formatting, no
//! escaping. Descriptions, timestamps, and URLs are interpolated verbatim.

use std::fmt::Write as _;

use folio_shared::{Gist, GistFeed};

/// Heading/title of the rendered page.
const PAGE_TITLE: &str = "My GitHub Gists";

/// Placeholder heading for gists with no description.
const UNTITLED: &str = "Untitled";

/// Render a sequence of gists as a full HTML document.
///
/// The document contains one outer `<li>` per gist (description heading,
/// verbatim creation timestamp, nested file list). An empty slice yields a
/// well-formed document with an empty outer list.
pub fn render_gists(gists: &[Gist]) -> String {
    let mut items = String::new();
    for gist in gists {
        push_gist(&mut items, gist);
    }
    page(&format!("<ul>\n{items}</ul>"))
}

/// Render a [`GistFeed`], with a distinct notice for the empty and failed
/// cases instead of a bare empty list.
pub fn render_feed(feed: &GistFeed) -> String {
    match feed {
        GistFeed::Loaded { gists, .. } => render_gists(gists),
        GistFeed::Empty { .. } => page(r#"<p class="notice">No gists to show yet.</p>"#),
        GistFeed::Failed { .. } => {
            page(r#"<p class="notice">Could not load gists. Please try again later.</p>"#)
        }
    }
}

/// Wrap body content in the document shell.
fn page(body: &str) -> String {
    format!(
        "<html>\n<head><title>{PAGE_TITLE}</title></head>\n<body>\n\
         <h1>{PAGE_TITLE}</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// Append one gist's `<li>` to `out`.
fn push_gist(out: &mut String, gist: &Gist) {
    out.push_str("<li>\n<h3>");
    match gist.description.as_deref() {
        Some(desc) if !desc.is_empty() => out.push_str(desc),
        _ => out.push_str(UNTITLED),
    }
    out.push_str("</h3>\n<p>");
    out.push_str(&gist.created_at);
    out.push_str("</p>\n<ul>\n");

    for file in gist.files.values() {
        out.push_str("<li>");
        match file.raw_url.as_deref() {
            Some(url) => {
                let _ = write!(out, r#"<a href="{url}">"#);
            }
            // No raw URL: emit the anchor without an href rather than failing.
            None => out.push_str("<a>"),
        }
        if let Some(name) = file.filename.as_deref() {
            out.push_str(name);
        }
        out.push_str("</a></li>\n");
    }

    out.push_str("</ul>\n</li>\n");
}
