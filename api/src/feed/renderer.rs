//! Feed renderer
//!
//! Renders the index page: one list item per package inside `#itemList`.

use crate::domain::entities::Package;

/// Identifier of the list element clients render into
pub const CONTAINER_ID: &str = "itemList";

const ENTRY_HEADING: &str = "Malicious traffic detected";

/// Render the index page for the given packages
pub fn render_index(packages: &[Package]) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n");
    buf.push_str("<html lang=\"en\">\n");
    buf.push_str("<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str("<title>Oraculo</title>\n");
    buf.push_str("</head>\n");
    buf.push_str("<body>\n");
    buf.push_str("<h1>Oraculo</h1>\n");

    buf.push_str(&format!("<ul id=\"{}\">\n", CONTAINER_ID));
    for package in packages {
        buf.push_str(&render_package(package));
    }
    buf.push_str("</ul>\n");

    if packages.is_empty() {
        buf.push_str("<p>No malicious traffic detected.</p>\n");
    }

    buf.push_str("</body>\n");
    buf.push_str("</html>\n");

    buf
}

fn render_package(package: &Package) -> String {
    format!(
        "<li style=\"--i: 2\"><h3>{}</h3><p>Source IP: {}</p><p>Attack type: {}</p></li>\n",
        ENTRY_HEADING,
        escape_html(&package.ip.to_string()),
        escape_html(&package.attack_type),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
