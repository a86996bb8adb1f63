use std::borrow::Cow;

use html_escape::encode_double_quoted_attribute;
use html_escape::encode_text;

use crate::Entry;
use crate::Listing;
use crate::WriterConfig;
use crate::utils::format_rfc1123;
use crate::utils::render_size;

const SHADE: &str = "#eeeeee";
const RULE: &str = "<HR size=\"1\" noshade=\"noshade\">";

/// Renders `listing` as a standalone HTML page using the global
/// [`WriterConfig`].
pub fn render_html(listing: &Listing, title: &str) -> String {
    render_html_with(listing, title, WriterConfig::global())
}

/// Renders `listing` as a standalone HTML page.
///
/// Rows appear as parent, directories, files. The parent row is never
/// shaded; the rest alternate starting with a shaded row, continuing across
/// the directories/files boundary.
pub fn render_html_with(listing: &Listing, title: &str, config: &WriterConfig) -> String {
    let title = text(title, config);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html><html><head>");
    html.push_str(&format!("<title>{title}</title>"));
    html.push_str(&format!(
        "<style type=\"text/css\"><!--{}--></style> ",
        config.css
    ));
    html.push_str("</head><body>");
    html.push_str(&format!("<h1>{title}</h1>"));
    html.push_str(RULE);

    html.push_str("<table width=\"100%\" cellspacing=\"0\" cellpadding=\"5\" align=\"center\">");
    html.push_str("<tr>");
    for (align, heading) in [
        ("left", "Filename"),
        ("right", "Size"),
        ("right", "Last Modified"),
    ] {
        html.push_str(&format!(
            "<td align=\"{align}\"><font size=\"+1\"><strong>{heading}</strong></font></td>"
        ));
    }
    html.push_str("</tr>");

    if let Some(parent) = &listing.parent {
        write_row(&mut html, parent, false, config);
    }
    let mut shade = true;
    for entry in listing.directories.iter().chain(listing.files.iter()) {
        write_row(&mut html, entry, shade, config);
        shade = !shade;
    }

    html.push_str("</table>");
    html.push_str(RULE);
    html.push_str(&format!("<h3>{}</h3>", config.server_info));
    html.push_str("</body></html>");
    html
}

fn write_row(html: &mut String, entry: &Entry, shade: bool, config: &WriterConfig) {
    html.push_str("<tr");
    if shade {
        html.push_str(&format!(" bgcolor=\"{SHADE}\""));
    }
    html.push('>');
    html.push_str(&format!(
        "<td align=\"left\">&nbsp;&nbsp;<a href=\"{}\"><tt>{}</tt></a></td>",
        attribute(&entry.url, config),
        text(&entry.name, config)
    ));
    html.push_str(&format!(
        "<td align=\"right\"><tt>{}</tt></td>",
        render_size(entry.size)
    ));
    html.push_str(&format!(
        "<td align=\"right\"><tt>{}</tt></td>",
        format_rfc1123(entry.last_modified)
    ));
    html.push_str("</tr>");
}

fn text<'a>(raw: &'a str, config: &WriterConfig) -> Cow<'a, str> {
    if config.escape_html {
        encode_text(raw)
    } else {
        Cow::Borrowed(raw)
    }
}

fn attribute<'a>(raw: &'a str, config: &WriterConfig) -> Cow<'a, str> {
    if config.escape_html {
        encode_double_quoted_attribute(raw)
    } else {
        Cow::Borrowed(raw)
    }
}
