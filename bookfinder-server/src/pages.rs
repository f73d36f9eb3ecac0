//! HTML page assembly
//!
//! Pages are small enough that they are built by hand with an escaping
//! helper rather than a template engine, the same way the rest of the
//! output surfaces are assembled.

use bookfinder_core::{ApiConfig, BookRecord, CoverSize};

/// Escape text for safe interpolation into HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Full search page: heading, form, and an optional outcome section
pub fn search_page(query: &str, outcome: Option<&str>) -> String {
    let mut page = String::new();
    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>\u{1F4DA} Book Finder</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2em auto; max-width: 50em; }\n\
         .warning { color: #8a6d3b; } .error { color: #a94442; } .info { color: #31708f; }\n\
         img.cover { display: block; margin: 0.5em 0; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>\u{1F4DA} Book Finder Application</h1>\n",
    );

    page.push_str(&format!(
        "<form action=\"/search\" method=\"get\">\n\
         <label for=\"title\">Enter Book Title:</label>\n\
         <input type=\"text\" id=\"title\" name=\"title\" value=\"{}\" size=\"40\">\n\
         <button type=\"submit\">\u{1F50D} Search</button>\n\
         </form>\n",
        escape_html(query)
    ));

    if let Some(outcome) = outcome {
        page.push_str(outcome);
    }

    page.push_str("</body>\n</html>\n");
    page
}

/// One-line warning / info / error notice
pub fn notice(class: &str, text: &str) -> String {
    format!("<p class=\"{}\">{}</p>\n", class, escape_html(text))
}

/// Result list: heading, author and year lines, optional medium cover,
/// and a divider after each record
pub fn results_list(records: &[BookRecord], config: &ApiConfig) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&record.title)));
        out.push_str(&format!(
            "<p><strong>Author(s):</strong> {}</p>\n",
            escape_html(&record.author_line())
        ));
        out.push_str(&format!(
            "<p><strong>First Published:</strong> {}</p>\n",
            escape_html(&record.year_display())
        ));
        if let Some(cover_id) = record.cover_id {
            let url = config.cover_url(cover_id, CoverSize::Medium);
            out.push_str(&format!(
                "<img class=\"cover\" src=\"{}\" width=\"150\" alt=\"Cover of {}\">\n",
                escape_html(&url),
                escape_html(&record.title)
            ));
        }
        out.push_str("<hr>\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & Jerry's</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; Jerry&#39;s&lt;/b&gt;"
        );
    }

    #[test]
    fn test_form_echoes_query() {
        let page = search_page("Dune", None);
        assert!(page.contains("value=\"Dune\""));
        assert!(page.contains("action=\"/search\""));
    }

    #[test]
    fn test_record_without_cover_has_no_img() {
        let record = BookRecord {
            title: "Plain".to_string(),
            ..Default::default()
        };
        let html = results_list(&[record], &ApiConfig::default());
        assert!(html.contains("<h3>Plain</h3>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn test_record_with_cover_links_medium_image() {
        let record = BookRecord {
            cover_id: Some(12345),
            ..Default::default()
        };
        let html = results_list(&[record], &ApiConfig::default());
        assert!(html.contains("/12345-M.jpg"));
    }
}
