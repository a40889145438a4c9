//! HTML listing page.

use std::fmt::Write;

use crate::country::Country;
use crate::query::QueryOptions;

/// Render the country listing as a standalone HTML page.
pub fn render_listing(countries: &[Country], options: &QueryOptions) -> String {
    let mut html = String::with_capacity(512 + countries.len() * 160);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n  <title>Countries</title>\n</head>\n<body>\n");
    html.push_str("  <h1>Countries</h1>\n");
    let _ = writeln!(html, "  <p class=\"summary\">{}</p>", summary(countries.len(), options));

    if countries.is_empty() {
        html.push_str("  <p class=\"empty\">No countries to show.</p>\n");
    } else {
        html.push_str("  <table>\n    <thead>\n      <tr>");
        html.push_str("<th>ID</th><th>Name</th><th>Alpha-2</th><th>Alpha-3</th><th>Visited</th>");
        html.push_str("</tr>\n    </thead>\n    <tbody>\n");
        for country in countries {
            let _ = writeln!(
                html,
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                country.id,
                escape(&country.name),
                escape(&country.alpha2_code),
                escape(&country.alpha3_code),
                if country.visited { "Yes" } else { "No" },
            );
        }
        html.push_str("    </tbody>\n  </table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn summary(count: usize, options: &QueryOptions) -> String {
    let mut parts = vec![format!("Showing {} {}", count, if count == 1 { "country" } else { "countries" })];
    if options.sort {
        parts.push("sorted by name".to_string());
    }
    match options.visited {
        Some(true) => parts.push("visited only".to_string()),
        Some(false) => parts.push("not yet visited".to_string()),
        None => {}
    }
    if let Some(limit) = options.limit {
        parts.push(format!("at most {}", limit));
    }
    parts.join(", ")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
