//! HTML rendering of a [`PageModel`].

use std::fmt::Write;

use crate::advice::{Outcome, PageModel, LOADED_MESSAGE};

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem;color:#222}\
.banner{padding:.75rem 1rem;border-radius:.4rem;margin:1rem 0}\
.ok{background:#e6f4ea}.warn{background:#fff4e5}.err{background:#fdecea}\
.rec{border-left:4px solid #7aa6d8;padding:.25rem .75rem;margin:.75rem 0}\
.meta{color:#777;font-size:.85rem}";

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Render the full page
pub fn render_page(model: &PageModel) -> String {
    let title = escape_html(&model.title);
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n\
         <form method=\"post\" action=\"/refresh\"><button type=\"submit\">Refresh weather</button></form>\n"
    );

    match &model.outcome {
        Outcome::FetchFailed { message } => {
            let _ = writeln!(
                html,
                "<div class=\"banner err\" role=\"alert\">{}</div>",
                escape_html(message)
            );
        }
        Outcome::NoConditions { message } => {
            let _ = writeln!(html, "<div class=\"banner ok\">{}</div>", LOADED_MESSAGE);
            let _ = writeln!(
                html,
                "<div class=\"banner warn\">{}</div>",
                escape_html(message)
            );
        }
        Outcome::Conditions {
            conditions,
            recommendations,
        } => {
            let _ = writeln!(html, "<div class=\"banner ok\">{}</div>", LOADED_MESSAGE);

            html.push_str("<h2>Detected skin conditions</h2>\n<ul class=\"conditions\">\n");
            for c in conditions {
                let _ = writeln!(html, "<li><strong>{}</strong></li>", escape_html(&c.label));
            }
            html.push_str("</ul>\n<h2>Recommended ingredients</h2>\n");

            for r in recommendations {
                let _ = writeln!(
                    html,
                    "<div class=\"rec\">\
                     <p><b>Condition:</b> {}</p>\
                     <p><b>Ingredient:</b> {}</p>\
                     <p><b>Effect:</b> {}</p></div>",
                    escape_html(&r.condition),
                    escape_html(&r.ingredient),
                    escape_html(&r.effect)
                );
            }
        }
    }

    let _ = write!(
        html,
        "<p class=\"meta\">Observation slot {} {} KST &middot; loaded {}</p>\n</body>\n</html>\n",
        escape_html(&model.window.base_date),
        escape_html(&model.window.base_time),
        model.fetched_at.format("%Y-%m-%d %H:%M")
    );

    html
}
