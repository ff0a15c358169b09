//! Server-rendered upload page.

use crate::config::{Layout, PresentationProfile};
use crate::prediction::Prediction;

/// What the page shows below the upload form.
pub enum Outcome<'a> {
    Empty,
    Result {
        image_src: &'a str,
        prediction: &'a Prediction,
    },
    Error(&'a str),
}

pub fn render(profile: &PresentationProfile, outcome: &Outcome<'_>) -> String {
    let max_width = match profile.layout {
        Layout::Wide => "1100px",
        Layout::Centered => "720px",
    };

    let body = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Result {
            image_src,
            prediction,
        } => render_result(profile, image_src, prediction),
        Outcome::Error(message) => format!(
            "<hr>\n<div class=\"error\">Error during prediction: {}</div>\n",
            escape(message)
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
<style>
body {{ font-family: sans-serif; margin: 0 auto; padding: 2rem; max-width: {max_width}; }}
img.upload {{ width: 100%; height: auto; }}
.error {{ background: #fde8e8; color: #9b1c1c; padding: 1rem; border-radius: 0.5rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/" enctype="multipart/form-data">
<label for="file">Choose an image</label>
<input type="file" id="file" name="file" accept=".jpg,.jpeg,.png,image/jpeg,image/png">
<button type="submit">Classify</button>
</form>
{body}</body>
</html>
"#,
        page_title = escape(&profile.page_title),
        title = escape(&profile.title),
        max_width = max_width,
        body = body,
    )
}

fn render_result(
    profile: &PresentationProfile,
    image_src: &str,
    prediction: &Prediction,
) -> String {
    let mut html = format!(
        "<hr>\n<img class=\"upload\" src=\"{}\" alt=\"uploaded image\">\n<hr>\n<h2>Prediction: {}</h2>\n",
        escape(image_src),
        prediction.label.display(profile.capitalize_label)
    );
    if profile.show_confidence {
        html.push_str(&format!(
            "<p>Confidence Score: {}</p>\n",
            prediction.confidence_percent()
        ));
    }
    html
}

fn escape(text: &str) -> String {
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
