//! Server-side HTML for the form page

use crate::client::PredictionOutcome;
use crate::form::{field_names, FormError, PredictForm, FIELD_LABELS};
use iris_core::Label;

/// Message shown above the form after a submit
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn from_outcome(outcome: &PredictionOutcome) -> Self {
        match outcome {
            PredictionOutcome::Success(labels) => {
                Banner::Success(format!("Predicted Iris Species: {}", describe(labels)))
            }
            PredictionOutcome::HttpError(status) => {
                Banner::Error(format!("Error: {}", status.as_u16()))
            }
            PredictionOutcome::Transport(reason) => {
                Banner::Error(format!("Could not connect to the API: {}", reason))
            }
        }
    }

    pub fn from_form_error(err: &FormError) -> Self {
        Banner::Error(err.to_string())
    }

    fn css_class(&self) -> &'static str {
        match self {
            Banner::Success(_) => "banner success",
            Banner::Error(_) => "banner error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Error(text) => text,
        }
    }
}

fn describe(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "none".to_string();
    }
    labels
        .iter()
        .map(Label::species)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full page: title, optional banner, form echoing `form`
pub fn render_page(form: &PredictForm, banner: Option<&Banner>) -> String {
    let mut fields = String::new();
    for ((name, label), value) in field_names()
        .iter()
        .zip(FIELD_LABELS.iter())
        .zip(form.values())
    {
        fields.push_str(&format!(
            r#"      <label for="{name}">{label}</label>
      <input type="number" id="{name}" name="{name}" min="0" step="0.1" value="{value}" required>
"#,
            name = name,
            label = label,
            value = escape_html(value),
        ));
    }

    let banner = match banner {
        Some(banner) => format!(
            "    <div class=\"{}\" role=\"status\">{}</div>\n",
            banner.css_class(),
            escape_html(banner.text())
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Iris Flower Classifier</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <main>
    <h1>Iris Flower Classifier</h1>
{banner}    <form method="post" action="/">
{fields}      <button type="submit">Predict</button>
    </form>
  </main>
</body>
</html>
"#,
        banner = banner,
        fields = fields,
    )
}

/// Escape text for HTML element and attribute content
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
