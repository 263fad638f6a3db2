//! Form and page markup
//!
//! The same markup is used for server-side rendering and for injecting the
//! form into an empty container from the browser bindings.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::copy::FormCopy;
use crate::field::{Field, APP_CONTAINER_ID, ERROR_CLASS, FORM_ID, PAY_BUTTON_ID};

/// Options for the surrounding HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub stylesheet: Option<String>,
    /// URL of the wasm-bindgen JS glue module
    pub script_url: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Payment".to_string(),
            stylesheet: None,
            script_url: "/pkg/payform_wasm.js".to_string(),
        }
    }
}

/// One (label, input, error placeholder) group
pub fn render_field(field: Field, copy: &FormCopy) -> Markup {
    html! {
        div {
            label for=(field.id()) { (copy.label(field)) }
            input id=(field.id()) name=(field.id()) maxlength=[field.max_length()] required;
            div class=(ERROR_CLASS) id=(field.error_id()) {}
        }
    }
}

/// The payment form with its submit button disabled
pub fn render_form(copy: &FormCopy) -> Markup {
    html! {
        form id=(FORM_ID) {
            @for field in Field::ALL {
                (render_field(field, copy))
            }
            button id=(PAY_BUTTON_ID) type="submit" disabled { (copy.submit_label) }
        }
    }
}

/// Escapes `s` for a single-quoted JS string inside a `<script>` element
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Full document with the form pre-rendered inside the app container.
///
/// The container also carries `copy` as JSON so the browser bindings show
/// the same messages the server was configured with.
pub fn render_page(options: &PageOptions, copy: &FormCopy) -> Markup {
    let copy_json = serde_json::to_string(copy).unwrap_or_default();
    let loader = format!("import init from '{}';\ninit();", js_string(&options.script_url));

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.title) }
                @if let Some(href) = &options.stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                div id=(APP_CONTAINER_ID) data-copy=(copy_json) {
                    (render_form(copy))
                }
                script type="module" { (PreEscaped(loader)) }
            }
        }
    }
}
