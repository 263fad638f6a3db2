// File: src/dom.rs
// Purpose: Handles to the rendered payment form elements

use payform_core::{Field, Snapshot, ValidationResult, PAY_BUTTON_ID};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlInputElement};

fn element(container: &Element, id: &str) -> Result<Element, JsValue> {
    container
        .query_selector(&format!("#{}", id))?
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

fn cast<T: JsCast>(el: Element, id: &str, kind: &str) -> Result<T, JsValue> {
    el.dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an {}", id, kind)))
}

/// The inputs, error placeholders and submit button of a mounted form
#[derive(Debug, Clone)]
pub struct FormElements {
    inputs: Vec<(Field, HtmlInputElement)>,
    errors: Vec<(Field, Element)>,
    button: HtmlButtonElement,
}

impl FormElements {
    /// Looks every element up by its fixed id, inside `container` only
    pub fn bind(container: &Element) -> Result<Self, JsValue> {
        let mut inputs = Vec::with_capacity(Field::ALL.len());
        let mut errors = Vec::with_capacity(Field::ALL.len());

        for field in Field::ALL {
            let input: HtmlInputElement = cast(element(container, field.id())?, field.id(), "input")?;
            inputs.push((field, input));
            errors.push((field, element(container, field.error_id())?));
        }

        let button: HtmlButtonElement =
            cast(element(container, PAY_BUTTON_ID)?, PAY_BUTTON_ID, "button")?;

        Ok(Self {
            inputs,
            errors,
            button,
        })
    }

    pub fn input(&self, field: Field) -> Option<&HtmlInputElement> {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input)
    }

    pub fn inputs(&self) -> impl Iterator<Item = (Field, &HtmlInputElement)> {
        self.inputs.iter().map(|(field, input)| (*field, input))
    }

    /// Reads the four input values
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::read_with(|field| self.input(field).map(|i| i.value()).unwrap_or_default())
    }

    /// Writes messages into the placeholders and toggles the submit button
    pub fn apply(&self, result: &ValidationResult) {
        for (field, placeholder) in &self.errors {
            placeholder.set_text_content(Some(result.message(*field)));
        }
        self.button.set_disabled(result.submit_disabled());
    }
}
