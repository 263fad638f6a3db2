// File: src/mount.rs
// Purpose: Mount the form into its container and keep it validated on input

use std::cell::Cell;
use std::rc::Rc;

use payform_core::{
    format_input, render_form, Field, FormCopy, FormState, Validator, COPY_ATTR, PAY_BUTTON_ID,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::FormElements;
use crate::{info_log, warn_log};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Reacts to input events: reformat, re-validate, update the DOM
pub struct FormController {
    elements: FormElements,
    validator: Validator,
    state: Cell<FormState>,
}

impl FormController {
    pub fn new(elements: FormElements, copy: &FormCopy) -> Self {
        Self {
            elements,
            validator: Validator::new(copy),
            state: Cell::new(FormState::Invalid),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.get()
    }

    /// Handles an input event on `field`
    pub fn on_input(&self, field: Field) {
        if let Some(input) = self.elements.input(field) {
            let value = input.value();
            let formatted = format_input(field, &value);
            if formatted != value {
                input.set_value(&formatted);
            }
        }
        self.check_all_fields();
    }

    /// Validates the current snapshot and writes the result to the DOM
    pub fn check_all_fields(&self) {
        let result = self.validator.validate(&self.elements.snapshot());
        self.elements.apply(&result);
        self.state.set(self.state.get().transition(&result));
    }
}

fn attach_listeners(controller: &Rc<FormController>) -> Result<(), JsValue> {
    for (field, input) in controller.elements.inputs() {
        let controller = Rc::clone(controller);
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            controller.on_input(field);
        });

        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;

        // Listeners live as long as the page
        closure.forget();
    }
    Ok(())
}

/// Renders the form into `container` unless it is already there
/// (server-rendered), then wires the input listeners.
pub fn mount_into(container: &Element, copy: &FormCopy) -> Result<Rc<FormController>, JsValue> {
    let selector = format!("#{}", PAY_BUTTON_ID);
    if container.query_selector(&selector)?.is_none() {
        container.set_inner_html(&render_form(copy).into_string());
        info_log!("payform: rendered form into #{}", container.id());
    } else {
        info_log!("payform: attaching to server-rendered form in #{}", container.id());
    }

    let controller = Rc::new(FormController::new(FormElements::bind(container)?, copy));
    attach_listeners(&controller)?;
    Ok(controller)
}

/// Copy embedded in the container by the server, or the defaults
pub fn container_copy(container: &Element) -> FormCopy {
    let Some(raw) = container.get_attribute(COPY_ATTR) else {
        return FormCopy::default();
    };

    match serde_json::from_str(&raw) {
        Ok(copy) => copy,
        Err(e) => {
            warn_log!("payform: ignoring malformed {}: {}", COPY_ATTR, e);
            FormCopy::default()
        }
    }
}

fn container(document: &Document, container_id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing container #{}", container_id)))
}

/// Mounts the form into the element with id `container_id`
pub fn mount(container_id: &str, copy: &FormCopy) -> Result<Rc<FormController>, JsValue> {
    let document = document()?;
    let container = container(&document, container_id)?;
    mount_into(&container, copy)
}

/// Mounts into `container_id` with the copy the container carries
pub fn mount_by_id(container_id: &str) -> Result<Rc<FormController>, JsValue> {
    let document = document()?;
    let container = container(&document, container_id)?;
    mount_into(&container, &container_copy(&container))
}

/// Mounts into `container_id` if the page has such an element
pub fn mount_if_present(container_id: &str) -> Result<(), JsValue> {
    let document = document()?;
    if document.get_element_by_id(container_id).is_none() {
        warn_log!("payform: no #{} container, skipping mount", container_id);
        return Ok(());
    }
    mount_by_id(container_id).map(|_| ())
}
