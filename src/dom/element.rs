// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID o error (para los mount de cada vista)
pub fn require_element(id: &str) -> Result<Element, JsValue> {
    get_element_by_id(id).ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Query selector sobre el documento
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector all → Vec<Element>
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Mostrar/ocultar (los modales usan `style.display`)
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Mostrar/ocultar por ID; los fallos se registran, no se propagan (modales)
pub fn show_by_id(id: &str, visible: bool) {
    match require_element(id) {
        Ok(element) => {
            if let Err(e) = set_visible(&element, visible) {
                log::warn!("⚠️ [DOM] No se pudo cambiar la visibilidad de #{}: {:?}", id, e);
            }
        }
        Err(_) => log::warn!("⚠️ [DOM] Falta #{}", id),
    }
}

/// Valor de un `<input>`, `<select>` o `<textarea>` por ID
pub fn field_value(id: &str) -> Option<String> {
    let element = get_element_by_id(id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

/// Asignar el valor de un `<input>`, `<select>` o `<textarea>` por ID
pub fn set_field_value(id: &str, value: &str) {
    let Some(element) = get_element_by_id(id) else {
        log::warn!("⚠️ [DOM] Campo #{} no encontrado", id);
        return;
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}

/// Valor del radio marcado de un grupo (`input[name=...]:checked`)
pub fn checked_radio_value(name: &str) -> Option<String> {
    query_selector(&format!("input[name=\"{}\"]:checked", name))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Marca el radio `name` con valor `value`
pub fn check_radio(name: &str, value: &str) {
    if let Ok(Some(el)) = query_selector(&format!("input[name=\"{}\"][value=\"{}\"]", name, value)) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_checked(true);
        }
    }
}

/// Reset de un `<form>` por ID
pub fn reset_form(id: &str) {
    if let Some(form) = get_element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok()) {
        form.reset();
    }
}

/// `window.alert`
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Navegar cambiando el hash (dispara `hashchange`)
pub fn set_location_hash(view: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_hash(view)
}

/// Navegar a otra página (login.html, index.html#tasks, ...)
pub fn redirect_to(href: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(href)
}
