// ============================================================================
// EVENT HANDLING - Helpers para registrar listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos de una vista: cuando el loader reemplaza el HTML del
//   contenedor, el navegador limpia los listeners asociados. `forget()` es seguro.
// - Listeners globales (window/document): registrar UNA SOLA VEZ en el arranque.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

/// Listener genérico sobre cualquier `EventTarget`
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click sobre un elemento
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "click", handler)
}

/// Change sobre un elemento (selects, radios, delegación)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "change", handler)
}

/// Submit de un form; el `preventDefault` ya viene hecho
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(form, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// Listener sobre `window` (hashchange, eventos del tour). Registrar una sola vez.
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    on_event(&win, event_type, handler)
}

/// Elemento del evento
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// ¿El target del evento coincide con `selector`?
pub fn target_matches(event: &Event, selector: &str) -> bool {
    event_target_element(event)
        .and_then(|el| el.matches(selector).ok())
        .unwrap_or(false)
}

/// Ancestro más cercano del target que coincide con `selector` (delegación)
pub fn closest_from_target(event: &Event, selector: &str) -> Option<Element> {
    event_target_element(event)?.closest(selector).ok()?
}

/// `data-<name>` del ancestro `selector`, parseado como id numérico
pub fn closest_data_id(event: &Event, selector: &str, data_attr: &str) -> Option<i64> {
    closest_from_target(event, selector)?
        .get_attribute(data_attr)?
        .parse()
        .ok()
}
