// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlHeadElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener <head>
pub fn head() -> Option<HtmlHeadElement> {
    document()?.head()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Vaciar un elemento (elimina todos los hijos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar/ocultar con la clase `hidden`
pub fn set_hidden(element: &Element, hidden: bool) -> Result<(), JsValue> {
    if hidden {
        element.class_list().add_1("hidden")
    } else {
        element.class_list().remove_1("hidden")
    }
}

/// Habilitar/deshabilitar (atributo `disabled`)
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "true")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Idioma del navegador (`navigator.language`)
pub fn navigator_language() -> Option<String> {
    window()?.navigator().language()
}
