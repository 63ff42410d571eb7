use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Valor del control que disparó el evento (input, select o textarea)
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Callback `oninput` que escribe un campo del formulario guardado en `state`
pub fn bind_field<F>(state: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<InputEvent>
where
    F: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut form = (*state).clone();
        apply(&mut form, event_value(&e));
        state.set(form);
    })
}

/// Igual que `bind_field` para `onchange` (selects)
pub fn bind_change<F>(state: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<Event>
where
    F: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: Event| {
        let mut form = (*state).clone();
        apply(&mut form, event_value(&e));
        state.set(form);
    })
}
