use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::FLASH_DURATION_MS;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashMessageProps {
    pub flash: Option<Flash>,
    pub on_dismiss: Callback<()>,
}

/// Mensaje temporal; se cierra solo tras FLASH_DURATION_MS
#[function_component(FlashMessage)]
pub fn flash_message(props: &FlashMessageProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.flash.clone(), move |flash| {
            let timeout = flash
                .as_ref()
                .map(|_| Timeout::new(FLASH_DURATION_MS, move || on_dismiss.emit(())));
            // Drop del Timeout = cancelado
            move || drop(timeout)
        });
    }

    match &props.flash {
        Some(flash) => {
            let class = match flash.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            html! {
                <div class={class} role="status" onclick={props.on_dismiss.reform(|_| ())}>
                    {flash.text.clone()}
                </div>
            }
        }
        None => html! {},
    }
}
