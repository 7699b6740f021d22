//! Flash banner that dismisses itself after a short delay.

use gloo::timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a banner stays on screen before auto-dismissing.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("info"))]
    pub severity: AttrValue,
    #[prop_or(AUTO_DISMISS_MS)]
    pub dismiss_after_ms: u32,
}

#[function_component(Flash)]
pub fn flash(p: &Props) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        let delay = p.dismiss_after_ms;
        use_effect_with((), move |()| {
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                // The banner may already be gone when the timer fires.
                if !guard.get() {
                    visible.set(false);
                }
            });
            move || cancelled.set(true)
        });
    }

    if !*visible {
        return Html::default();
    }

    let on_close = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div class={classes!("alert", format!("alert-{}", p.severity))} role="status">
            <span>{ p.message.clone() }</span>
            <button class="alert-close" aria-label="Dismiss" onclick={on_close}>{ "✕" }</button>
        </div>
    }
}
