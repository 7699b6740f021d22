//! Interactive (or read-only) star rating widget.
//!
//! Two visual modes drive the render: the committed rating while idle, and a
//! simplified all-full preview while a star is hovered. Clicking a star
//! commits that whole-star position and notifies `on_rate`; the widget never
//! waits on whatever the caller does with the value.

use crate::rating::{DEFAULT_MAX_RATING, RatingState, StarFill};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(DEFAULT_MAX_RATING)]
    pub max: u32,
    /// Seed rating; the only way a half step can enter the widget.
    #[prop_or_default]
    pub initial: f32,
    #[prop_or_default]
    pub read_only: bool,
    #[prop_or_default]
    pub show_text: bool,
    #[prop_or_default]
    pub on_rate: Callback<u32>,
}

#[function_component(StarRating)]
pub fn star_rating(p: &Props) -> Html {
    let state = use_state(|| RatingState::new(p.initial, p.max));
    let hover = use_state(|| None::<u32>);

    let fills: Vec<StarFill> = match *hover {
        Some(position) => state.preview_fills(position).collect(),
        None => state.fills().collect(),
    };
    let max = state.max();

    let stars = fills.into_iter().zip(1..=max).map(|(fill, position)| {
        if p.read_only {
            return html! { <span class={fill.class()} aria-hidden="true"></span> };
        }
        let onmouseenter = {
            let hover = hover.clone();
            Callback::from(move |_: MouseEvent| hover.set(Some(position)))
        };
        let onmouseleave = {
            let hover = hover.clone();
            Callback::from(move |_: MouseEvent| hover.set(None))
        };
        let onclick = {
            let state = state.clone();
            let on_rate = p.on_rate.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = *state;
                next.set(position);
                state.set(next);
                on_rate.emit(position);
            })
        };
        html! {
            <button
                type="button"
                class={fill.class()}
                aria-label={format!("Rate {position} of {max}")}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            />
        }
    });

    let aria = if state.get() > 0.0 {
        format!("Rated {} of {max}", state.display_value())
    } else {
        "Not yet rated".to_string()
    };
    let role = if p.read_only { "img" } else { "radiogroup" };

    html! {
        <div class="star-rating" role={role} aria-label={aria}>
            { for stars }
            { if p.show_text {
                html! { <span class="rating-text">{ state.label() }</span> }
            } else {
                Html::default()
            } }
        </div>
    }
}
