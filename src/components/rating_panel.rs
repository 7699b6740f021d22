//! Interactive rating row for a single movie, plus its transient status line.
//!
//! Submitting the rating anywhere is not wired up; the pick is only logged.
//! The "Rating saved!" confirmation clears itself after a short delay, and a
//! newer pick re-arms the message instead of being clipped by the older timer.

use crate::components::star_rating::StarRating;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Delay before the confirmation message clears.
pub const STATUS_CLEAR_MS: u32 = 3_000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub movie_id: u32,
    /// The user's previous rating for this movie, if any.
    #[prop_or_default]
    pub initial: f32,
}

#[function_component(RatingPanel)]
pub fn rating_panel(p: &Props) -> Html {
    let saved = use_state(|| false);
    // Bumped on every pick and on unmount; stale timers see a mismatch and no-op.
    let epoch = use_mut_ref(|| 0_u32);

    {
        let epoch = epoch.clone();
        use_effect_with((), move |()| {
            move || {
                let mut epoch = epoch.borrow_mut();
                *epoch = epoch.wrapping_add(1);
            }
        });
    }

    let on_rate = {
        let saved = saved.clone();
        let epoch = epoch.clone();
        let movie_id = p.movie_id;
        Callback::from(move |rating: u32| {
            // TODO: submit to the ratings endpoint once one exists.
            log::info!("rated movie {movie_id} with {rating} stars");
            saved.set(true);
            let token = {
                let mut epoch = epoch.borrow_mut();
                *epoch = epoch.wrapping_add(1);
                *epoch
            };
            let saved = saved.clone();
            let epoch = epoch.clone();
            spawn_local(async move {
                TimeoutFuture::new(STATUS_CLEAR_MS).await;
                if *epoch.borrow() == token {
                    saved.set(false);
                }
            });
        })
    };

    html! {
        <div class="rating-panel" data-movie-id={p.movie_id.to_string()}>
            <StarRating initial={p.initial} show_text={true} on_rate={on_rate} />
            { if *saved {
                html! { <span class="rating-status text-success">{ "Rating saved!" }</span> }
            } else {
                Html::default()
            } }
        </div>
    }
}
