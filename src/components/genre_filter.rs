//! Toggle-button genre filter.
//!
//! Filtering happens entirely client-side against the embedded catalog; no
//! query leaves the page.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub genres: Vec<AttrValue>,
    #[prop_or_default]
    pub selected: Vec<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<Vec<AttrValue>>,
}

#[function_component(GenreFilter)]
pub fn genre_filter(p: &Props) -> Html {
    let state = use_state(|| p.selected.clone());
    {
        let state = state.clone();
        let selected = p.selected.clone();
        use_effect_with(selected, move |sel| {
            state.set(sel.clone());
            || {}
        });
    }
    let on_change = p.on_change.clone();

    html! {
        <div class="genre-filter" role="group" aria-label="Genres">
            { for p.genres.iter().map(|genre| {
                let value = genre.clone();
                let active = state.contains(&value);
                let toggle = {
                    let state = state.clone();
                    let on_change = on_change.clone();
                    let value = value.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*state).clone();
                        if let Some(idx) = next.iter().position(|v| v == &value) {
                            next.remove(idx);
                        } else {
                            next.push(value.clone());
                        }
                        log::debug!("genre filter now {next:?}");
                        state.set(next.clone());
                        on_change.emit(next);
                    })
                };
                let mut class = classes!("genre-btn");
                if active {
                    class.push("genre-btn--active");
                }
                html! {
                    <button {class} aria-pressed={active.to_string()} onclick={toggle}>
                        { genre.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
