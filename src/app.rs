//! Root component: flash banner, genre filter and the movie grid.

use crate::catalog;
use crate::components::flash::Flash;
use crate::components::genre_filter::GenreFilter;
use crate::components::movie_card::MovieCard;
use crate::components::rating_panel::RatingPanel;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let selected = use_state(Vec::<AttrValue>::new);

    use_effect_with((), |()| {
        crate::dom::set_document_title("Cinerate");
        || {}
    });

    let genres: Vec<AttrValue> = catalog::genres().into_iter().map(AttrValue::from).collect();
    let on_filter = {
        let selected = selected.clone();
        Callback::from(move |next: Vec<AttrValue>| selected.set(next))
    };

    let visible = catalog::movies().iter().filter(|movie| {
        selected.is_empty()
            || movie
                .genres
                .iter()
                .any(|g| selected.iter().any(|s| s.as_str() == g.as_str()))
    });

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "Cinerate" }</h1>
                <p class="tagline">{ "Rate what you watched, find what to watch." }</p>
            </header>
            <Flash message="Welcome back! Your watchlist has new picks." severity="info" />
            <GenreFilter genres={genres} selected={(*selected).clone()} on_change={on_filter} />
            <main class="movie-grid">
                { for visible.map(|movie| html! {
                    <MovieCard movie={movie.clone()} key={movie.id.to_string()}>
                        <RatingPanel movie_id={movie.id} />
                    </MovieCard>
                }) }
            </main>
        </div>
    }
}
