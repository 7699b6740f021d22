//! Card for one catalog movie: title, genres, community rating, hover lift.

use crate::catalog::Movie;
use crate::components::star_rating::StarRating;
use crate::components::tooltip::Tooltip;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub movie: Movie,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MovieCard)]
pub fn movie_card(p: &Props) -> Html {
    let raised = use_state(|| false);
    let onmouseenter = {
        let raised = raised.clone();
        Callback::from(move |_: MouseEvent| raised.set(true))
    };
    let onmouseleave = {
        let raised = raised.clone();
        Callback::from(move |_: MouseEvent| raised.set(false))
    };

    let mut class = classes!("movie-card", "card");
    if *raised {
        class.push("movie-card--raised");
    }
    let movie = &p.movie;

    html! {
        <article {class} {onmouseenter} {onmouseleave} data-movie-id={movie.id.to_string()}>
            <header class="card-title">
                <h3>{ movie.title.clone() }</h3>
                <span class="muted">{ movie.year }</span>
            </header>
            <p class="card-genres">{ movie.genres.join(", ") }</p>
            <Tooltip text={format!("Average rating {:.1}", movie.avg_rating)}>
                <StarRating initial={movie.avg_rating} read_only={true} show_text={true} />
            </Tooltip>
            { for p.children.iter() }
        </article>
    }
}
