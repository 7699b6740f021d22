pub mod flash;
pub mod genre_filter;
pub mod movie_card;
pub mod rating_panel;
pub mod star_rating;
pub mod tooltip;
