use dioxus::prelude::*;
use dioxus::router::router;

use crate::{genres::GenreSelection, Route};

pub const SELECTED_LIST_ID: &str = "selectedGenresList";

/// Destination page: one list item per genre found in the query string.
///
/// The list is rebuilt from the location on every load, so two loads of the
/// same URL render the same items and never see each other's state.
#[component]
pub fn SelectedGenres(selection: GenreSelection) -> Element {
    // `selection` comes from a query the router has already decoded once;
    // the raw location keeps escaped `&`, `+` and `%` intact.
    let genres = GenreSelection::from_location(&router().full_route_string()).unwrap_or(selection);
    rsx! {
        div {
            class: "content",
            h2 { "Selected genres" }
            ul {
                id: SELECTED_LIST_ID,
                for genre in genres.iter() {
                    li { "{genre}" }
                }
            }
            Link { to: Route::GenreForm {}, "Choose again" }
        }
    }
}
