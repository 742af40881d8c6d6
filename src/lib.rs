use dioxus::{logger::tracing::warn, prelude::*};

pub mod config;
pub mod genres;
pub mod handoff;
pub mod storage;
mod ui;

use config::{AppConfig, load_or_init};
use genres::GenreSelection;
use storage::get_storage;
use ui::genre_form::GenreForm;
use ui::home::Home;
use ui::selected_genres::SelectedGenres;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| Signal::new(AppConfig::default()));
    let init = use_resource(move || async move {
        let mut config = config;
        match get_storage().await {
            Ok(storage) => config.set(load_or_init(&storage).await),
            Err(e) => warn!("Could not get storage: {e:?}"),
        }
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/select_genres")]
    GenreForm {},
    #[route("/selected_genres_page.html?:..selection")]
    SelectedGenres { selection: GenreSelection },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Home {}, "Go To Home" }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_route_url_carries_the_query_string() {
        let route = Route::SelectedGenres {
            selection: GenreSelection::new(vec!["Action".into(), "Sci-Fi".into()]),
        };
        assert_eq!(
            route.to_string(),
            "/selected_genres_page.html?genre=Action&genre=Sci-Fi"
        );
    }

    #[test]
    fn display_route_parses_genres_from_the_url() {
        let route = Route::from_str("/selected_genres_page.html?genre=Film%20Noir&genre=Horror").unwrap();
        assert_eq!(
            route,
            Route::SelectedGenres {
                selection: GenreSelection::new(vec!["Film Noir".into(), "Horror".into()]),
            }
        );
    }

    #[test]
    fn reserved_characters_survive_navigation_to_the_display_page() {
        let original = GenreSelection::new(vec![
            "Rock & Roll".into(),
            "a+b".into(),
            "%41".into(),
            "x=y".into(),
            "Ärger 日本語".into(),
        ]);
        let url = Route::SelectedGenres { selection: original.clone() }.to_string();
        assert_eq!(
            url,
            "/selected_genres_page.html?genre=Rock%20%26%20Roll&genre=a%2Bb&genre=%2541\
             &genre=x%3Dy&genre=%C3%84rger%20%E6%97%A5%E6%9C%AC%E8%AA%9E"
        );
        assert!(matches!(
            Route::from_str(&url).unwrap(),
            Route::SelectedGenres { .. }
        ));
        assert_eq!(GenreSelection::from_location(&url), Some(original));
    }

    #[test]
    fn form_lives_at_select_genres() {
        assert_eq!(Route::GenreForm {}.to_string(), "/select_genres");
        assert_eq!(Route::from_str("/select_genres").unwrap(), Route::GenreForm {});
    }
}
