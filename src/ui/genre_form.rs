//! Genre selection form.
//!
//! Renders one checkbox per configured genre. Submitting collects the checked
//! values in document order, shows the loading overlay while the configured
//! hand-off runs, then navigates to the display page with the selection in the URL.

use dioxus::{
    logger::tracing::warn,
    prelude::*,
};

use crate::{
    Route,
    config::AppConfig,
    genres::{FORM_FIELD, GenreSelection},
    handoff::submit_selection,
    ui::loading_overlay::LoadingOverlay,
};

#[component]
pub fn GenreForm() -> Element {
    let nav = navigator();
    let config = use_context::<Signal<AppConfig>>();
    let mut checked = use_signal(|| vec![false; config.read().genres.len()]);
    let overlay = use_signal(|| false);

    // Set while a submission is in flight; further submits are ignored.
    let mut busy = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);

        let selection = GenreSelection::from_checked(&config.read().genres, &checked.read());
        let handoff = config.read().handoff.build();
        spawn(async move {
            let (mut overlay, mut busy) = (overlay, busy);
            if let Err(e) = submit_selection(handoff.as_ref(), &selection, &mut overlay).await {
                warn!("Hand-off failed, navigating anyway: {e:?}");
            }
            busy.set(false);
            nav.push(Route::SelectedGenres { selection });
        });
    };

    let options: Vec<(usize, String, String)> = config
        .read()
        .genres
        .iter()
        .enumerate()
        .map(|(i, g)| (i, option_key(i, g), g.clone()))
        .collect();
    let disabled = if busy() { Some(true) } else { None };

    rsx! {
        div {
            class: "content",
            h2 { "Which genres should we read?" }
            form {
                id: "genreForm",
                onsubmit: onsubmit,
                div {
                    class: "genre-options",
                    for (i, key, genre) in options {
                        label {
                            key: "{key}",
                            class: "genre-option",
                            input {
                                r#type: "checkbox",
                                name: FORM_FIELD,
                                value: "{genre}",
                                checked: checked.read().get(i).copied().unwrap_or(false),
                                onchange: move |_| {
                                    checked.with_mut(|c| {
                                        if let Some(v) = c.get_mut(i) {
                                            *v = !*v;
                                        }
                                    });
                                },
                            }
                            "{genre}"
                        }
                    }
                }
                button { r#type: "submit", disabled, "Submit" }
            }
            LoadingOverlay { visible: overlay() }
        }
    }
}

/// Checkbox key; stays unique when the catalogue lists a genre twice.
fn option_key(index: usize, genre: &str) -> String {
    format!("{index}-{genre}")
}
