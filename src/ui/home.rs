use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "content",
            h1 { "Book Club Genre Picker" }
            p { "Tell us what your group would like to read next." }
            Link { to: Route::GenreForm {}, "Choose genres" }
        }
    }
}
