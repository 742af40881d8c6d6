use dioxus::prelude::*;

pub const OVERLAY_ID: &str = "loadingOverlay";

#[component]
pub fn LoadingOverlay(visible: bool) -> Element {
    let display = if visible { "block" } else { "none" };
    rsx! {
        div {
            id: OVERLAY_ID,
            class: "loading-overlay",
            style: "display: {display};",
            div { class: "loading-message", "Loading..." }
        }
    }
}
