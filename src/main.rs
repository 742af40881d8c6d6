use dioxus::logger::tracing::Level;

use genre_picker::App;

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}
