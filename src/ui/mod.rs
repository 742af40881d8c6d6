//! Page components for the genre picker.
//!
//! The form page collects checked genres and hands them to the display page
//! through the URL; nothing else is shared between the two.

pub mod genre_form;        // Genre checkboxes and submission (public for routing)
pub mod home;              // Landing page (public for routing)
mod loading_overlay;       // Fixed overlay shown while a submission is pending
pub mod selected_genres;   // Renders the genres decoded from the URL (public for routing)
