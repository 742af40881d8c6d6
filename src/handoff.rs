//! The asynchronous step between submitting the form and leaving the page.
//!
//! The form shows its loading overlay, awaits a [`Handoff`] and only then hides
//! the overlay and navigates. The navigation happens whatever the hand-off returns.

use std::time::Duration;

use async_trait::async_trait;
use dioxus::{logger::tracing::info, prelude::*};

use crate::genres::GenreSelection;

#[async_trait(?Send)]
pub trait Handoff {
    fn get_name(&self) -> &str;

    async fn run(&self, selection: &GenreSelection) -> anyhow::Result<()>;
}

/// Finishes straight away.
#[derive(Debug, Clone, Default)]
pub struct Immediate;

#[async_trait(?Send)]
impl Handoff for Immediate {
    fn get_name(&self) -> &str {
        "immediate"
    }

    async fn run(&self, _selection: &GenreSelection) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Waits a fixed time before finishing, so the overlay is visible in demos.
#[derive(Debug, Clone)]
pub struct Latency {
    pub delay: Duration,
}

impl Latency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait(?Send)]
impl Handoff for Latency {
    fn get_name(&self) -> &str {
        "latency"
    }

    async fn run(&self, _selection: &GenreSelection) -> anyhow::Result<()> {
        sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Handle to whatever tells the user that work is in progress.
pub trait LoadingIndicator {
    fn show(&mut self);
    fn hide(&mut self);
}

impl LoadingIndicator for Signal<bool> {
    fn show(&mut self) {
        self.set(true);
    }

    fn hide(&mut self) {
        self.set(false);
    }
}

/// Runs one submission: show the indicator, await the hand-off, hide the indicator.
///
/// The indicator is hidden on success and on failure alike; the hand-off's
/// result is returned so the caller can report it before navigating.
pub async fn submit_selection(
    handoff: &dyn Handoff,
    selection: &GenreSelection,
    indicator: &mut impl LoadingIndicator,
) -> anyhow::Result<()> {
    info!(
        "submitting {} genre(s) via {} hand-off",
        selection.len(),
        handoff.get_name()
    );
    indicator.show();
    let result = handoff.run(selection).await;
    indicator.hide();
    result
}
