//! Defines the routed views of the app.

use crate::components::views::{EpisodeView, HomeView};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        HomeView {},
        #[route("/episodes/:slug")]
        EpisodeView { slug: String },
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::HomeView {} => "Home",
        AppView::EpisodeView { .. } => "Episode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_route_round_trips_slug() {
        let view = AppView::EpisodeView {
            slug: "remote-work".to_string(),
        };
        assert_eq!(view.to_string(), "/episodes/remote-work");
        assert_eq!("/episodes/remote-work".parse::<AppView>().ok(), Some(view));
        assert_eq!(view_label(&AppView::HomeView {}), "Home");
    }
}
