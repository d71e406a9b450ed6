use crate::api::catalog;
use crate::api::models::format_duration;
use crate::components::{use_player, AppView, Icon};
use dioxus::prelude::*;

#[component]
pub fn EpisodeView(slug: String) -> Element {
    let player = use_player();
    let Some(episode) = catalog::find_by_slug(catalog::episodes(), &slug) else {
        return rsx! {
            div { class: "page-empty",
                p { "Episode not found" }
                Link { to: AppView::HomeView {}, "Back to all episodes" }
            }
        };
    };
    let published = episode
        .published_at
        .map(|at| at.format("%-d %b %y").to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "episode",
            div { class: "episode__thumbnail",
                Link { to: AppView::HomeView {}, class: "episode__back",
                    Icon { name: "arrow-left".to_string(), class: "w-5 h-5".to_string() }
                }
                img {
                    src: "{episode.thumbnail}",
                    alt: "{episode.title}",
                    width: "700",
                    height: "160",
                }
                button {
                    r#type: "button",
                    class: "episode-play",
                    onclick: move |_| player.play(episode.clone()),
                    Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                }
            }

            header { class: "episode__header",
                h1 { "{episode.title}" }
                span { "{episode.members}" }
                span { "{published}" }
                span { "{format_duration(episode.duration)}" }
            }

            div { class: "episode__description", "{episode.description}" }
        }
    }
}
