use crate::api::catalog;
use crate::api::models::{format_duration, Episode};
use crate::components::{use_player, AppView, Icon};
use dioxus::prelude::*;

const LATEST_COUNT: usize = 2;

fn published_label(episode: &Episode) -> String {
    episode
        .published_at
        .map(|at| at.format("%-d %b %y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn HomeView() -> Element {
    let episodes = catalog::episodes();
    let (latest, rest) = episodes.split_at(LATEST_COUNT.min(episodes.len()));

    if episodes.is_empty() {
        return rsx! {
            div { class: "page-empty",
                Icon { name: "music".to_string(), class: "w-16 h-16".to_string() }
                p { "No episodes available right now" }
            }
        };
    }

    rsx! {
        div { class: "home",
            section { class: "home__latest",
                h2 { "Latest releases" }
                ul {
                    for (idx , episode) in latest.iter().enumerate() {
                        LatestEpisodeCard { key: "{episode.id}", index: idx }
                    }
                }
            }

            section { class: "home__all",
                h2 { "All episodes" }
                table { "cellspacing": "0",
                    thead {
                        tr {
                            th {}
                            th { "Podcast" }
                            th { "Members" }
                            th { "Date" }
                            th { "Duration" }
                            th {}
                        }
                    }
                    tbody {
                        for (offset , episode) in rest.iter().enumerate() {
                            EpisodeRow { key: "{episode.id}", index: LATEST_COUNT + offset }
                        }
                    }
                }
            }
        }
    }
}

/// Card for one of the newest episodes; `index` points into the catalog.
#[component]
fn LatestEpisodeCard(index: usize) -> Element {
    let player = use_player();
    let episodes = catalog::episodes();
    let Some(episode) = episodes.get(index) else {
        return rsx! {};
    };

    rsx! {
        li { class: "episode-card",
            img {
                src: "{episode.thumbnail}",
                alt: "{episode.title}",
                width: "192",
                height: "192",
            }
            div { class: "episode-card__details",
                Link { to: AppView::EpisodeView { slug: episode.slug() }, "{episode.title}" }
                p { "{episode.members}" }
                span { "{published_label(episode)}" }
                span { "{format_duration(episode.duration)}" }
            }
            button {
                r#type: "button",
                class: "episode-play",
                onclick: move |_| player.play_list(catalog::episodes().to_vec(), index),
                Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

#[component]
fn EpisodeRow(index: usize) -> Element {
    let player = use_player();
    let episodes = catalog::episodes();
    let Some(episode) = episodes.get(index) else {
        return rsx! {};
    };

    rsx! {
        tr {
            td { class: "episode-row__thumb",
                img {
                    src: "{episode.thumbnail}",
                    alt: "{episode.title}",
                    width: "120",
                    height: "120",
                }
            }
            td {
                Link { to: AppView::EpisodeView { slug: episode.slug() }, "{episode.title}" }
            }
            td { "{episode.members}" }
            td { class: "episode-row__date", "{published_label(episode)}" }
            td { "{format_duration(episode.duration)}" }
            td {
                button {
                    r#type: "button",
                    class: "episode-play",
                    onclick: move |_| player.play_list(catalog::episodes().to_vec(), index),
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}
