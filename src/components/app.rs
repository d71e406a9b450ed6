use crate::components::{use_player_provider, view_label, AppView, Header, Player};
use crate::config::PlayerSettings;
use dioxus::prelude::*;
use tracing::info;

/// Page shell: header and routed page beside the persistent player bar.
#[component]
pub fn AppShell() -> Element {
    let settings = use_context_provider(PlayerSettings::load);
    let _player = use_player_provider(&settings);
    let view = use_route::<AppView>();

    use_hook(|| info!(title = %settings.app_title, "player shell mounted"));

    rsx! {
        document::Title { "{settings.app_title} | {view_label(&view)}" }

        div { class: "app-wrapper",
            main { class: "app-main",
                Header {}
                div { class: "page-shell", Outlet::<AppView> {} }
            }
            Player {}
        }
    }
}
