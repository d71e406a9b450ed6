use crate::components::{AppView, Icon};
use crate::config::PlayerSettings;
use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let settings = use_context::<PlayerSettings>();
    let today = settings.format_header_date(Local::now().date_naive());

    rsx! {
        header { class: "app-header",
            Link { to: AppView::HomeView {}, class: "app-header__logo",
                Icon { name: "mic".to_string(), class: "w-6 h-6".to_string() }
                span { "{settings.app_title}" }
            }
            p { class: "app-header__tagline", "{settings.tagline}" }
            span { class: "app-header__date", "{today}" }
        }
    }
}
