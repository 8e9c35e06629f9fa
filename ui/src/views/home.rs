use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render when the shell's language signal changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    tracing::debug!(lang = %lang, "home render");

    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-upload")} }
                li { {t!("home-feature-views")} }
                li { {t!("home-feature-local")} }
            }
            p { class: "page-home__cta", {t!("home-cta")} }
        }
    }
}
