use crate::config::AppConfig;
use crate::controller::{Outcome, WellnessApp};
use crate::state::Dashboard;
use crate::store::platform_store;
use crate::types::Section;
use crate::views::{AdminDashboard, LoginView, StudentDashboard};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const PORTAL_CSS: &str = include_str!("../assets/portal.css");

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Set the configuration `App` starts from. Only the first call wins.
pub fn install_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("portal config already installed");
    }
}

fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_else(AppConfig::from_env)
}

/// Shared handles every view reaches through context.
#[derive(Clone, Copy)]
pub struct Portal {
    pub app: Signal<WellnessApp>,
    pub notice: Signal<Option<String>>,
}

impl Portal {
    /// Run a controller call and surface its latest notice.
    pub fn apply(mut self, f: impl FnOnce(&mut WellnessApp) -> Outcome) -> Outcome {
        let outcome = {
            let mut guard = self.app.write();
            f(&mut *guard)
        };
        if let Some(latest) = outcome.notices.last() {
            self.notice.set(Some(latest.to_string()));
        }
        outcome
    }

    pub fn navigate(self, section: Section) {
        self.apply(|app| app.navigate(section));
    }

    pub fn logout(self) {
        self.apply(|app| app.logout());
    }

    /// Send a chat message; the bot turn lands after the configured delay.
    ///
    /// The reply task lives in the root scope, so it outlives the calling
    /// view and still lands after navigation or logout. Cancel the returned
    /// task to drop it.
    pub fn send_chat(self, text: String) -> Option<Task> {
        let mut app = self.app;
        let reply = self.apply(|app| app.send_message(&text)).bot_reply?;
        let delay = app.peek().reply_delay();
        spawn_forever(async move {
            tokio::time::sleep(delay).await;
            app.write().receive_bot_reply(reply);
        })
    }
}

pub fn use_portal() -> Portal {
    use_context::<Portal>()
}

#[component]
pub fn App() -> Element {
    let app = use_signal(|| {
        let config = app_config();
        WellnessApp::load(platform_store(config.data_dir.clone()))
            .with_reply_delay(config.chat_reply_delay)
    });
    let notice = use_signal(|| Option::<String>::None);
    let portal = use_context_provider(|| Portal { app, notice });

    let dashboard = app.read().dashboard();
    let body = match dashboard {
        Dashboard::Login => rsx! { LoginView {} },
        Dashboard::Admin { identity } => rsx! {
            AdminDashboard { identity, on_logout: move |_| portal.logout() }
        },
        Dashboard::Student { identity } => rsx! {
            StudentDashboard { identity, on_logout: move |_| portal.logout() }
        },
    };

    rsx! {
        style { dangerous_inner_html: "{PORTAL_CSS}" }
        NoticeBanner { notice }
        {body}
    }
}

#[component]
fn NoticeBanner(notice: Signal<Option<String>>) -> Element {
    let mut notice = notice;
    let Some(text) = notice() else {
        return rsx! {};
    };
    rsx! {
        div { class: "notice", role: "alert",
            span { "{text}" }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| notice.set(None),
                "OK"
            }
        }
    }
}
