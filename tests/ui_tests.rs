//! Headless front end tests for the delayed chat reply
//!
//! Run with `--features dioxus`.

#![cfg(feature = "dioxus")]

use dioxus::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stuhealth::chat::SLEEP_REPLY;
use stuhealth::types::{ChatMessage, MessageKind, Role, Section};
use stuhealth::ui::Portal;
use stuhealth::{MemoryStore, WellnessApp};

/// Chat messages as of the harness' latest render.
#[derive(Clone, Default)]
struct Transcript(Arc<Mutex<Vec<ChatMessage>>>);

impl PartialEq for Transcript {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Transcript {
    fn snapshot(&self) -> Vec<ChatMessage> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Leave {
    Stay,
    Navigate,
    Logout,
}

#[component]
fn Harness(transcript: Transcript, leave: Leave) -> Element {
    let app = use_signal(|| {
        let mut app = WellnessApp::load(Box::new(MemoryStore::new()))
            .with_reply_delay(Duration::from_millis(50));
        app.login("a@x.com", Role::Student);
        app
    });
    let notice = use_signal(|| Option::<String>::None);
    use_context_provider(|| Portal { app, notice });

    let (section, messages) = {
        let app = app.read();
        (app.state().section, app.state().chat_messages.clone())
    };
    *transcript.0.lock().unwrap() = messages;

    rsx! {
        if section == Section::Home {
            Sender { leave }
        }
    }
}

/// Sends one message from a view that only exists on the home section.
#[component]
fn Sender(leave: Leave) -> Element {
    let portal = use_context::<Portal>();
    use_hook(move || {
        spawn(async move {
            portal.send_chat("I can't sleep".to_string());
            match leave {
                Leave::Stay => {}
                Leave::Navigate => portal.navigate(Section::Resources),
                Leave::Logout => portal.logout(),
            }
        })
    });
    rsx! { p { "chat" } }
}

async fn run_harness(leave: Leave) -> Vec<ChatMessage> {
    let transcript = Transcript::default();
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            transcript: transcript.clone(),
            leave,
        },
    );
    dom.rebuild_in_place();

    let _ = tokio::time::timeout(Duration::from_millis(500), async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate_to_vec();
        }
    })
    .await;

    transcript.snapshot()
}

#[tokio::test]
async fn test_reply_lands_while_view_stays() {
    let messages = run_harness(Leave::Stay).await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].kind, MessageKind::User);
    assert_eq!(messages[1].kind, MessageKind::Bot);
    assert_eq!(messages[1].text, SLEEP_REPLY);
}

#[tokio::test]
async fn test_reply_survives_navigating_away() {
    let messages = run_harness(Leave::Navigate).await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text, SLEEP_REPLY);
}

#[tokio::test]
async fn test_reply_after_logout_lands_in_cleared_chat() {
    let messages = run_harness(Leave::Logout).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].kind, MessageKind::Bot);
    assert_eq!(messages[0].text, SLEEP_REPLY);
}
