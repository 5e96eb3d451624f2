use crate::types::MessageKind;
use crate::ui::use_portal;
use dioxus::events::Key;
use dioxus::prelude::*;

fn bubble_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::User => "bubble user",
        MessageKind::Bot => "bubble bot",
    }
}

#[component]
pub fn ChatPanel() -> Element {
    let portal = use_portal();
    let mut input = use_signal(String::new);
    let messages = portal.app.read().state().chat_messages.clone();

    let mut send = move || {
        let text = input();
        if text.trim().is_empty() {
            return;
        }
        input.set(String::new());
        portal.send_chat(text);
    };

    rsx! {
        div { class: "card",
            h3 { "Wellness chat" }
            div { class: "chat-list",
                if messages.is_empty() {
                    p { class: "text-muted", "Ask about stress, sleep or anxiety." }
                }
                for (i, msg) in messages.iter().enumerate() {
                    div { key: "{i}", class: bubble_class(msg.kind), "{msg.text}" }
                }
            }
            div { class: "composer",
                input {
                    placeholder: "Type a message",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            send();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: input().trim().is_empty(),
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}
