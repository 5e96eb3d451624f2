use crate::types::Role;
use crate::ui::use_portal;
use dioxus::prelude::*;

#[component]
pub fn LoginView() -> Element {
    let portal = use_portal();
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);

    let mut submit = move || {
        let entered = email();
        portal.apply(|app| app.login(&entered, role()));
        if portal.app.read().state().current_user.is_some() {
            email.set(String::new());
        }
    };

    rsx! {
        div { class: "login-card stack",
            h2 { "Stuhealth & Wellness Login" }
            input {
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |ev| email.set(ev.value()),
            }
            select {
                value: role().as_str(),
                onchange: move |ev| {
                    role.set(if ev.value() == "admin" { Role::Admin } else { Role::Student });
                },
                option { value: "student", "Student" }
                option { value: "admin", "Admin" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: email().trim().is_empty(),
                onclick: move |_| submit(),
                "Login"
            }
        }
    }
}
