use crate::types::{Enrollment, Program, Section};
use crate::ui::use_portal;
use crate::views::chat::ChatPanel;
use crate::views::shared::{ArticleList, DashboardHeader, ResourceList, SectionTabs};
use dioxus::prelude::*;

const STUDENT_SECTIONS: [Section; 5] = [
    Section::Home,
    Section::Sessions,
    Section::Resources,
    Section::Articles,
    Section::Support,
];

#[component]
pub fn StudentDashboard(identity: String, on_logout: EventHandler) -> Element {
    let portal = use_portal();
    let (section, programs, joined, resources, articles) = {
        let app = portal.app.read();
        let state = app.state();
        let joined = state
            .current_user
            .as_ref()
            .map(|user| user.joined_programs.clone())
            .unwrap_or_default();
        (
            state.section,
            state.programs.clone(),
            joined,
            state.resources.clone(),
            state.articles.clone(),
        )
    };

    let body = match section {
        Section::Sessions => rsx! {
            ProgramCatalog { programs }
            MyPrograms { joined }
        },
        Section::Resources => rsx! { ResourceList { resources } },
        Section::Articles => rsx! { ArticleList { articles } },
        Section::Support => rsx! {
            SupportForm {}
            ChatPanel {}
        },
        Section::Home | Section::Login => rsx! {
            MyPrograms { joined }
            ChatPanel {}
        },
    };

    rsx! {
        div { class: "main-container",
            DashboardHeader { title: "Student Dashboard", identity, on_logout }
            SectionTabs { sections: STUDENT_SECTIONS.to_vec() }
            {body}
        }
    }
}

#[component]
fn ProgramCatalog(programs: Vec<Program>) -> Element {
    let portal = use_portal();
    rsx! {
        h3 { "Wellness programs" }
        for (i, program) in programs.iter().enumerate() {
            div { key: "{i}", class: "card",
                h4 { "{program.name}" }
                p { class: "text-muted", "Starts {program.start}" }
                p { "{program.description}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        portal.apply(|app| app.join_program(i));
                    },
                    "Join"
                }
            }
        }
    }
}

#[component]
fn MyPrograms(joined: Vec<Enrollment>) -> Element {
    rsx! {
        h3 { "My programs" }
        if joined.is_empty() {
            p { class: "text-muted", "You haven't joined any programs yet." }
        }
        for enrollment in joined.iter().cloned() {
            EnrollmentCard { key: "{enrollment.program.name}", enrollment }
        }
    }
}

#[component]
fn EnrollmentCard(enrollment: Enrollment) -> Element {
    let portal = use_portal();
    let name = enrollment.program.name.clone();

    rsx! {
        div { class: "card",
            h4 { "{enrollment.program.name}" }
            p { class: "text-muted", "Starts {enrollment.program.start}" }
            if enrollment.completed {
                span { class: "badge-done", "Completed" }
            } else {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        portal.apply(|app| app.mark_complete(&name));
                    },
                    "Mark complete"
                }
            }
        }
    }
}

#[component]
fn SupportForm() -> Element {
    let portal = use_portal();
    let mut message = use_signal(String::new);

    let submit = move |_| {
        let outcome = portal.apply(|app| app.add_support_request(&message()));
        if outcome.reset_form {
            message.set(String::new());
        }
    };

    rsx! {
        div { class: "card stack",
            h3 { "Ask for support" }
            textarea {
                placeholder: "How can we help?",
                value: "{message}",
                oninput: move |ev| message.set(ev.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: message().trim().is_empty(),
                onclick: submit,
                "Submit request"
            }
        }
    }
}
