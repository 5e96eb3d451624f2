use crate::state::DEFAULT_RESOURCE_CATEGORY;
use crate::types::Section;
use crate::ui::use_portal;
use crate::views::shared::{ArticleList, DashboardHeader, ResourceList, SectionTabs};
use dioxus::prelude::*;

const ADMIN_SECTIONS: [Section; 5] = [
    Section::Home,
    Section::Sessions,
    Section::Resources,
    Section::Articles,
    Section::Support,
];

const RESOURCE_CATEGORIES: &[&str] = &[DEFAULT_RESOURCE_CATEGORY, "Mental Health", "Fitness", "Nutrition"];

#[component]
pub fn AdminDashboard(identity: String, on_logout: EventHandler) -> Element {
    let portal = use_portal();
    let (section, resources, articles) = {
        let app = portal.app.read();
        let state = app.state();
        (state.section, state.resources.clone(), state.articles.clone())
    };

    let body = match section {
        Section::Sessions => rsx! { ProgramAdmin {} },
        Section::Resources => rsx! {
            ResourceForm {}
            ResourceList { resources }
        },
        Section::Articles => rsx! {
            ArticleForm {}
            ArticleList { articles }
        },
        Section::Support => rsx! { SupportQueue {} },
        Section::Home | Section::Login => rsx! {
            h3 { "Latest resources" }
            ResourceList { resources }
        },
    };

    rsx! {
        div { class: "main-container",
            DashboardHeader { title: "Admin Dashboard", identity, on_logout }
            SectionTabs { sections: ADMIN_SECTIONS.to_vec() }
            {body}
        }
    }
}

#[component]
fn ProgramAdmin() -> Element {
    let portal = use_portal();
    let programs = portal.app.read().state().programs.clone();
    let mut name = use_signal(String::new);
    let mut start = use_signal(String::new);
    let mut description = use_signal(String::new);

    let submit = move |_| {
        let outcome = portal.apply(|app| app.add_program(&name(), &start(), &description()));
        if outcome.reset_form {
            name.set(String::new());
            start.set(String::new());
            description.set(String::new());
        }
    };

    rsx! {
        div { class: "card stack",
            h3 { "Add program" }
            input { placeholder: "Program name", value: "{name}", oninput: move |ev| name.set(ev.value()) }
            input { r#type: "date", value: "{start}", oninput: move |ev| start.set(ev.value()) }
            textarea { placeholder: "Description", value: "{description}", oninput: move |ev| description.set(ev.value()) }
            button { class: "btn btn-primary", r#type: "button", onclick: submit, "Add program" }
        }
        for (i, program) in programs.iter().enumerate() {
            div { key: "{i}", class: "card",
                h4 { "{program.name}" }
                p { class: "text-muted", "Starts {program.start}" }
                p { "{program.description}" }
            }
        }
    }
}

#[component]
fn ResourceForm() -> Element {
    let portal = use_portal();
    let mut title = use_signal(String::new);
    let mut category = use_signal(|| DEFAULT_RESOURCE_CATEGORY.to_string());
    let mut description = use_signal(String::new);

    let submit = move |_| {
        let outcome = portal.apply(|app| app.add_resource(&title(), &category(), &description()));
        if outcome.reset_form {
            title.set(String::new());
            category.set(DEFAULT_RESOURCE_CATEGORY.to_string());
            description.set(String::new());
        }
    };

    rsx! {
        div { class: "card stack",
            h3 { "Add resource" }
            input { placeholder: "Title", value: "{title}", oninput: move |ev| title.set(ev.value()) }
            select {
                value: "{category}",
                onchange: move |ev| category.set(ev.value()),
                for option_name in RESOURCE_CATEGORIES {
                    option { key: "{option_name}", value: "{option_name}", "{option_name}" }
                }
            }
            textarea { placeholder: "Description", value: "{description}", oninput: move |ev| description.set(ev.value()) }
            button { class: "btn btn-primary", r#type: "button", onclick: submit, "Add resource" }
        }
    }
}

#[component]
fn ArticleForm() -> Element {
    let portal = use_portal();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let submit = move |_| {
        let outcome = portal.apply(|app| app.add_article(&title(), &content()));
        if outcome.reset_form {
            title.set(String::new());
            content.set(String::new());
        }
    };

    rsx! {
        div { class: "card stack",
            h3 { "Write article" }
            input { placeholder: "Title", value: "{title}", oninput: move |ev| title.set(ev.value()) }
            textarea { placeholder: "Content", value: "{content}", oninput: move |ev| content.set(ev.value()) }
            button { class: "btn btn-primary", r#type: "button", onclick: submit, "Publish" }
        }
    }
}

#[component]
fn SupportQueue() -> Element {
    let portal = use_portal();
    let requests = portal.app.read().state().support_requests.clone();

    rsx! {
        h3 { "Support requests" }
        if requests.is_empty() {
            p { class: "text-muted", "No support requests." }
        }
        for (i, request) in requests.iter().enumerate() {
            div { key: "{i}", class: "card",
                p { "{request.message}" }
                p { class: "text-muted", "{request.user} · {request.status}" }
            }
        }
    }
}
