use crate::types::{Article, Resource, Section};
use crate::ui::use_portal;
use dioxus::prelude::*;

pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::Login => "Login",
        Section::Home => "Home",
        Section::Sessions => "Sessions",
        Section::Resources => "Resources",
        Section::Articles => "Articles",
        Section::Support => "Support",
    }
}

fn tab_class(is_active: bool) -> &'static str {
    if is_active { "tab active" } else { "tab" }
}

#[component]
pub fn DashboardHeader(title: &'static str, identity: String, on_logout: EventHandler) -> Element {
    rsx! {
        div { class: "header",
            div {
                h2 { "{title}" }
                p { class: "text-muted", "Signed in as {identity}" }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Log out"
            }
        }
    }
}

#[component]
pub fn SectionTabs(sections: Vec<Section>) -> Element {
    rsx! {
        div { class: "tabs",
            for section in sections {
                TabButton { key: "{section:?}", section }
            }
        }
    }
}

#[component]
fn TabButton(section: Section) -> Element {
    let portal = use_portal();
    let is_active = portal.app.read().state().section == section;
    let label = section_label(section);
    rsx! {
        button {
            class: tab_class(is_active),
            r#type: "button",
            onclick: move |_| portal.navigate(section),
            "{label}"
        }
    }
}

#[component]
pub fn ResourceList(resources: Vec<Resource>) -> Element {
    if resources.is_empty() {
        return rsx! { p { class: "text-muted", "No resources yet." } };
    }
    rsx! {
        for (i, resource) in resources.iter().enumerate() {
            div { key: "{i}", class: "card",
                h4 { "{resource.title}" }
                p { class: "text-muted", "{resource.category}" }
                p { "{resource.description}" }
            }
        }
    }
}

#[component]
pub fn ArticleList(articles: Vec<Article>) -> Element {
    if articles.is_empty() {
        return rsx! { p { class: "text-muted", "No articles yet." } };
    }
    rsx! {
        for (i, article) in articles.iter().enumerate() {
            div { key: "{i}", class: "card",
                h4 { "{article.title}" }
                p { "{article.content}" }
            }
        }
    }
}
