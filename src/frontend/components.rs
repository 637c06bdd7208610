#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::types::{Page, PRIMARY_NAV, SECONDARY_NAV};
use crate::advisor_core::{Composer, Message, Role};

#[derive(PartialEq, Props)]
pub struct MessageProps {
    message: Message,
}

pub fn ChatMessage(cx: Scope<MessageProps>) -> Element {
    let message = &cx.props.message;
    let name = message.role().display_name();
    let time = message.timestamp();
    let content = message.content();

    match message.role() {
        Role::User => cx.render(rsx!(
            div {
                class: "chat-message user-message",
                div { class: "message-meta", span { class: "author", "{name}" } span { class: "time", "{time}" } }
                div { class: "bubble", "{content}" }
            }
        )),
        Role::Agent => cx.render(rsx!(
            div {
                class: "chat-message agent-message",
                div { class: "avatar" }
                div {
                    div { class: "message-meta", span { class: "author", "{name}" } span { class: "time", "{time}" } }
                    div { class: "bubble", "{content}" }
                }
            }
        )),
    }
}

pub fn Loading(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message agent-message",
            div { class: "avatar" }
            div {
                class: "bubble",
                div {
                    class: "spinner",
                }
            }
        }
    ))
}

#[derive(Props)]
pub struct DraftProps<'a> {
    composer: &'a UseRef<Composer>,
    clean: &'a UseState<bool>,
    on_keydown: EventHandler<'a, Event<KeyboardData>>,
}

pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let composer = cx.props.composer;
    let clean = cx.props.clean;
    if **clean {
        clean.set(false);
        cx.render(rsx!(textarea {
            id: "user-input",
            placeholder: "Describe your LLM requirements...",
            value: "",
            oninput: move |e| composer.write().input(e.value.clone()),
            onkeydown: move |e| cx.props.on_keydown.call(e),
        }))
    } else {
        cx.render(rsx!(textarea {
            id: "user-input",
            placeholder: "Describe your LLM requirements...",
            oninput: move |e| composer.write().input(e.value.clone()),
            onkeydown: move |e| cx.props.on_keydown.call(e),
        }))
    }
}

#[derive(Props)]
pub struct SwitchProps<'a> {
    label: &'a str,
    description: &'a str,
    is_on: bool,
    on_toggle: EventHandler<'a, Event<MouseData>>,
}

pub fn Switch<'a>(cx: Scope<'a, SwitchProps<'a>>) -> Element<'a> {
    let state = if cx.props.is_on { "switch on" } else { "switch" };
    cx.render(rsx!(
        div {
            class: "setting-row",
            div {
                label { "{cx.props.label}" }
                p { class: "muted", "{cx.props.description}" }
            }
            button {
                class: "{state}",
                onclick: move |e| cx.props.on_toggle.call(e),
                span { class: "knob" }
            }
        }
    ))
}

#[derive(Props)]
pub struct NavProps<'a> {
    page: &'a UseState<Page>,
}

pub fn Sidebar<'a>(cx: Scope<'a, NavProps<'a>>) -> Element<'a> {
    let page = cx.props.page;
    let current = **page;

    cx.render(rsx!(
        nav {
            id: "sidebar",
            div {
                class: "brand",
                div { class: "brand-dot" }
                span { "LLM Advisor" }
            }
            div {
                class: "nav-group",
                for item in PRIMARY_NAV.iter() {
                    button {
                        class: item.class(current),
                        onclick: move |_| {
                            if let Some(target) = item.target {
                                page.set(target);
                            }
                        },
                        "{item.label}"
                    }
                }
            }
            div {
                class: "nav-group secondary",
                for item in SECONDARY_NAV.iter() {
                    button {
                        class: item.class(current),
                        "{item.label}"
                    }
                }
            }
        }
    ))
}
