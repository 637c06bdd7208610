#![allow(non_snake_case)]

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use dioxus::html::input_data::keyboard_types::{Key, Modifiers};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use super::components::*;
use super::types::*;
use crate::advisor_core::settings::{FontSize, Language, Model, NumericDraft, Settings, Theme, TimeZone};
use crate::advisor_core::{Composer, Conversation, SAMPLE_HISTORIES};
use crate::global;

#[derive(Props)]
pub struct LandingProps<'a> {
    page: &'a UseState<Page>,
}

pub fn LandingPage<'a>(cx: Scope<'a, LandingProps<'a>>) -> Element<'a> {
    let page = cx.props.page;

    cx.render(rsx!(
        div {
            id: "landing",
            div {
                class: "hero",
                div { class: "pill", "AI-Powered Recommendations" }
                h1 { "Find the Perfect LLM for Your Needs" }
                p {
                    class: "lead",
                    "Our intelligent system analyzes your requirements and recommends the most suitable language models for your specific use case."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "primary",
                        onclick: move |_| page.set(Page::Chat),
                        "Start a Conversation →"
                    }
                    button { class: "outline", "Learn More" }
                }
            }
            div {
                class: "features",
                h2 { "How It Works" }
                div {
                    class: "feature-grid",
                    div {
                        class: "feature",
                        h3 { "Describe Your Needs" }
                        p { class: "muted", "Tell us about your project requirements, budget constraints, and specific features you need." }
                    }
                    div {
                        class: "feature",
                        h3 { "AI Analysis" }
                        p { class: "muted", "Our system analyzes your requirements and matches them with the capabilities of various LLMs." }
                    }
                    div {
                        class: "feature",
                        h3 { "Get Recommendations" }
                        p { class: "muted", "Receive personalized recommendations with detailed comparisons and implementation advice." }
                    }
                }
            }
        }
    ))
}

#[derive(Props)]
pub struct ChatProps<'a> {
    conversation: &'a UseRef<Conversation>,
    composer: &'a UseRef<Composer>,
    clean: &'a UseState<bool>,
    page: &'a UseState<Page>,
    page_url: &'a str,
    /// Called with `true` when the send came from the Enter key.
    on_send: EventHandler<'a, bool>,
}

pub fn ChatPage<'a>(cx: Scope<'a, ChatProps<'a>>) -> Element<'a> {
    let conversation = cx.props.conversation;
    let composer = cx.props.composer;
    let page = cx.props.page;

    let confirm_clear = use_state(cx, || false);
    let show_link = use_state(cx, || false);

    let send_enter = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            if !e.data.modifiers().contains(Modifiers::SHIFT) {
                cx.props.on_send.call(true);
            }
        }
    };

    let load_sample = move |id: &str| {
        if conversation.write().load_sample(id) {
            debug!(id, "sample conversation loaded");
        }
    };

    let messages = conversation.read().messages().to_vec();
    let active_sample = conversation.read().active_sample();
    let pending = composer.read().is_pending();
    let export_href = format!(
        "data:text/plain;charset=utf-8;base64,{}",
        BASE64_STANDARD.encode(conversation.read().export_text())
    );
    let page_url = cx.props.page_url;

    cx.render(rsx!(
        div {
            id: "chat-page",
            div {
                id: "chat-column",
                header { class: "page-header", h1 { "LLM Recommendation" } }
                div {
                    id: "chat-window",
                    class: "chat-window",
                    if messages.is_empty() {
                        rsx!(div {
                            class: "empty-state",
                            div { class: "avatar large" }
                            h2 { "LLM Recommendation Assistant" }
                            p {
                                class: "muted",
                                "Describe your project requirements and I'll recommend the best language models for your specific needs."
                            }
                            div {
                                class: "suggestion-grid",
                                for suggestion in SUGGESTIONS.iter() {
                                    button {
                                        class: "suggestion",
                                        onclick: move |_| {
                                            if let Some(id) = suggestion.sample {
                                                load_sample(id);
                                            }
                                        },
                                        span { class: "title", "{suggestion.title}" }
                                        span { class: "muted", "{suggestion.blurb}" }
                                    }
                                }
                            }
                        })
                    }
                    for msg in messages.iter() {
                        ChatMessage { message: msg.clone() }
                    }
                    if pending {
                        rsx!(Loading {})
                    }
                }
                div {
                    id: "input-area",
                    UserInput {
                        composer: composer,
                        clean: cx.props.clean,
                        on_keydown: send_enter,
                    }
                    button {
                        id: "send-button",
                        onclick: move |_| cx.props.on_send.call(false),
                        "Send"
                    }
                }
            }
            aside {
                id: "details",
                header { class: "page-header", h2 { "Conversation details" } }
                div {
                    class: "details-body",
                    h3 { "Recent Conversations" }
                    for sample in SAMPLE_HISTORIES.iter() {
                        div {
                            class: if active_sample == Some(sample.id) { "recent active" } else { "recent" },
                            onclick: move |_| load_sample(sample.id),
                            p { class: "title", "{sample.title}" }
                            p { class: "muted", "{sample.preview}" }
                            p { class: "time", "{sample.timestamp}" }
                        }
                    }
                    for entry in UNLINKED_RECENT.iter() {
                        div {
                            class: "recent inert",
                            p { class: "title", "{entry.title}" }
                            p { class: "time", "{entry.timestamp}" }
                        }
                    }
                    h3 { "Quick Actions" }
                    div {
                        class: "quick-actions",
                        if messages.is_empty() {
                            rsx!(span { class: "quick-action disabled", "Export Chat" })
                        } else {
                            rsx!(a {
                                class: "quick-action",
                                href: "{export_href}",
                                download: global::EXPORT_FILE_NAME,
                                "Export Chat"
                            })
                        }
                        button {
                            class: "quick-action",
                            onclick: move |_| show_link.set(!**show_link),
                            "Share"
                        }
                        button {
                            class: "quick-action",
                            onclick: move |_| confirm_clear.set(true),
                            "Clear History"
                        }
                        button {
                            class: "quick-action",
                            onclick: move |_| page.set(Page::Settings),
                            "Settings"
                        }
                    }
                    if **show_link {
                        rsx!(div {
                            class: "notice",
                            p { "Copy this link to share the assistant:" }
                            input { readonly: "true", value: "{page_url}" }
                        })
                    }
                    if **confirm_clear {
                        rsx!(div {
                            class: "notice",
                            p { "Are you sure you want to clear the chat history?" }
                            button {
                                class: "primary",
                                onclick: move |_| {
                                    conversation.write().clear();
                                    confirm_clear.set(false);
                                    debug!("conversation cleared");
                                },
                                "Confirm"
                            }
                            button {
                                class: "outline",
                                onclick: move |_| confirm_clear.set(false),
                                "Cancel"
                            }
                        })
                    }
                }
            }
        }
    ))
}

#[derive(Props)]
pub struct SettingsProps<'a> {
    settings: &'a UseRef<Settings>,
}

pub fn SettingsPage<'a>(cx: Scope<'a, SettingsProps<'a>>) -> Element<'a> {
    let saved = cx.props.settings;

    let tab = use_state(cx, || SettingsTab::General);
    let draft = use_ref(cx, || saved.read().clone());
    let numbers = use_ref(cx, || NumericDraft::from_settings(&saved.read()));
    let status = use_state(cx, || SaveStatus::Idle);

    let save = move |_| {
        let result = numbers.read().apply(&draft.read());
        match result {
            Ok(settings) => {
                info!(
                    model = settings.default_model.value(),
                    temperature = settings.temperature,
                    max_tokens = settings.max_tokens,
                    theme = settings.theme.value(),
                    "settings saved"
                );
                saved.set(settings);
                status.set(SaveStatus::Saved);
            }
            Err(err) => {
                warn!("rejected settings: {:#}", err);
                status.set(SaveStatus::Invalid(format!("{:#}", err)));
            }
        }
    };

    let current = draft.read().clone();
    let raw = numbers.read().clone();
    let active = **tab;

    let tab_body = match active {
        SettingsTab::General => rsx!(
            div {
                class: "card",
                h2 { "General Settings" }
                p { class: "muted", "Configure your general application preferences" }
                label { "Default Language" }
                select {
                    value: current.language.value(),
                    onchange: move |e| {
                        if let Ok(language) = e.value.parse::<Language>() {
                            draft.write().language = language;
                        }
                    },
                    for choice in Language::ALL.iter() {
                        option { value: choice.value(), "{choice.label()}" }
                    }
                }
                label { "Time Zone" }
                select {
                    value: current.time_zone.value(),
                    onchange: move |e| {
                        if let Ok(time_zone) = e.value.parse::<TimeZone>() {
                            draft.write().time_zone = time_zone;
                        }
                    },
                    for choice in TimeZone::ALL.iter() {
                        option { value: choice.value(), "{choice.label()}" }
                    }
                }
                Switch {
                    label: "Auto-save Conversations",
                    description: "Automatically save your conversation history",
                    is_on: current.auto_save,
                    on_toggle: move |_| {
                        let mut settings = draft.write();
                        settings.auto_save = !settings.auto_save;
                    },
                }
            }
        ),
        SettingsTab::Models => rsx!(
            div {
                class: "card",
                h2 { "Model Preferences" }
                p { class: "muted", "Configure your default LLM models and preferences" }
                label { "Default Model" }
                select {
                    value: current.default_model.value(),
                    onchange: move |e| {
                        if let Ok(model) = e.value.parse::<Model>() {
                            draft.write().default_model = model;
                        }
                    },
                    for choice in Model::ALL.iter() {
                        option { value: choice.value(), "{choice.label()}" }
                    }
                }
                label { "Temperature" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "1",
                    step: "0.1",
                    value: "{raw.temperature}",
                    oninput: move |e| numbers.write().temperature = e.value.clone(),
                }
                p { class: "muted", "Controls randomness in model responses (0 = deterministic, 1 = creative)" }
                label { "Max Tokens" }
                input {
                    r#type: "number",
                    min: "100",
                    max: "4000",
                    step: "100",
                    value: "{raw.max_tokens}",
                    oninput: move |e| numbers.write().max_tokens = e.value.clone(),
                }
                p { class: "muted", "Maximum number of tokens in model responses" }
                hr {}
                label { "API Keys" }
                input {
                    r#type: "password",
                    placeholder: "OpenAI API Key",
                    value: "{current.openai_api_key}",
                    oninput: move |e| draft.write().openai_api_key = e.value.clone(),
                }
                input {
                    r#type: "password",
                    placeholder: "Anthropic API Key",
                    value: "{current.anthropic_api_key}",
                    oninput: move |e| draft.write().anthropic_api_key = e.value.clone(),
                }
            }
        ),
        SettingsTab::Appearance => rsx!(
            div {
                class: "card",
                h2 { "Appearance" }
                p { class: "muted", "Customize how the application looks" }
                label { "Theme" }
                select {
                    value: current.theme.value(),
                    onchange: move |e| {
                        if let Ok(theme) = e.value.parse::<Theme>() {
                            draft.write().theme = theme;
                        }
                    },
                    for choice in Theme::ALL.iter() {
                        option { value: choice.value(), "{choice.label()}" }
                    }
                }
                label { "Font Size" }
                select {
                    value: current.font_size.value(),
                    onchange: move |e| {
                        if let Ok(font_size) = e.value.parse::<FontSize>() {
                            draft.write().font_size = font_size;
                        }
                    },
                    for choice in FontSize::ALL.iter() {
                        option { value: choice.value(), "{choice.label()}" }
                    }
                }
                Switch {
                    label: "Compact Mode",
                    description: "Reduce spacing and padding for a more compact interface",
                    is_on: current.compact_mode,
                    on_toggle: move |_| {
                        let mut settings = draft.write();
                        settings.compact_mode = !settings.compact_mode;
                    },
                }
            }
        ),
        SettingsTab::Notifications => rsx!(
            div {
                class: "card",
                h2 { "Notifications" }
                p { class: "muted", "Configure your notification preferences" }
                Switch {
                    label: "Email Notifications",
                    description: "Receive email notifications for important updates",
                    is_on: current.email_notifications,
                    on_toggle: move |_| {
                        let mut settings = draft.write();
                        settings.email_notifications = !settings.email_notifications;
                    },
                }
                Switch {
                    label: "In-App Notifications",
                    description: "Show notifications within the application",
                    is_on: current.in_app_notifications,
                    on_toggle: move |_| {
                        let mut settings = draft.write();
                        settings.in_app_notifications = !settings.in_app_notifications;
                    },
                }
                Switch {
                    label: "Model Updates",
                    description: "Notify me about new model releases and updates",
                    is_on: current.model_updates,
                    on_toggle: move |_| {
                        let mut settings = draft.write();
                        settings.model_updates = !settings.model_updates;
                    },
                }
            }
        ),
    };

    let status_line = match &**status {
        SaveStatus::Idle => None,
        SaveStatus::Saved => Some(("status ok", "Settings saved".to_string())),
        SaveStatus::Invalid(reason) => Some(("status error", reason.clone())),
    };

    cx.render(rsx!(
        div {
            id: "settings",
            div {
                class: "settings-header",
                h1 { "Settings" }
                button { class: "primary", onclick: save, "Save Changes" }
            }
            status_line.map(|(class, text)| rsx!(p { class: class, "{text}" })),
            div {
                class: "tabs",
                for choice in (SettingsTab::ALL) {
                    button {
                        class: if choice == active { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(choice),
                        "{choice.label()}"
                    }
                }
            }
            tab_body
        }
    ))
}
