use dioxus::prelude::*;
use tracing::debug;

use super::components::*;
use super::pages::*;
use super::types::*;
use crate::advisor_core::settings::Settings;
use crate::advisor_core::{Composer, Conversation};

pub fn app(cx: Scope<AppProps>) -> Element {
    let page = use_state(cx, || Page::Landing);
    let conversation = use_ref(cx, Conversation::new);
    let composer = use_ref(cx, Composer::new);
    let clean = use_state(cx, || false);
    let settings = use_ref(cx, Settings::default);
    let advisor = cx.props.advisor;

    // Replies are spawned here, next to the conversation, so switching pages
    // does not drop one that is still pending.
    let send = move |with_enter: bool| {
        let sent = composer
            .write()
            .send(&mut conversation.write(), with_enter);
        let Some(text) = sent else {
            return;
        };
        clean.set(true);
        debug!(chars = text.len(), "user message sent");

        cx.spawn({
            to_owned![composer, conversation];

            async move {
                let reply = advisor.reply(&text).await;
                composer.write().receive(&mut conversation.write(), reply);
            }
        });
    };

    let compact = if settings.read().compact_mode { "compact" } else { "" };

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "shell",
            class: "{compact}",
            Sidebar { page: page }
            main {
                id: "content",
                match **page {
                    Page::Landing => rsx!(LandingPage { page: page }),
                    Page::Chat => rsx!(ChatPage {
                        conversation: conversation,
                        composer: composer,
                        clean: clean,
                        page: page,
                        page_url: &cx.props.page_url,
                        on_send: send,
                    }),
                    Page::Settings => rsx!(SettingsPage { settings: settings }),
                }
            }
        }
    ))
}
