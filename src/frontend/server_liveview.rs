use anyhow::Result;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use tracing::{info, warn};

use super::app::app;
use super::types::AppProps;
use crate::advisor_core::Advisor;
use crate::config::Config;

pub async fn start_server(config: Config) -> Result<()> {
    let view = dioxus_liveview::LiveViewPool::new();
    let advisor = Advisor::new(config.response_delay);
    let props = AppProps {
        advisor,
        page_url: config.page_url(),
    };
    let websocket_url = config.websocket_url();

    let router = Router::new()
        .route(
            "/",
            get(move || async move {
                Html(format!(
                    r#"
            <!DOCTYPE html>
            <html>
                <head>
                    <title>LLM Advisor</title>
                    <meta name="viewport"
                    content="width=device-width,
                    initial-scale=1,
                    minimum-scale=1,
                    maximum-scale=1,
                    user-scalable=no">
                </head>
                <body> <div id="main"></div> </body>
                {glue}
            </html>
            "#,
                    glue = dioxus_liveview::interpreter_glue(&websocket_url)
                ))
            }),
        )
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    if let Err(err) = view
                        .launch_with_props(dioxus_liveview::axum_socket(socket), app, props)
                        .await
                    {
                        warn!("liveview session ended with error: {:?}", err);
                    }
                })
            }),
        );

    info!(
        listen = %config.listen_addr,
        reachable = %config.reachable_addr,
        delay_ms = advisor.delay().as_millis() as u64,
        "server started"
    );

    axum::Server::bind(&config.listen_addr)
        .serve(router.into_make_service())
        .await?;
    Ok(())
}
