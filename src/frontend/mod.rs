mod app;
mod components;
mod pages;
mod server_liveview;
mod types;

pub use server_liveview::start_server;
