pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;

/// chrono format for message timestamps, e.g. `3:42 PM`.
pub const TIME_FORMAT: &str = "%-I:%M %p";

pub const EXPORT_FILE_NAME: &str = "chat-export.txt";
