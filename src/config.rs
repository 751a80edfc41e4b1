//! Compile-time configuration for the outbound message relay.
//!
//! The lead forms post to a messaging-bot endpoint. Token and chat id are
//! injected at build time (`FIREBIRD_RELAY_TOKEN` / `FIREBIRD_RELAY_CHAT`)
//! so no secret lives in the repository.

const RELAY_API_BASE: &str = "https://api.telegram.org";

pub fn get_relay_token() -> Option<&'static str> {
    option_env!("FIREBIRD_RELAY_TOKEN")
}

pub fn get_relay_chat_id() -> Option<&'static str> {
    option_env!("FIREBIRD_RELAY_CHAT")
}

/// Full sendMessage URL for the configured bot, `None` when unconfigured.
pub fn get_relay_url() -> Option<String> {
    get_relay_token().map(|token| format!("{}/bot{}/sendMessage", RELAY_API_BASE, token))
}

/// Embed player URL for a hosted video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://rutube.ru/play/embed/{}", video_id)
}
