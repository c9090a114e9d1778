//! Greet Bot Example
//!
//! A small interactive demonstration of the Trellis router. Messages are
//! read line by line from stdin in place of a webhook delivery; the sender
//! identity is fixed per run via `--sender`.
//!
//! Registered commands:
//!
//! ```text
//! hello                greet the sender
//! weather              forecast for Tokyo
//! weather <place>      forecast for <place>
//! office               share the office location
//! announce <text>      broadcast a notice (admin only)
//! ```
//!
//! Anything else falls back to the generated help text, the same way the
//! webhook layer would substitute help when the router produces no reply.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package greet-bot -- --sender admin
//! ```

use std::io::BufRead;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trellis_core::{MessageEvent, Reply};
use trellis_router::{NodeId, Route, Router};

/// The sender identity allowed to use the announce command.
const ADMIN_ID: &str = "admin";

#[derive(Parser)]
#[command(name = "greet-bot", about = "A stdin-driven demo of the Trellis command router")]
struct Args {
    /// Sender identity stamped on every message.
    #[arg(long, default_value = "guest")]
    sender: String,
}

// ============================================================================
// Handler Functions
// ============================================================================

async fn greet(event: MessageEvent) -> Option<Reply> {
    Some(Reply::text(format!("Hello, {}!", event.sender_id)))
}

async fn weather_today(_event: MessageEvent) -> Option<Reply> {
    Some(Reply::text("Tokyo: clear, 23°C"))
}

/// By the time this runs the `weather` token is consumed, so the event text
/// is just the place.
async fn weather_for_place(event: MessageEvent) -> Option<Reply> {
    Some(Reply::text(format!("{}: cloudy, 19°C", event.text)))
}

async fn office_location(_event: MessageEvent) -> Option<Reply> {
    Some(Reply::Location {
        title: "Head office".to_string(),
        address: "1-1-1 Marunouchi, Chiyoda-ku, Tokyo".to_string(),
        latitude: 35.681,
        longitude: 139.767,
    })
}

async fn announce_usage(_event: MessageEvent) -> Option<Reply> {
    Some(Reply::text("Usage: announce <text>"))
}

async fn announce_text(event: MessageEvent) -> Option<Reply> {
    Some(Reply::text(format!("[ANNOUNCEMENT] {}", event.text)))
}

// ============================================================================
// Router Wiring
// ============================================================================

fn build_router() -> Result<Router<Reply>> {
    let mut router = Router::new();

    router.register(
        NodeId::ROOT,
        Route::new("^hello$")
            .name("hello")
            .describe("hello: greet the sender")
            .handler(greet),
    )?;

    let weather = router.register(
        NodeId::ROOT,
        Route::new("^weather$")
            .name("weather")
            .describe("weather: forecast for Tokyo")
            .handler(weather_today),
    )?;
    router.register(
        weather,
        Route::new(".+")
            .name("weather-place")
            .describe("weather <place>: forecast for <place>")
            .handler(weather_for_place),
    )?;

    router.register(
        NodeId::ROOT,
        Route::new("^office$")
            .name("office")
            .describe("office: share the office location")
            .handler(office_location),
    )?;

    let announce = router.register(
        NodeId::ROOT,
        Route::new("^announce$")
            .name("announce")
            .describe("announce <text>: broadcast a notice (admin only)")
            .handler(announce_usage),
    )?;
    router.restrict(
        announce,
        [ADMIN_ID],
        Some(Reply::text("Only the admin can make announcements.")),
    );
    router.register(
        announce,
        Route::new(".+")
            .name("announce-text")
            .default_reply(Reply::text("announce: one-word notices only"))
            .handler(announce_text),
    )?;

    Ok(router)
}

fn render(reply: &Reply) -> String {
    match reply {
        Reply::Text { text } => text.clone(),
        Reply::Location {
            title,
            address,
            latitude,
            longitude,
        } => format!("{title} — {address} ({latitude}, {longitude})"),
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let router = build_router()?;
    let help = router.describe(NodeId::ROOT);

    info!(sender = %args.sender, "greet-bot ready");
    println!("Commands:\n{help}\n");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let mut event = MessageEvent::new(args.sender.as_str(), line?);
        match router.process(&mut event).await {
            Some(reply) => println!("{}", render(&reply)),
            None => println!("{help}"),
        }
    }

    Ok(())
}
