// SPDX-License-Identifier: MPL-2.0
//! Demo binary: drives a board over the terminal renderer.
//!
//! ```text
//! noticeboard --message "Saved" --kind success --timeout 2000
//! noticeboard --demo
//! ```

use noticeboard::board::{Board, BoardSettings};
use noticeboard::config::{defaults::TICK_INTERVAL_MS, Config};
use noticeboard::notification::{Kind, NotifyOptions};
use noticeboard::render::ConsoleRenderer;
use noticeboard::system::{Permission, Popup, SystemBridge, SystemNote};
use std::time::{Duration, Instant};

/// Bridge that prints native popups to the terminal.
struct ConsoleBridge;

impl SystemBridge for ConsoleBridge {
    fn is_supported(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        Permission::Granted
    }

    fn request_permission(&mut self) {}

    fn show(&mut self, note: &SystemNote) -> Box<dyn Popup> {
        println!("[system] {} | {} | {}", note.kind.name(), note.title, note.body);
        Box::new(ConsolePopup)
    }
}

struct ConsolePopup;

impl Popup for ConsolePopup {
    fn close(&mut self) {
        println!("[system] closed");
    }
}

fn parse_kind(value: &str) -> Kind {
    match value {
        "success" => Kind::Success,
        "error" => Kind::Error,
        "warning" => Kind::Warning,
        _ => Kind::Info,
    }
}

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let demo = args.contains("--demo");
    let kind: Option<String> = args.opt_value_from_str("--kind").unwrap_or(None);
    let timeout_ms: Option<u64> = args.opt_value_from_str("--timeout").unwrap_or(None);
    let message: Option<String> = args.opt_value_from_str("--message").unwrap_or(None);

    let settings = match Config::load() {
        Ok(cfg) => BoardSettings::from_config(&cfg),
        Err(err) => {
            eprintln!("{err}");
            BoardSettings::default()
        }
    };
    let timeout = timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(settings.default_panel_timeout);

    let mut board = Board::with_settings(Box::new(ConsoleRenderer::new()), settings);
    board.set_system_bridge(Box::new(ConsoleBridge));
    board.begin_init();

    if demo {
        board.notify(NotifyOptions::success("Everything saved").with_timeout(timeout));
        board.notify(
            NotifyOptions::warning("Disk space is low")
                .with_title("Storage")
                .with_timeout(timeout),
        );
        board.toast("Copied to clipboard");
        board.toast("Link shared");
        board.system_notify(SystemNote::info("Demo complete").with_timeout(timeout));
        board.schedule_deferred(Duration::from_millis(500), || {
            println!("[deferred] half a second elapsed");
        });
    } else {
        let content = message.unwrap_or_else(|| "Hello from noticeboard".to_string());
        let kind = kind.as_deref().map(parse_kind).unwrap_or_default();
        board.notify(
            NotifyOptions::new(kind)
                .with_content(content)
                .with_timeout(timeout),
        );
    }

    // Pump until every surface has drained, with a hard stop in case a
    // zero-timeout notification would otherwise keep us alive forever.
    let deadline = Instant::now() + Duration::from_secs(30);
    while !board.is_idle() && Instant::now() < deadline {
        board.tick();
        std::thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }
}
