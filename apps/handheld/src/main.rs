//! # Karyana POS Handheld - Binary Entry Point
//!
//! Thin wrapper around the library: boots the app and hands the assembled
//! [`karyana_handheld::App`] to the rendering shell.

use std::process::ExitCode;

use tracing::info;

fn main() -> ExitCode {
    match karyana_handheld::run() {
        Ok(app) => {
            info!(
                route = ?app.nav.current(),
                "Boot complete, rendering shell takes over"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("karyana-handheld: {err}");
            ExitCode::FAILURE
        }
    }
}
