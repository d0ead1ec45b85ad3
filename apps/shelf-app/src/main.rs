//! # Shelf Entry Point
//!
//! The actual setup lives in `lib.rs` for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match shelf_app::run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, code = ?e.code(), "Shelf failed to start");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
