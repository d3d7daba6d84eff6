//! `textlens config`: print the resolved configuration as TOML.

use std::io::{self, Write};

use textlens_core::errors::TextlensErrorCode;

use super::Context;
use crate::error::CliExitCode;

/// Execute the config command.
pub fn handle_config(ctx: &Context) -> i32 {
    let rendered = match ctx.config.to_toml() {
        Ok(toml) => toml,
        Err(err) => {
            eprintln!("{}", err.coded_string());
            return CliExitCode::Config.code();
        }
    };
    let mut stdout = io::stdout().lock();
    match stdout.write_all(rendered.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => CliExitCode::Success.code(),
        Err(err) => {
            tracing::error!(error = %err, "failed to write config");
            CliExitCode::Config.code()
        }
    }
}
