//! One-shot analysis: `textlens file <PATH>` and `textlens text <TEXT|->`.

use std::io::{self, BufRead, Read, Write};

use clap::Args;
use tracing::error;

use textlens_analysis::{LexiconLoader, TextMetricsEngine};
use textlens_core::errors::{AnalysisError, InputError, TextlensErrorCode};

use super::{build_engine, write_report, Context};
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for the file command.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path to a UTF-8 text file (`~` is expanded, quotes are stripped)
    pub path: String,
}

/// Arguments for the text command.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text to analyze, or `-` to read standard input
    pub text: String,
}

/// Execute the file command.
pub fn handle_file(args: FileArgs, ctx: &Context) -> i32 {
    let engine = match engine_for(ctx) {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let stdout = io::stdout();
    finish(analyze_file(&engine, &args.path, ctx, &mut stdout.lock()))
}

/// Execute the text command.
pub fn handle_text(args: TextArgs, ctx: &Context) -> i32 {
    let engine = match engine_for(ctx) {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    finish(analyze_text_arg(
        &engine,
        &args.text,
        ctx,
        &mut stdin.lock(),
        &mut stdout.lock(),
    ))
}

/// Analyze the file at `raw_path` and write the report.
pub fn analyze_file<W: Write>(
    engine: &TextMetricsEngine,
    raw_path: &str,
    ctx: &Context,
    out: &mut W,
) -> Result<(), CommandError> {
    let result = engine.analyze_path(raw_path, ctx.decoding)?;
    write_report(out, &result, &ctx.config.display)?;
    Ok(())
}

/// Analyze literal text, or all of `input` when `text` is `-`.
pub fn analyze_text_arg<R: BufRead, W: Write>(
    engine: &TextMetricsEngine,
    text: &str,
    ctx: &Context,
    input: &mut R,
    out: &mut W,
) -> Result<(), CommandError> {
    let result = if text == "-" {
        let mut buf = String::new();
        input.read_to_string(&mut buf).map_err(|source| {
            AnalysisError::from(InputError::Io {
                path: "<stdin>".into(),
                source,
            })
        })?;
        engine.analyze(&buf)
    } else {
        engine.analyze(text)
    };
    write_report(out, &result, &ctx.config.display)?;
    Ok(())
}

/// Failure of a one-shot command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

fn engine_for(ctx: &Context) -> Result<TextMetricsEngine, i32> {
    let loader = LexiconLoader::from_config(&ctx.config);
    build_engine(&loader, ctx, &mut io::stderr()).map_err(|err| {
        let err = AnalysisError::from(err);
        error!(code = err.error_code(), "{err}");
        eprintln!("{}", err.coded_string());
        exit_code_for_error(&err).code()
    })
}

fn finish(outcome: Result<(), CommandError>) -> i32 {
    match outcome {
        Ok(()) => CliExitCode::Success.code(),
        Err(CommandError::Analysis(err)) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("{}", err.coded_string());
            exit_code_for_error(&err).code()
        }
        // Closed stdout (e.g. piped into `head`) is not an analysis failure.
        Err(CommandError::Output(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            CliExitCode::Success.code()
        }
        Err(err @ CommandError::Output(_)) => {
            error!("{err}");
            CliExitCode::Input.code()
        }
    }
}
