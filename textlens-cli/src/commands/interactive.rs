//! The guided console session: banner, input menu, report, closing line.

use std::io::{self, BufRead, Write};

use textlens_analysis::{load_text, Decoding, LexiconLoader, TextMetricsEngine};
use textlens_core::config::OutputFormat;
use textlens_core::constants::PASTE_SENTINEL;
use textlens_core::errors::{AnalysisError, InputError, TextlensErrorCode};

use super::{build_engine, write_report, Context};
use crate::error::{exit_code_for_error, CliExitCode};
use crate::present::panels::{banner, render_panel, CLOSING_LINE};

const CANCELED_LINE: &str = "Session canceled. See you next time!";

/// How the user wants to supply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    File,
    Paste,
}

/// Execute the interactive command on the process stdin/stdout.
pub fn handle_interactive(ctx: &Context) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), ctx.decoding);

    if let Err(err) = session.show_banner() {
        tracing::error!(error = %err, "failed to write banner");
        return CliExitCode::Input.code();
    }

    let loader = LexiconLoader::from_config(&ctx.config);
    let engine = match build_engine(&loader, ctx, &mut session.out) {
        Ok(engine) => engine,
        Err(err) => {
            let err = AnalysisError::from(err);
            eprintln!("{}", err.coded_string());
            return exit_code_for_error(&err).code();
        }
    };

    match session.run(&engine, ctx) {
        Ok(()) => CliExitCode::Success.code(),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => CliExitCode::Success.code(),
        Err(err) => {
            tracing::error!(error = %err, "interactive session failed");
            CliExitCode::Input.code()
        }
    }
}

/// Prompt loop over any line source, so tests can script a session.
pub struct Session<R, W> {
    input: R,
    out: W,
    decoding: Decoding,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, decoding: Decoding) -> Self {
        Self {
            input,
            out,
            decoding,
        }
    }

    pub fn show_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", banner())?;
        self.out.flush()
    }

    /// Collect text, analyze it, and print the report.
    ///
    /// End of input at any prompt ends the session without a report.
    pub fn run(&mut self, engine: &TextMetricsEngine, ctx: &Context) -> io::Result<()> {
        let Some(text) = self.collect_text()? else {
            writeln!(self.out, "\n{CANCELED_LINE}")?;
            return self.out.flush();
        };
        let result = engine.analyze(&text);
        write_report(&mut self.out, &result, &ctx.config.display)?;
        if ctx.config.display.effective_format() == OutputFormat::Panels {
            writeln!(self.out, "{CLOSING_LINE}\n")?;
        }
        self.out.flush()
    }

    /// Ask for an input method, then read text through it.
    pub fn collect_text(&mut self) -> io::Result<Option<String>> {
        match self.choose_method()? {
            Some(InputMethod::File) => self.read_file_text(),
            Some(InputMethod::Paste) => self.read_pasted_text(),
            None => Ok(None),
        }
    }

    pub fn choose_method(&mut self) -> io::Result<Option<InputMethod>> {
        let menu = [
            "1) Analyze a text file".to_string(),
            "2) Paste or type text directly".to_string(),
            "I accept file paths with spaces and I expand ~ for home directories.".to_string(),
        ];
        write!(self.out, "{}", render_panel("Input Options", &menu, 48))?;
        loop {
            let Some(choice) = self.prompt("Choose an option (1 or 2): ")? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => return Ok(Some(InputMethod::File)),
                "2" => return Ok(Some(InputMethod::Paste)),
                _ => writeln!(
                    self.out,
                    "Please type 1 or 2 so I know which route to take.\n"
                )?,
            }
        }
    }

    /// Ask for a path until it names a readable file with non-blank text.
    pub fn read_file_text(&mut self) -> io::Result<Option<String>> {
        loop {
            let Some(raw) = self.prompt("\nEnter the path to your text file: ")? else {
                return Ok(None);
            };
            if raw.trim().is_empty() {
                writeln!(self.out, "Please provide a file path so I can keep going.")?;
                continue;
            }
            match load_text(&raw, self.decoding) {
                Ok(text) if text.trim().is_empty() => writeln!(
                    self.out,
                    "That file looks empty. Pick another file or use manual input."
                )?,
                Ok(text) => return Ok(Some(text)),
                Err(InputError::NotFound { .. } | InputError::NotAFile { .. }) => writeln!(
                    self.out,
                    "I could not find that file. Double-check the path and try again."
                )?,
                Err(InputError::NotDecodable { offset, .. }) => writeln!(
                    self.out,
                    "That file is not valid UTF-8 (bad byte at offset {offset}). \
                     Pick another file or restart with --lossy."
                )?,
                Err(err) => {
                    tracing::warn!(code = err.error_code(), "{err}");
                    writeln!(self.out, "I could not read that file: {err}")?;
                }
            }
        }
    }

    /// Capture lines until a lone `END` (any case) or end of input.
    ///
    /// Returns `None` only when input ended without any text.
    pub fn read_pasted_text(&mut self) -> io::Result<Option<String>> {
        loop {
            writeln!(
                self.out,
                "\nPaste or type your text below. \
                 Type {PASTE_SENTINEL} on a new line when you are finished.\n"
            )?;
            self.out.flush()?;

            let mut lines = Vec::new();
            let mut ended = false;
            loop {
                let Some(line) = self.read_line()? else {
                    ended = true;
                    break;
                };
                if line.trim().eq_ignore_ascii_case(PASTE_SENTINEL) {
                    break;
                }
                lines.push(line);
            }

            let text = lines.join("\n").trim().to_string();
            if !text.is_empty() {
                return Ok(Some(text));
            }
            if ended {
                return Ok(None);
            }
            writeln!(self.out, "I did not capture any text. Let's try that again.\n")?;
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// One line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
