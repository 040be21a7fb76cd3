//! Front-end session
//!
//! Drives one interactive session over any async line reader and writer:
//! reads a command, collects the fields of the chosen form, submits it and
//! writes the rendered outcome.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::commands::{Command, parse_command};
use super::render::{HELP_TEXT, render_banner, render_field_prompt, render_result, render_unknown};
use crate::auth::{FormFields, FormKind, ValidationResult, submit};
use crate::config::FrontendConfig;
use crate::error::FrontendError;

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub submissions: usize,
    pub successes: usize,
    pub failures: usize,
}

impl SessionSummary {
    fn record(&mut self, result: &ValidationResult) {
        self.submissions += 1;
        if result.is_success() {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
    }
}

/// Runs a session until `quit` or end of input.
///
/// Returns `FrontendError::FormAbandoned` if input ends while a form is
/// still collecting fields.
pub async fn run_session<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &FrontendConfig,
) -> Result<SessionSummary, FrontendError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    if config.show_banner {
        writer.write_all(render_banner().as_bytes()).await?;
    }

    loop {
        writer.write_all(config.prompt.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            info!("End of input, closing session");
            break;
        }

        let command = parse_command(&line);
        debug!("Received command: {:?}", command);

        match command {
            Command::Form(form) => {
                let fields = fill_form(form, &mut reader, writer).await?;
                let result = submit(form, &fields);
                summary.record(&result);
                writer
                    .write_all(render_result(&result, config).as_bytes())
                    .await?;
            }
            Command::Help => writer.write_all(HELP_TEXT.as_bytes()).await?,
            Command::Empty => {}
            Command::Unknown(text) => writer.write_all(render_unknown(&text).as_bytes()).await?,
            Command::Quit => {
                writer.write_all(b"Goodbye\n").await?;
                break;
            }
        }
    }

    writer.flush().await?;
    info!(
        "Session finished: {} submission(s), {} succeeded, {} failed",
        summary.submissions, summary.successes, summary.failures
    );
    Ok(summary)
}

/// Prompts for and reads every field of `form`, in order.
async fn fill_form<R, W>(
    form: FormKind,
    reader: &mut R,
    writer: &mut W,
) -> Result<FormFields, FrontendError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut fields = FormFields::default();
    let mut line = String::new();

    for &field in form.fields() {
        writer
            .write_all(render_field_prompt(field.label()).as_bytes())
            .await?;
        writer.flush().await?;

        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(FrontendError::FormAbandoned { form, field });
        }
        fields.set(field, strip_line_ending(&line).to_string());
    }

    Ok(fields)
}

// Field values are taken verbatim apart from the terminator; spaces matter.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
