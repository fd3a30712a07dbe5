use std::collections::VecDeque;
use std::io::{self, Write};

use crate::error::Result;
use crate::utils::{OutputFormat, format_deletion_message, format_report};
use crate::workflow::{Event, Frontend, MAX_NAME_LEN, Phase, Render, View};

use super::prompts::Prompt;

/// Reads workflow events from dialoguer prompts.
pub struct ConsoleFrontend {
    prompt: Prompt,
    pending: VecDeque<Event>,
}

impl ConsoleFrontend {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            pending: VecDeque::new(),
        }
    }
}

impl Frontend for ConsoleFrontend {
    fn next_event(&mut self, view: &View<'_>) -> Result<Event> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(event);
        }

        match view {
            View::Input { text } => Ok(Event::Submit(
                self.prompt
                    .input("Program name to uninstall", text, MAX_NAME_LEN)?,
            )),
            View::Selecting { rows, .. } if rows.is_empty() => {
                if self.prompt.confirm("No matching paths found. Search again?", true)? {
                    Ok(Event::Back)
                } else {
                    Ok(Event::Cancel)
                }
            }
            View::Selecting { rows, .. } => {
                let items: Vec<String> = rows.iter().map(|r| r.path.display().to_string()).collect();
                let checked: Vec<bool> = rows.iter().map(|r| r.selected).collect();
                let chosen = self.prompt.multi_select(
                    "Select paths to delete (space toggles, enter continues, esc goes back)",
                    &items,
                    &checked,
                )?;

                match chosen {
                    None => Ok(Event::Back),
                    Some(chosen) => {
                        self.pending = toggle_events(&checked, &chosen);
                        self.pending.push_back(Event::Delete);
                        Ok(self.pending.pop_front().unwrap_or(Event::Delete))
                    }
                }
            }
            View::Confirm { selection } => Ok(Event::Confirm(
                self.prompt
                    .confirm(&format_deletion_message(selection), false)?,
            )),
            View::Error { .. } => {
                if self.prompt.confirm("Go back?", true)? {
                    Ok(Event::Back)
                } else {
                    Ok(Event::Cancel)
                }
            }
            // The workflow never waits for input while scanning or once done.
            View::Scanning { .. } | View::Done { .. } => Ok(Event::Cancel),
        }
    }
}

/// Events turning the `checked` rows into exactly the `chosen` rows.
fn toggle_events(checked: &[bool], chosen: &[usize]) -> VecDeque<Event> {
    let mut wanted = vec![false; checked.len()];
    for &index in chosen {
        if let Some(slot) = wanted.get_mut(index) {
            *slot = true;
        }
    }

    checked
        .iter()
        .zip(&wanted)
        .enumerate()
        .filter(|(_, (was, now))| was != now)
        .flat_map(|(index, _)| [Event::Focus(index), Event::Toggle])
        .collect()
}

/// Prints the parts of each view that the prompts do not show themselves.
///
/// Reports go to `out`. Progress lines share `out` in human format and move to
/// `status` in JSON format, so `out` stays a single JSON document.
pub struct ConsoleRenderer<W: Write, E: Write> {
    out: W,
    status: E,
    format: OutputFormat,
    last: Option<Phase>,
}

impl ConsoleRenderer<io::Stdout, io::Stderr> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), io::stderr(), format)
    }
}

impl<W: Write, E: Write> ConsoleRenderer<W, E> {
    pub fn new(out: W, status: E, format: OutputFormat) -> Self {
        Self {
            out,
            status,
            format,
            last: None,
        }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.status)
    }

    fn status_line(&mut self, line: &str) -> Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(self.out, "{line}")?,
            OutputFormat::Json => {
                writeln!(self.status, "{line}")?;
                self.status.flush()?;
            }
        }
        Ok(())
    }
}

impl<W: Write, E: Write> Render for ConsoleRenderer<W, E> {
    fn render(&mut self, view: &View<'_>) -> Result<()> {
        let phase = view.phase();
        // cursor moves and toggles re-render the same screen
        if self.last == Some(phase) {
            return Ok(());
        }
        self.last = Some(phase);

        match view {
            View::Input { .. } | View::Confirm { .. } => {}
            View::Scanning { name } => {
                self.status_line(&format!("Getting paths matching '{name}' ..."))?
            }
            View::Selecting { rows, .. } => {
                self.status_line(&format!("Found {} matching path(s).", rows.len()))?
            }
            View::Error { message } => self.status_line(&format!("Error: {message}"))?,
            View::Done { results } => {
                write!(self.out, "{}", format_report(results, self.format)?)?;
                if self.format == OutputFormat::Json {
                    writeln!(self.out)?;
                }
                self.status_line("Done!")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
