use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use rustyline::error::ReadlineError;

use crate::menu::*;

/// Where the menu loop gets its input from, one line at a time.
pub trait LineSource {
    /// Shows `prompt` and blocks for the next line. `None` means the input is
    /// closed and the loop should stop.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>>;
}

impl LineSource for rustyline::DefaultEditor {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>> {
        // the editor writes the prompt itself
        out.flush()?;

        let line = line_or_closed(self.readline(prompt))?;
        if let Some(line) = &line {
            if !line.trim().is_empty() {
                let _ = self.add_history_entry(line.as_str());
            }
        }
        Ok(line)
    }
}

/// CTRL-C and CTRL-D both close the input; any other editor failure is an error.
fn line_or_closed(res: Result<String, ReadlineError>) -> anyhow::Result<Option<String>> {
    match res {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => {
            log::info!("interrupted (CTRL-C)");
            Ok(None)
        }
        Err(ReadlineError::Eof) => {
            log::info!("end of input (CTRL-D)");
            Ok(None)
        }
        Err(err) => Err(err).context("unable to read from terminal"),
    }
}

/// Plain buffered input, for piped or scripted sessions.
pub struct Reader<R>(pub R);

impl<R: BufRead> LineSource for Reader<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> anyhow::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        // undecodable bytes become U+FFFD and the line dispatches as invalid
        let mut buf = vec![];
        match self.0.read_until(b'\n', &mut buf)? {
            0 => {
                log::info!("end of input");
                Ok(None)
            }
            _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if !stdin.is_terminal() {
        log::debug!("stdin is not a terminal, reading lines directly");
        return run_with(&mut Reader(stdin.lock()), &mut stdout);
    }

    let mut rl = rustyline::DefaultEditor::new().context("unable to start line editor")?;
    run_with(&mut rl, &mut stdout)
}

/// Shows the menu, reads one line, answers it, and repeats until the exit
/// option is picked or the input closes.
pub fn run_with<S: LineSource, W: Write>(source: &mut S, out: &mut W) -> anyhow::Result<()> {
    log::debug!("menu loop started");

    loop {
        for option in OPTIONS.iter() {
            writeln!(out, "{}", option)?;
        }

        let Some(line) = source.read_line(PROMPT, out)? else {
            log::info!("input closed, leaving menu loop");
            return Ok(());
        };

        let action = dispatch(&line);
        match action {
            Action::Invalid => log::info!("invalid option {:?}", line.trim()),
            _ => log::debug!("dispatched {:?} to {:?}", line.trim(), action),
        }

        writeln!(out, "{}", action)?;

        if action.is_exit() {
            out.flush()?;
            log::info!("exit option selected, leaving menu loop");
            return Ok(());
        }
    }
}
