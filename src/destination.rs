// Copyright 2022-2023 Martin Pool.

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

#[allow(unused)] // for docstrings
use crate::Console;
use crate::width;

/// Destinations for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Draw to stdout.
    Stdout,
    /// Draw to stderr.
    Stderr,
    /// Draw to an internal capture buffer, which can be retrieved with [Console::captured_output].
    ///
    /// This is intended for testing, and for rendering ahead of time.
    ///
    /// A width of 80 columns is used.
    Capture,
}

impl Destination {
    /// True if this destination is a terminal that understands ANSI styling.
    pub(crate) fn is_styled_terminal(&self) -> bool {
        match self {
            Destination::Stdout => {
                atty::is(atty::Stream::Stdout) && !is_dumb_term() && enable_windows_ansi()
            }
            Destination::Stderr => {
                atty::is(atty::Stream::Stderr) && !is_dumb_term() && enable_windows_ansi()
            }
            Destination::Capture => false,
        }
    }

    pub(crate) fn width(&self) -> Option<usize> {
        match self {
            Destination::Stdout => width::stdout_width(),
            Destination::Stderr => width::stderr_width(),
            Destination::Capture => Some(80),
        }
    }

    pub(crate) fn open(&self) -> WriteTo {
        match self {
            Destination::Stdout => WriteTo::Stdout,
            Destination::Stderr => WriteTo::Stderr,
            Destination::Capture => WriteTo::Capture(Arc::new(Mutex::new(String::new()))),
        }
    }
}

fn is_dumb_term() -> bool {
    env::var("TERM").is_ok_and(|s| s.eq_ignore_ascii_case("dumb"))
}

#[cfg(windows)]
fn enable_windows_ansi() -> bool {
    use std::sync::OnceLock;

    static SUCCEEDED: OnceLock<bool> = OnceLock::new();
    *SUCCEEDED.get_or_init(yansi::Paint::enable_windows_ascii)
}

#[cfg(not(windows))]
fn enable_windows_ansi() -> bool {
    true
}

/// Where finished lines are written.
pub(crate) enum WriteTo {
    /// Sent through `print!` so that the Rust test harness captures it.
    Stdout,
    Stderr,
    Capture(Arc<Mutex<String>>),
    Write(Box<dyn Write + Send + 'static>),
}

impl WriteTo {
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            WriteTo::Stdout => println!("{line}"),
            WriteTo::Stderr => eprintln!("{line}"),
            WriteTo::Capture(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            WriteTo::Write(w) => writeln!(w, "{line}")?,
        }
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self {
            WriteTo::Stdout => io::stdout().flush(),
            WriteTo::Stderr => io::stderr().flush(),
            WriteTo::Capture(_) => Ok(()),
            WriteTo::Write(w) => w.flush(),
        }
    }
}
