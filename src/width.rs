// Copyright 2022-2023 Martin Pool

//! Measure terminal width.

use terminal_size::Width;

#[cfg(unix)]
pub(crate) fn stdout_width() -> Option<usize> {
    fd_width(1)
}

#[cfg(unix)]
pub(crate) fn stderr_width() -> Option<usize> {
    fd_width(2)
}

#[cfg(unix)]
fn fd_width(fd: std::os::unix::io::RawFd) -> Option<usize> {
    terminal_size::terminal_size_using_fd(fd).map(|(Width(w), _)| w as usize)
}

// TODO: Query the stdout and stderr handles separately on Windows.
#[cfg(not(unix))]
pub(crate) fn stdout_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(Width(w), _)| w as usize)
}

#[cfg(not(unix))]
pub(crate) fn stderr_width() -> Option<usize> {
    stdout_width()
}
