use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Destination for log output while the TUI owns the terminal.
///
/// With a `path`, events are appended to that file. Without one they are
/// discarded: stderr shares the terminal with the alternate screen, so any
/// event written there would paint over the view.
pub fn log_writer(path: Option<&Path>) -> io::Result<BoxMakeWriter> {
    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::sink)),
    }
}
