use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind};
use log::debug;
use crate::drivers::ScopeError;
/// Something that yields raw telemetry lines on demand.
///
/// `Ok(None)` means the stream has ended; no more lines will follow.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, ScopeError>;
    fn describe(&self) -> String;
}
/// Reads newline-terminated lines from any buffered reader.
///
/// A read timeout is not an error: whatever arrived before it (possibly
/// nothing) is returned as the line.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    name: String,
}
impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, name: impl Into<String>) -> Self {
        Self {
            reader,
            name: name.into(),
        }
    }
}
impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, ScopeError> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::TimedOut => {
                debug!("{}: read timed out after {} bytes", self.name, buf.len());
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Some(String::from_utf8(buf)?))
    }
    fn describe(&self) -> String {
        self.name.clone()
    }
}
/// In-memory source useful for tests and deterministic playback.
pub struct ScriptedSource {
    queue: VecDeque<String>,
}
impl ScriptedSource {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(Into::into).collect(),
        }
    }
}
impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> Result<Option<String>, ScopeError> {
        Ok(self.queue.pop_front())
    }
    fn describe(&self) -> String {
        "scripted".to_owned()
    }
}
