use crate::drivers::error::ScopeError;
use crate::drivers::source::LineSource;
use crate::drivers::{LineFormat, PlotFrame, PlotState, Sample};
/// Read-parse-append loop body: one line in, one plot update out.
pub struct ScopePipeline<S: LineSource> {
    source: S,
    format: LineFormat,
    state: PlotState,
    lines: u64,
}
impl<S: LineSource> ScopePipeline<S> {
    pub fn new(source: S, format: LineFormat, state: PlotState) -> Self {
        Self {
            source,
            format,
            state,
            lines: 0,
        }
    }
    /// Blocks for one line. `Ok(None)` once the source is exhausted.
    pub fn pump_once(&mut self) -> Result<Option<Sample>, ScopeError> {
        let Some(line) = self.source.next_line()? else {
            return Ok(None);
        };
        let sample = self.format.parse(&line)?;
        self.state.push(&sample)?;
        self.lines += 1;
        Ok(Some(sample))
    }
    /// Number of lines accepted so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }
    pub fn frame(&self) -> PlotFrame {
        self.state.frame()
    }
    pub fn source(&self) -> &S {
        &self.source
    }
}
