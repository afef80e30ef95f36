// src/drivers/mod.rs
pub mod buffer;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod serial;
pub mod sim;
pub mod source;
pub use buffer::{PlotFrame, PlotState, RollingWindow, Series, TimeAxis};
pub use error::ScopeError;
pub use parser::{LineFormat, NumberKind, Sample};
pub use pipeline::ScopePipeline;
pub use sim::SimulatedSource;
pub use source::{LineSource, ReaderSource, ScriptedSource};
