// src/engine.rs
use crate::config::{ScopeConfig, SourceKind, Variant};
use crate::drivers::{serial, LineSource, Sample, ScopeError, ScopePipeline, SimulatedSource};
use crate::types::ScopeMessage;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

/// Starts the read loop on its own thread.
///
/// The thread owns the line source and the plot buffers; the UI only sees
/// `ScopeMessage`s. `notify` is called after every message so the UI can
/// wake up and repaint.
pub fn spawn_thread<F>(
    config: ScopeConfig,
    tx: Sender<ScopeMessage>,
    stop: Arc<AtomicBool>,
    notify: F,
) where
    F: Fn() + Send + 'static,
{
    thread::spawn(move || {
        let result = match config.source {
            SourceKind::Serial => serial::open(&config.port, config.baud_rate, config.timeout())
                .and_then(|source| run(source, &config, &tx, &stop, &notify)),
            SourceKind::Simulation => {
                let source = SimulatedSource::new(config.line_format(), config.sim_interval());
                run(source, &config, &tx, &stop, &notify)
            }
        };
        match result {
            Ok(()) if stop.load(Ordering::SeqCst) => {
                info!("interrupted, read loop finished");
                tx.send(ScopeMessage::Stopped).ok();
            }
            Ok(()) => {
                tx.send(ScopeMessage::Log("Source closed".to_owned())).ok();
            }
            Err(err) => {
                error!("read loop failed: {err}");
                tx.send(ScopeMessage::Fatal(err.to_string())).ok();
            }
        }
        notify();
    });
}

/// Runs the pipeline until the source ends, `stop` is raised, or a line
/// fails to read or parse.
pub fn run<S, F>(
    source: S,
    config: &ScopeConfig,
    tx: &Sender<ScopeMessage>,
    stop: &AtomicBool,
    notify: &F,
) -> Result<(), ScopeError>
where
    S: LineSource,
    F: Fn(),
{
    let mut pipeline = ScopePipeline::new(source, config.line_format(), config.plot_state());
    let name = pipeline.source().describe();
    info!("reading from {name}");
    tx.send(ScopeMessage::Connected(name)).ok();
    notify();
    while !stop.load(Ordering::SeqCst) {
        let index = pipeline.lines();
        let Some(sample) = pipeline.pump_once()? else {
            break;
        };
        match config.variant {
            Variant::Rolling => println!("{}", console_line(&sample, index)),
            Variant::Trace => debug!("sample {index}: {sample}"),
        }
        if tx.send(ScopeMessage::Frame(pipeline.frame())).is_err() {
            debug!("UI gone, leaving read loop");
            break;
        }
        notify();
    }
    Ok(())
}

/// `COM: a, b, c; i`, fields as received, `i` counting accepted lines from 0.
pub fn console_line(sample: &Sample, index: u64) -> String {
    format!("COM: {sample}; {index}")
}
