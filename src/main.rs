// src/main.rs
mod config;
mod drivers;
mod engine;
mod gui;
mod types;
use anyhow::{anyhow, Context, Result};
use eframe::egui;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
// 入口函数
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = config::ScopeConfig::load_or_default(config::CONFIG_FILE)
        .with_context(|| format!("failed to load {}", config::CONFIG_FILE))?;
    log::info!(
        "variant {:?}, source {:?}, port {} @ {} baud",
        config.variant,
        config.source,
        config.port,
        config.baud_rate
    );
    // Ctrl-C 与关闭窗口共用同一个停止标志
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;
    let fatal = Arc::new(Mutex::new(None));
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 600.0])
        .with_min_inner_size([480.0, 320.0])
        .with_title("serial-scope");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_stop = Arc::clone(&stop);
    let app_fatal = Arc::clone(&fatal);
    eframe::run_native(
        "serial-scope",
        options,
        Box::new(move |cc| Box::new(gui::SerialScopeApp::new(cc, config, app_stop, app_fatal))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))?;
    stop.store(true, Ordering::SeqCst);
    let failure = fatal.lock().ok().and_then(|mut slot| slot.take());
    match failure {
        Some(err) => Err(anyhow!(err)),
        None => {
            println!("exiting");
            Ok(())
        }
    }
}
