// src/gui.rs
use crate::config::{ScopeConfig, Variant};
use crate::drivers::PlotFrame;
use crate::engine;
use crate::types::ScopeMessage;
use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const PALETTE: [Color32; 4] = [
    Color32::from_rgb(0, 255, 255),
    Color32::YELLOW,
    Color32::from_rgb(255, 0, 255),
    Color32::GREEN,
];
const MAX_LOG_LINES: usize = 8;

/// Why the window should go away.
#[derive(Clone, Debug, PartialEq)]
pub enum Exit {
    Interrupted,
    Failed(String),
}

/// Everything the UI knows, fed only by engine messages.
#[derive(Default)]
pub struct ViewState {
    pub source: Option<String>,
    pub frame: PlotFrame,
    pub samples_seen: u64,
    pub log_messages: Vec<String>,
    pub exit: Option<Exit>,
}

impl ViewState {
    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > MAX_LOG_LINES {
            self.log_messages.remove(0);
        }
    }

    pub fn apply(&mut self, msg: ScopeMessage) {
        match msg {
            ScopeMessage::Log(s) => self.log(&s),
            ScopeMessage::Connected(name) => {
                self.log(&format!("Reading {}", name));
                self.source = Some(name);
            }
            ScopeMessage::Frame(frame) => {
                self.samples_seen += 1;
                self.frame = frame;
            }
            ScopeMessage::Fatal(err) => {
                self.log(&format!("Error: {}", err));
                self.exit = Some(Exit::Failed(err));
            }
            ScopeMessage::Stopped => {
                self.log("exiting");
                if self.exit.is_none() {
                    self.exit = Some(Exit::Interrupted);
                }
            }
        }
    }
}

pub struct SerialScopeApp {
    config: ScopeConfig,
    view: ViewState,
    closing: bool,
    // 通讯管道
    rx: Receiver<ScopeMessage>,
    stop: Arc<AtomicBool>,
    fatal: Arc<Mutex<Option<String>>>,
}

impl SerialScopeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ScopeConfig,
        stop: Arc<AtomicBool>,
        fatal: Arc<Mutex<Option<String>>>,
    ) -> Self {
        let (tx, rx) = channel();
        let ctx = cc.egui_ctx.clone();
        // 启动后台引擎
        engine::spawn_thread(config.clone(), tx, Arc::clone(&stop), move || {
            ctx.request_repaint()
        });
        Self {
            config,
            view: ViewState::default(),
            closing: false,
            rx,
            stop,
            fatal,
        }
    }

    fn close(&mut self, ctx: &egui::Context) {
        if self.closing {
            return;
        }
        self.closing = true;
        self.stop.store(true, Ordering::SeqCst);
        if let Some(Exit::Failed(err)) = &self.view.exit {
            if let Ok(mut slot) = self.fatal.lock() {
                *slot = Some(err.clone());
            }
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn draw_plot(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("telemetry").legend(Legend::default());
        if self.config.variant == Variant::Rolling {
            let span = self.config.window_len as f64 * self.config.time_step;
            plot = plot
                .include_x(0.0)
                .include_x(span)
                .include_y(self.config.y_range[0])
                .include_y(self.config.y_range[1]);
        }
        plot.show(ui, |plot_ui| {
            for (idx, series) in self.view.frame.series.iter().enumerate() {
                let col = PALETTE[idx % PALETTE.len()];
                plot_ui.line(
                    Line::new(PlotPoints::new(series.points.clone()))
                        .name(&series.label)
                        .color(col),
                );
            }
        });
    }
}

impl eframe::App for SerialScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 消息处理
        while let Ok(msg) = self.rx.try_recv() {
            self.view.apply(msg);
        }
        // Ctrl-C raises the flag while the engine may still be blocked in a read.
        if self.stop.load(Ordering::SeqCst) && self.view.exit.is_none() {
            self.view.apply(ScopeMessage::Stopped);
        }
        if self.view.exit.is_some() {
            self.close(ctx);
        }

        // 2. UI 绘制
        egui::TopBottomPanel::bottom("log").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = self.view.source.as_deref().unwrap_or("connecting...");
                ui.label(format!("Source: {}", status));
                ui.separator();
                ui.label(format!("Lines: {}", self.view.samples_seen));
            });
            for m in &self.view.log_messages {
                ui.monospace(m);
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| self.draw_plot(ui));

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

impl Drop for SerialScopeApp {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}
