//! This is the graphical coin flip simulator: a button-driven window with
//! running statistics, a timed auto-flip mode and a live chart of the
//! percentage imbalance between heads and tails.

extern crate eframe;
extern crate egui_plot;
extern crate env_logger;
extern crate log;
extern crate rand;

use eframe::egui::{self, ViewportBuilder};
use egui_plot::{Corner, HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use coinflip::autoflip::AutoFlip;
use coinflip::tracker::FlipTracker;
use coinflip::Outcome;
use rand::rngs::ThreadRng;

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

/// Number of flips retained for the chart.
const HISTORY_CAPACITY: usize = 100;

/// How long the face of the last flip stays on screen.
const FACE_HOLD: Duration = Duration::from_secs(1);

/// Number of recent outcomes shown in the statistics box.
const RECENT_FLIPS: usize = 20;

/// Default delay between auto-flips, in milliseconds.
const DEFAULT_SPEED_MS: u64 = 500;

const LINE_BLUE: egui::Color32 = egui::Color32::from_rgb(70, 130, 230);
const AXIS_GRAY: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);

struct FlipApp {
    tracker: FlipTracker,
    rng: ThreadRng,
    /// The face shown on screen, cleared again after a short hold.
    last_outcome: Option<Outcome>,
    face_until: Option<Instant>,
    auto_flip_on: bool,
    auto_flip: Option<AutoFlip>,
    speed_ms: u64,
    /// Flip requests posted by the timer thread. The timer never touches
    /// the tracker; every flip is applied on the UI thread.
    ticks: Receiver<()>,
    tick_sender: Sender<()>,
}

impl FlipApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (tick_sender, ticks) = mpsc::channel();
        FlipApp {
            tracker: FlipTracker::bounded(HISTORY_CAPACITY),
            rng: rand::thread_rng(),
            last_outcome: None,
            face_until: None,
            auto_flip_on: false,
            auto_flip: None,
            speed_ms: DEFAULT_SPEED_MS,
            ticks,
            tick_sender,
        }
    }

    fn do_flip(&mut self) {
        let outcome = self.tracker.flip(&mut self.rng);
        self.last_outcome = Some(outcome);
        self.face_until = Some(Instant::now() + FACE_HOLD);
    }

    fn start_auto_flip(&mut self, ctx: &egui::Context) {
        let sender = self.tick_sender.clone();
        let ctx = ctx.clone();
        self.auto_flip = Some(AutoFlip::start(self.speed_ms, move || {
            if sender.send(()).is_ok() {
                ctx.request_repaint();
            }
        }));
    }

    fn draw_chart(&self, ui: &mut egui::Ui) {
        let series = self.tracker.percentage_series();
        let points: Vec<[f64; 2]> = series
            .iter()
            .enumerate()
            .map(|(i, &pct)| [(i + 1) as f64, pct])
            .collect();

        let height = (ui.available_height() - 8.0).max(160.0);
        Plot::new("convergence")
            .height(height)
            .x_axis_label("Trials")
            .y_axis_label("Excess Heads Over Tails (Percentage)")
            .include_y(-50.0)
            .include_y(50.0)
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                plot_ui.hline(
                    HLine::new(0.0)
                        .color(AXIS_GRAY)
                        .style(LineStyle::dashed_dense())
                        .name("Equal (50/50)"),
                );
                if !points.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(points.clone()))
                            .color(LINE_BLUE)
                            .width(2.0)
                            .name("Excess Heads Over Tails (%)"),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(points))
                            .color(LINE_BLUE)
                            .radius(2.0)
                            .name("Excess Heads Over Tails (%)"),
                    );
                }
            });
    }
}

impl eframe::App for FlipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the flips requested by the timer thread here, on the thread
        // that owns the tracker.
        while self.ticks.try_recv().is_ok() {
            self.do_flip();
        }

        if let Some(until) = self.face_until {
            let now = Instant::now();
            if now >= until {
                self.last_outcome = None;
                self.face_until = None;
            } else {
                ctx.request_repaint_after(until - now);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Coin Flip Simulator");
                ui.add_space(8.0);

                let face = match self.last_outcome {
                    Some(Outcome::Heads) => "HEADS!",
                    Some(Outcome::Tails) => "TAILS!",
                    None => "",
                };
                ui.add_sized(
                    [200.0, 48.0],
                    egui::Label::new(egui::RichText::new(face).size(32.0).strong()),
                );

                if ui.button("Flip Coin").clicked() {
                    self.do_flip();
                }
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("Statistics").strong());
                let stats = self.tracker.stats();
                ui.horizontal(|ui| {
                    ui.label("Heads:");
                    ui.label(egui::RichText::new(stats.heads.to_string()).strong());
                    ui.separator();
                    ui.label("Tails:");
                    ui.label(egui::RichText::new(stats.tails.to_string()).strong());
                    ui.separator();
                    ui.label("Total Flips:");
                    ui.label(egui::RichText::new(stats.total.to_string()).strong());
                });

                let history = self.tracker.history();
                let skip = history.len().saturating_sub(RECENT_FLIPS);
                let recent: String = history.iter().skip(skip).map(|o| o.as_char()).collect();
                ui.label(egui::RichText::new(format!("Recent: {}", recent)).monospace());
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.checkbox(&mut self.auto_flip_on, "Auto-flip").changed() {
                    if self.auto_flip_on {
                        self.start_auto_flip(ctx);
                    } else {
                        // Dropping the handle asks the timer thread to exit.
                        self.auto_flip = None;
                    }
                }

                ui.label("Speed (ms):");
                let speed = ui.add(egui::Slider::new(&mut self.speed_ms, 100..=2000).step_by(100.0));
                if speed.changed() {
                    if let Some(auto) = &self.auto_flip {
                        auto.set_interval_ms(self.speed_ms);
                    }
                }

                if ui.button("Reset").clicked() {
                    self.tracker.reset();
                    self.last_outcome = None;
                    self.face_until = None;
                }
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.label(egui::RichText::new("Cumulative Results").strong());
                ui.vertical_centered(|ui| {
                    ui.label("The Law of Large Numbers");
                });
                self.draw_chart(ui);
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::builder().format_timestamp(None).init();
    log::info!("Starting the graphical coin flip simulator");

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Coin Flip Simulator",
        native_options,
        Box::new(|cc| Ok(Box::new(FlipApp::new(cc)))),
    )
}
