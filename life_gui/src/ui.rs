// ui.rs - Controls, canvas bindings and console panel

use std::time::Instant;

use eframe::egui;
use egui::{Color32, RichText, Vec2};

use crate::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Let the controller's timer fire if it is due
        self.controller.poll(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.controller.is_running() { "⏸ Stop" } else { "▶ Run" };
                if ui.button(button_text).clicked() {
                    if self.controller.is_running() {
                        self.controller.stop();
                    } else {
                        self.controller.run();
                    }
                }

                let stopped = !self.controller.is_running();
                if ui.add_enabled(stopped, egui::Button::new("⏭ Step")).clicked() {
                    self.controller.manual_step();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.controller.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.controller.randomize(self.random_density, &mut rand::thread_rng());
                }

                ui.separator();
                ui.label(format!("Generation: {}", self.controller.generation()));
            });

            ui.separator();
            ui.label("Click cells to toggle them. With the pointer over the grid, D steps and W clears.");
            ui.separator();

            // Canvas
            let (response, painter) =
                ui.allocate_painter(Vec2::splat(self.canvas_size), egui::Sense::click());
            let canvas = response.rect;

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((x, y)) = self.controller.sink().cell_at(canvas, pos) {
                        if let Err(err) = self.controller.toggle_cell(x, y) {
                            tracing::debug!(%err, "Click outside the grid");
                        }
                    }
                }
            }

            // Key bindings only apply while the canvas is hovered and the console is not focused
            if response.hovered() && !ctx.wants_keyboard_input() {
                let (step, clear) = ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::W)));
                if step && !self.controller.is_running() {
                    self.controller.manual_step();
                }
                if clear {
                    self.controller.clear();
                }
            }

            self.controller.sink().paint(&painter, canvas, self.palette);

            ui.separator();

            // Statistics
            let grid = self.controller.grid();
            let cells = grid.width() * grid.height();
            let live_cells = grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Size: {}x{}", grid.width(), grid.height()));
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / cells as f32 * 100.0));
                ui.label(format!("Frames: {}", self.controller.sink().frames()));
            });

            ui.separator();

            // Console
            for entry in self.console.history().iter() {
                ui.label(RichText::new(format!("> {}", entry.input)).monospace().color(Color32::GRAY));
                ui.label(RichText::new(&entry.output).monospace());
            }

            let input = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("type cmds for a list of commands")
                    .desired_width(f32::INFINITY),
            );
            if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let line = std::mem::take(&mut self.input);
                self.console.submit(&mut self.controller, &line);
                input.request_focus();
            }
        });

        // Wake up again when the next generation is due
        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
