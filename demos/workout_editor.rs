//! Reorder the exercises of a workout by dragging them.

use eframe::egui;
use egui_reorder::ReorderableList;

struct App {
    exercises: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            exercises: [
                "Back Squat 5x5",
                "Romanian Deadlift 3x8",
                "Leg Press 3x12",
                "Leg Curl 3x12",
                "Standing Calf Raise 4x15",
                "Plank 3x60s",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Leg day");
            ui.label("Drag an exercise to reorder. Drag past the list edge to auto-scroll.");
            ui.separator();

            let response = ReorderableList::new("exercises").max_height(160.0).show(
                ui,
                &mut self.exercises,
                |ui, index, exercise, row| {
                    let text = format!("{}. {exercise}", index + 1);
                    if row.dragging {
                        ui.strong(text);
                    } else {
                        ui.label(text);
                    }
                },
            );

            if let Some(moved) = response.moved {
                log::info!("moved exercise {} -> {}", moved.from, moved.to);
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 420.0])
            .with_title("egui_reorder demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_reorder demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
