use crate::app::{parse_feature, PlaygroundApp};

use eframe::egui::{self, Color32, RichText, Ui};
use petal::Algorithm;

/// Draws the entire left-side panel with all the controls.
pub fn draw_side_panel(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel").show(ctx, |ui| {
        ui.heading("ML Playground");
        ui.separator();

        draw_algorithm_selector(app, ui);
        ui.separator();

        draw_feature_inputs(app, ui);
        ui.separator();

        // Prediction only happens on explicit request, never on every edit.
        if ui.button("Predict").clicked() {
            app.run_prediction();
        }
    });
}

/// Draws the central panel containing the prediction result.
pub fn draw_central_panel(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Prediction");
        ui.separator();

        match &app.last_prediction {
            None => {
                ui.label("No prediction yet. Fill in the features and press Predict.");
            }
            Some(Ok(label)) => {
                let color = PlaygroundApp::class_color(label);
                ui.colored_label(
                    color,
                    RichText::new(format!("Prediction: {}", label)).size(20.0),
                );
            }
            Some(Err(e)) => {
                ui.colored_label(Color32::from_gray(80), format!("Error: {}", e));
            }
        }
    });
}

fn draw_algorithm_selector(app: &mut PlaygroundApp, ui: &mut Ui) {
    ui.heading("Algorithm");

    egui::ComboBox::from_label("")
        .selected_text(app.algorithm.label())
        .show_ui(ui, |ui| {
            for algorithm in Algorithm::ALL {
                ui.selectable_value(&mut app.algorithm, algorithm, algorithm.label());
            }
        });
}

fn draw_feature_inputs(app: &mut PlaygroundApp, ui: &mut Ui) {
    ui.heading("Input Features");

    for (i, text) in app.feature_text.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            ui.label(format!("Feature {}", i + 1));
            ui.text_edit_singleline(text);
        });
        // Show what the classifier will actually receive for odd input.
        if text.trim().parse::<f64>().is_err() {
            ui.small(format!("read as {}", parse_feature(text)));
        }
    }
}
