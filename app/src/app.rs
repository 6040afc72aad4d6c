use crate::ui;

use ecolor::Hsva;
use eframe::egui::{self, Color32};
use eframe::{App, Frame};
use ndarray::Array1;
use petal::{predict, Algorithm, PredictError, FEATURE_DIM};

/// The main application struct.
/// All transient session state lives here and is passed to the drawing
/// functions in the `ui` module; there is no global singleton.
pub struct PlaygroundApp {
    /// Raw text of the four feature inputs, parsed on demand.
    pub feature_text: [String; FEATURE_DIM],
    /// The algorithm currently selected in the UI.
    pub algorithm: Algorithm,
    /// The result of the last explicit Predict request, or `None` before the
    /// first one. Editing an input does not clear this; the old label stays
    /// visible until the user presses Predict again.
    pub last_prediction: Option<Result<&'static str, PredictError>>,
}

impl Default for PlaygroundApp {
    /// Creates the application with some default input values.
    fn default() -> Self {
        Self {
            feature_text: ["5", "3", "1", "0.2"].map(String::from),
            algorithm: Algorithm::Knn,
            last_prediction: None,
        }
    }
}

impl App for PlaygroundApp {
    /// The main update loop, called by eframe on every frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ui::draw_side_panel(self, ctx);
        ui::draw_central_panel(self, ctx);
    }
}

/// Parses one feature input. Anything that does not read as a number,
/// including an empty field, is taken as zero; the classifiers never see raw
/// text.
pub fn parse_feature(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

impl PlaygroundApp {
    /// Assembles the query vector from the current input fields.
    pub fn features(&self) -> Array1<f64> {
        self.feature_text
            .iter()
            .map(|text| parse_feature(text))
            .collect()
    }

    /// Runs the selected classifier against the current inputs. This is the
    /// only writer of `last_prediction`.
    pub fn run_prediction(&mut self) {
        let features = self.features();
        self.last_prediction = Some(predict(self.algorithm, features.view()));
    }

    /// Generates a consistent color for a class label using a simple hash.
    /// This can be used across the app to ensure 'setosa' is always the same color.
    pub fn class_color(label: &str) -> Color32 {
        let hash = label
            .bytes()
            .fold(0u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as u32));

        let golden_ratio_conjugate = 0.61803398875;
        let hue = (hash as f32 * golden_ratio_conjugate).fract();

        let hsva = Hsva { h: hue, s: 0.85, v: 0.9, a: 1.0 };
        Color32::from(hsva)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_text_coerces_to_zero() {
        assert_eq!(parse_feature(""), 0.0);
        assert_eq!(parse_feature("abc"), 0.0);
        assert_eq!(parse_feature("1.2.3"), 0.0);
        assert_eq!(parse_feature(" 4.8 "), 4.8);
        assert_eq!(parse_feature("-1.5"), -1.5);
    }

    #[test]
    fn test_default_inputs_predict_setosa() {
        let mut app = PlaygroundApp::default();
        assert!(app.last_prediction.is_none());
        app.run_prediction();
        assert_eq!(app.last_prediction, Some(Ok("setosa")));
    }

    #[test]
    fn test_editing_inputs_keeps_the_last_prediction() {
        let mut app = PlaygroundApp::default();
        app.run_prediction();
        let before = app.last_prediction.clone();

        app.feature_text[2] = "6.0".to_string();
        assert_eq!(app.last_prediction, before);

        app.run_prediction();
        assert_eq!(app.last_prediction, Some(Ok("virginica")));
    }

    #[test]
    fn test_switching_algorithm_does_not_predict_by_itself() {
        let mut app = PlaygroundApp::default();
        app.run_prediction();
        let before = app.last_prediction.clone();

        app.algorithm = Algorithm::DecisionTree;
        assert_eq!(app.last_prediction, before);
    }

    #[test]
    fn test_prediction_is_repeatable() {
        let mut app = PlaygroundApp::default();
        app.feature_text = ["6.1", "2.8", "4.7", "1.2"].map(String::from);
        app.run_prediction();
        let first = app.last_prediction.clone();
        app.run_prediction();
        assert_eq!(app.last_prediction, first);
        assert_eq!(first, Some(Ok("versicolor")));
    }
}
