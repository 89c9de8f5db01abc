use neteval_core::algorithms::Curve;
use neteval_core::config::EvaluationConfig;
use neteval_core::engine::Evaluator;
use neteval_core::output::write_report;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WasmEvaluationOptions {
    pub pr: bool,     // Precision-recall curve and AUPR
    pub roc: bool,    // ROC curve and AUROC
    pub motifs: bool, // Transitive / co-regulation errors
    pub sort: bool,   // Rank by descending score
}

#[wasm_bindgen]
pub struct EvaluationResult {
    report: String,
    possible_edges: usize,
    ranked_edges: usize,
    aupr: Option<f64>,
    auroc: Option<f64>,
    aupr_random: Option<f64>,
    pr_curve: Vec<(f64, f64)>,
    roc_curve: Vec<(f64, f64)>,
    false_positives: Option<usize>,
    transitive: Option<usize>,
    coregulation: Option<usize>,
    expected_transitive: Option<f64>,
    expected_coregulation: Option<f64>,
}

#[wasm_bindgen]
impl EvaluationResult {
    #[wasm_bindgen(getter)]
    pub fn report(&self) -> String {
        self.report.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn possible_edges(&self) -> usize {
        self.possible_edges
    }

    #[wasm_bindgen(getter)]
    pub fn ranked_edges(&self) -> usize {
        self.ranked_edges
    }

    #[wasm_bindgen(getter)]
    pub fn aupr(&self) -> Option<f64> {
        self.aupr
    }

    #[wasm_bindgen(getter)]
    pub fn auroc(&self) -> Option<f64> {
        self.auroc
    }

    #[wasm_bindgen(getter)]
    pub fn aupr_random(&self) -> Option<f64> {
        self.aupr_random
    }

    /// `[recall, precision]` pairs, empty unless PR was requested
    #[wasm_bindgen(getter)]
    pub fn pr_curve(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.pr_curve).map_err(JsValue::from)
    }

    /// `[fpr, tpr]` pairs, empty unless ROC was requested
    #[wasm_bindgen(getter)]
    pub fn roc_curve(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.roc_curve).map_err(JsValue::from)
    }

    #[wasm_bindgen(getter)]
    pub fn false_positives(&self) -> Option<usize> {
        self.false_positives
    }

    #[wasm_bindgen(getter)]
    pub fn transitive(&self) -> Option<usize> {
        self.transitive
    }

    #[wasm_bindgen(getter)]
    pub fn coregulation(&self) -> Option<usize> {
        self.coregulation
    }

    #[wasm_bindgen(getter)]
    pub fn expected_transitive(&self) -> Option<f64> {
        self.expected_transitive
    }

    #[wasm_bindgen(getter)]
    pub fn expected_coregulation(&self) -> Option<f64> {
        self.expected_coregulation
    }
}

fn curve_points(curve: &Curve) -> Vec<(f64, f64)> {
    curve.points().iter().map(|p| (p.x, p.y)).collect()
}

// Missing options mean the defaults (PR and ROC)
fn parse_options(options_js: JsValue) -> Result<WasmEvaluationOptions, JsValue> {
    if options_js.is_undefined() || options_js.is_null() {
        return Ok(WasmEvaluationOptions::default());
    }
    serde_wasm_bindgen::from_value(options_js)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

#[wasm_bindgen]
pub fn evaluate(
    gold_standard: &str,
    prediction: &str,
    options_js: JsValue,
) -> Result<EvaluationResult, JsValue> {
    let wasm_options = parse_options(options_js)?;

    // Threads are unavailable in the browser; the error analysis runs inline
    let config = EvaluationConfig {
        sort_predictions: wasm_options.sort,
        ..EvaluationConfig::from_flags(wasm_options.pr, wasm_options.roc, wasm_options.motifs)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let evaluator = Evaluator::new(config);
    let results = evaluator
        .evaluate_str(gold_standard, prediction)
        .map_err(|e| JsValue::from_str(&format!("Evaluation error: {}", e)))?;

    let mut report = Vec::new();
    write_report(&mut report, &results, &evaluator.config)
        .map_err(|e| JsValue::from_str(&format!("Output error: {}", e)))?;
    let report =
        String::from_utf8(report).map_err(|e| JsValue::from_str(&format!("UTF-8 error: {}", e)))?;

    let config = &evaluator.config;
    let areas = results.areas.as_ref();
    let motifs = results.motifs.as_ref();
    let (pr_curve, roc_curve) = match &results.curves {
        Some(curves) => (
            if config.compute_pr {
                curve_points(&curves.precision_recall)
            } else {
                Vec::new()
            },
            if config.compute_roc {
                curve_points(&curves.roc)
            } else {
                Vec::new()
            },
        ),
        None => (Vec::new(), Vec::new()),
    };

    Ok(EvaluationResult {
        report,
        possible_edges: results.network.possible_edges,
        ranked_edges: results.prediction.ranked,
        aupr: areas.filter(|_| config.compute_pr).map(|a| a.aupr),
        auroc: areas.filter(|_| config.compute_roc).map(|a| a.auroc),
        aupr_random: areas.map(|a| a.aupr_random),
        pr_curve,
        roc_curve,
        false_positives: motifs.map(|m| m.false_positives()),
        transitive: motifs.map(|m| m.observed.transitive),
        coregulation: motifs.map(|m| m.observed.coregulation),
        expected_transitive: motifs.map(|m| m.expected_transitive()),
        expected_coregulation: motifs.map(|m| m.expected_coregulation()),
    })
}
