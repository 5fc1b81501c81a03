//! End-to-end tests against real artifact files on disk.
//!
//! Writes JSON linear-classifier artifacts with known weights into a temp
//! directory, loads them through the startup loader, and runs both
//! screening steps against them.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use pulmoscreen::adapters::model::ModelSet;
use pulmoscreen::application::handlers::{
    AssessLungRiskCommand, AssessLungRiskHandler, PredictDrugResponseCommand,
    PredictDrugResponseHandler,
};
use pulmoscreen::config::ModelsConfig;
use pulmoscreen::ports::ClassifierModel;
use pulmoscreen::domain::screening::{DrugResponseVerdict, LungRiskVerdict};

/// Lung artifact whose decision score is driven entirely by the smoking
/// feature (index 2): smoking >= 1 predicts "YES".
fn write_lung_artifact(dir: &TempDir) -> PathBuf {
    let mut weights = vec![0.0; 15];
    weights[2] = 1.0;
    write_artifact(
        dir,
        "lung.json",
        &serde_json::json!({
            "name": "lung_risk",
            "n_features": 15,
            "weights": weights,
            "intercept": -0.5,
            "classes": ["NO", "YES"],
        }),
    )
}

/// Drug artifact driven by liver function (index 11): with weight 1.0 and
/// intercept -1.0, liver_function_score > 1.0 predicts class 1.
fn write_drug_artifact(dir: &TempDir) -> PathBuf {
    let mut weights = vec![0.0; 12];
    weights[11] = 1.0;
    write_artifact(
        dir,
        "drug.json",
        &serde_json::json!({
            "name": "drug_response",
            "n_features": 12,
            "weights": weights,
            "intercept": -1.0,
            "classes": [0, 1],
        }),
    )
}

fn write_artifact(dir: &TempDir, file: &str, json: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(file);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(json.to_string().as_bytes()).unwrap();
    path
}

fn load_models(dir: &TempDir) -> ModelSet {
    let config = ModelsConfig {
        lung_artifact_path: write_lung_artifact(dir),
        drug_artifact_path: write_drug_artifact(dir),
    };
    ModelSet::load(&config).unwrap()
}

fn lung_command(smoking: u8) -> AssessLungRiskCommand {
    AssessLungRiskCommand {
        gender: "F".to_string(),
        age: 51.0,
        smoking,
        yellow_fingers: 0,
        anxiety: 0,
        peer_pressure: 0,
        chronic_disease: 0,
        fatigue: 0,
        allergy: 0,
        wheezing: 0,
        alcohol_consuming: 0,
        coughing: 0,
        shortness_of_breath: 0,
        swallowing_difficulty: 0,
        chest_pain: 0,
    }
}

fn drug_command(liver_function_score: f64) -> PredictDrugResponseCommand {
    PredictDrugResponseCommand {
        age: 51.0,
        sex: 0.0,
        weight: 64.0,
        blood_pressure: 118.0,
        cholesterol: 187.0,
        glucose: 90.0,
        genetic_marker_1: 0.4,
        genetic_marker_2: 0.9,
        drug_dosage: 25.0,
        drug_duration: 30.0,
        previous_conditions: 1.0,
        liver_function_score,
    }
}

#[tokio::test]
async fn lung_step_runs_against_a_loaded_artifact() {
    let dir = TempDir::new().unwrap();
    let models = load_models(&dir);
    let handler = AssessLungRiskHandler::new(models.lung);

    let smoker = handler.handle(lung_command(2)).await.unwrap();
    assert_eq!(smoker.verdict, LungRiskVerdict::Elevated);
    assert!(smoker.show_drug_step);

    let non_smoker = handler.handle(lung_command(0)).await.unwrap();
    assert_eq!(non_smoker.verdict, LungRiskVerdict::Low);
    assert!(!non_smoker.show_drug_step);
}

#[tokio::test]
async fn drug_step_runs_against_a_loaded_artifact() {
    let dir = TempDir::new().unwrap();
    let models = load_models(&dir);
    let handler = PredictDrugResponseHandler::new(models.drug);

    let healthy_liver = handler.handle(drug_command(1.5)).await.unwrap();
    assert_eq!(healthy_liver.verdict, DrugResponseVerdict::LikelyResponder);

    let impaired_liver = handler.handle(drug_command(0.4)).await.unwrap();
    assert_eq!(
        impaired_liver.verdict,
        DrugResponseVerdict::UnlikelyResponder
    );
}

#[tokio::test]
async fn both_models_share_the_loaded_set() {
    let dir = TempDir::new().unwrap();
    let models = load_models(&dir);
    assert_eq!(
        models.model_names(),
        vec!["lung_risk".to_string(), "drug_response".to_string()]
    );

    // Handlers hold Arc clones of the startup-loaded models.
    let lung = Arc::clone(&models.lung);
    assert_eq!(lung.n_features(), 15);
    assert_eq!(models.drug.n_features(), 12);
}
