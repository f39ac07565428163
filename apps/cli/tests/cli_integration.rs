use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn scratch_file(test_name: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let path = std::env::temp_dir().join(format!("skincheck_{test_name}_{nanos}"));
    std::fs::write(&path, contents).expect("write scratch file");
    path
}

fn run_cli(args: &[&str]) -> (i32, Value) {
    let exe = env!("CARGO_BIN_EXE_skincheck");
    let out = Command::new(exe)
        .args(args)
        .env_remove("SKINCHECK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run skincheck");

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    let code = out.status.code().unwrap_or(-1);
    let json: Value = if code == 0 {
        serde_json::from_str(&stdout).unwrap_or(Value::Null)
    } else {
        serde_json::from_str(&stderr).unwrap_or(Value::Null)
    };
    (code, json)
}

fn run_cli_text(args: &[&str]) -> (i32, String) {
    let out = Command::new(env!("CARGO_BIN_EXE_skincheck"))
        .args(args)
        .env_remove("SKINCHECK_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run skincheck");
    let code = out.status.code().unwrap_or(-1);
    (code, String::from_utf8_lossy(&out.stdout).into_owned())
}

const OILY_ACNE_CONTEXT: &str = r#"{
    "profile": {"skin_type": "oily"},
    "allergies": ["fragrance"],
    "goals": [{"goal_name": "Reduce Acne", "priority": 1}]
}"#;

#[test]
fn analyze_wraps_result_in_envelope() {
    let ctx = scratch_file("analyze_ctx", OILY_ACNE_CONTEXT);
    let (code, json) = run_cli(&[
        "--json",
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--ingredients",
        "Water, Niacinamide, Glycerin, Fragrance",
    ]);

    assert_eq!(code, 0);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["command"], "analyze");
    assert!(json["error"].is_null());

    let data = &json["data"];
    assert_eq!(data["suitability_score"], 55);
    assert_eq!(data["goal_score"], 86);
    assert_eq!(data["score_mode"], "independent");
    assert_eq!(data["goal_effectiveness"][0]["priority"], 1);
    assert_eq!(data["goal_effectiveness"][0]["weight"], 1.0);
    let warnings = data["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w.to_string().contains("fragrance")));
}

#[test]
fn analyze_reads_ocr_label_file() {
    let ctx = scratch_file("label_ctx", "{}");
    let label = scratch_file(
        "label_text",
        "HYDRA CREAM\nIngredients: Aqua, Glycerin, Ceramide NP.\nDirections: apply daily",
    );
    let (code, json) = run_cli(&[
        "--json",
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--label",
        label.to_str().unwrap(),
    ]);

    assert_eq!(code, 0);
    assert_eq!(
        json["data"]["extracted_ingredients"],
        serde_json::json!(["aqua", "glycerin", "ceramide np"])
    );
}

#[test]
fn blended_config_changes_goal_score() {
    let ctx = scratch_file(
        "blend_ctx",
        r#"{"goals": [{"goal_name": "Hydration", "priority": 1}]}"#,
    );
    let cfg = scratch_file("blend_cfg", "score_mode = \"blended\"\n");
    let (code, json) = run_cli(&[
        "--json",
        "--config",
        cfg.to_str().unwrap(),
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--ingredients",
        "glycerin",
    ]);

    assert_eq!(code, 0);
    assert_eq!(json["data"]["score_mode"], "blended");
    assert_eq!(json["data"]["goal_score"], 89);
}

#[test]
fn invalid_context_is_input_error() {
    let ctx = scratch_file(
        "bad_ctx",
        r#"{"goals": [{"goal_name": "Hydration", "priority": 9}]}"#,
    );
    let (code, json) = run_cli(&[
        "--json",
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--ingredients",
        "water",
    ]);

    assert_eq!(code, 1);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["type"], "InputError");
}

#[test]
fn missing_context_file_is_io_error() {
    let (code, json) = run_cli(&[
        "--json",
        "analyze",
        "--context",
        "/nonexistent/skincheck/ctx.json",
        "--ingredients",
        "water",
    ]);
    assert_eq!(code, 2);
    assert_eq!(json["error"]["type"], "IoError");
}

#[test]
fn lookup_applies_skin_type() {
    let (code, json) = run_cli(&[
        "--json",
        "lookup",
        "niacinamide",
        "Reduce Acne",
        "--skin-type",
        "oily",
    ]);
    assert_eq!(code, 0);
    assert_eq!(json["data"]["ingredient"], "Niacinamide");
    assert_eq!(json["data"]["skin_type"], "oily");
    assert_eq!(json["data"]["effectiveness"], 86);
    assert_eq!(
        json["data"]["goals"],
        serde_json::json!([
            "Reduce Acne",
            "Skin Brightening",
            "Oil Control",
            "Anti-Aging"
        ])
    );
}

#[test]
fn location_fills_unset_season_and_climate() {
    let ctx = scratch_file("location_ctx", r#"{"profile": {"climate_type": "Continental"}}"#);
    let (code, json) = run_cli(&[
        "--json",
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--ingredients",
        "ceramide np, squalane",
        "--latitude",
        "52.5",
        "--month",
        "1",
        "--temp",
        "2",
        "--weather-code",
        "3",
    ]);

    assert_eq!(code, 0);
    assert_eq!(json["data"]["profile"]["current_season"], "Winter");
    assert_eq!(json["data"]["profile"]["climate_type"], "Continental");
    // winter in a continental climate without a humectant
    assert_eq!(json["data"]["suitability_score"], 75);
}

#[test]
fn text_breakdown_shows_tier_weights() {
    let ctx = scratch_file(
        "weights_ctx",
        r#"{"goals": [
            {"goal_name": "Hydration", "priority": 1},
            {"goal_name": "Reduce Acne", "priority": 2},
            {"goal_name": "Anti-Aging", "priority": 3}
        ]}"#,
    );
    let (code, stdout) = run_cli_text(&[
        "analyze",
        "--context",
        ctx.to_str().unwrap(),
        "--ingredients",
        "glycerin, retinol",
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("P1 Hydration: 90 (weight 50%)"), "{stdout}");
    assert!(stdout.contains("(weight 37%)"), "{stdout}");
    assert!(stdout.contains("(weight 13%)"), "{stdout}");
}

#[test]
fn lookup_rejects_unknown_skin_type() {
    let out = Command::new(env!("CARGO_BIN_EXE_skincheck"))
        .args(["lookup", "niacinamide", "Reduce Acne", "--skin-type", "leathery"])
        .output()
        .expect("failed to run skincheck");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown skin type: leathery"));
}

#[test]
fn lookup_unknown_ingredient_fails() {
    let (code, json) = run_cli(&["--json", "lookup", "unobtainium", "Hydration"]);
    assert_eq!(code, 3);
    assert_eq!(json["error"]["type"], "NotFound");
}

#[test]
fn suggest_excludes_and_limits() {
    let (code, json) = run_cli(&[
        "--json",
        "suggest",
        "Hydration",
        "--exclude",
        "glycerin",
        "--limit",
        "2",
    ]);
    assert_eq!(code, 0);
    let names = json["data"]["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["ingredient"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Hyaluronic Acid", "Ceramides"]);
}

#[test]
fn suggest_unknown_goal_lists_known_goals() {
    let (code, stdout) = run_cli_text(&["suggest", "Glass Skin"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No ingredients on file for this goal."), "{stdout}");
    assert!(stdout.contains("Known goals: Reduce Acne, Skin Brightening"), "{stdout}");
}
