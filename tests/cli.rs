use std::process::Command;

use ci_overlap::SceneConfig;

fn ci_overlap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ci-overlap"))
}

#[test]
fn stats_prints_json_for_default_scene() {
    let out = ci_overlap()
        .args(["--stats", "105", "150", "205", "450"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["uniform_overlap"].as_f64(), Some(0.0));
    let t2 = json["t_stat_squared"].as_f64().unwrap();
    assert!((t2 - 9.905817888799355).abs() < 1e-9);
    let gaussian = json["gaussian_overlap"].as_f64().unwrap();
    assert!((gaussian - 0.004434087060927179).abs() < 1e-12);
    assert!((json["first"]["mean"].as_f64().unwrap() - 1.275).abs() < 1e-12);
    assert!((json["second"]["mean"].as_f64().unwrap() - 3.275).abs() < 1e-12);
}

#[test]
fn stats_accepts_negative_endpoints_and_pixels_per_unit() {
    let out = ci_overlap()
        .args(["--pixels-per-unit", "50", "--stats", "-100", "100", "-50", "50"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    // [-50, 50] inside [-100, 100]: ratio = 50 / 200
    let ratio = json["uniform_overlap"].as_f64().unwrap();
    assert!((ratio - 0.25).abs() < 1e-12);
}

#[test]
fn invalid_pixels_per_unit_is_rejected() {
    let out = ci_overlap()
        .args(["--pixels-per-unit", "0", "--stats", "105", "150", "205", "450"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("pixels_per_unit"));
}

#[test]
fn write_default_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.yaml");
    let out = ci_overlap()
        .arg("--write-default-config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(SceneConfig::load(&path).unwrap(), SceneConfig::default());
}

#[test]
fn stats_uses_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.yaml");
    std::fs::write(&path, "pixels_per_unit: 10\n").unwrap();

    let out = ci_overlap()
        .arg("--config")
        .arg(&path)
        .args(["--stats", "0", "20", "10", "30"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    // overlap 10 / (20 * 20) * 10
    let ratio = json["uniform_overlap"].as_f64().unwrap();
    assert!((ratio - 0.25).abs() < 1e-12);
}
