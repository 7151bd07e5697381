use super::*;

#[test]
fn defaults_match_reference_behavior() {
    let cfg = GroupingConfig::default();
    assert_eq!(cfg.containment, ContainmentPolicy::FirstMatch);
    assert!(!cfg.parallel);
    assert_eq!(cfg.threads, None);
    assert!(cfg.writer.accept_unqualified);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg: GroupingConfig =
        serde_json::from_str(r#"{ "containment": "smallest_enclosing", "writer": { "allow_dtd": false } }"#)
            .unwrap();
    assert_eq!(cfg.containment, ContainmentPolicy::SmallestEnclosing);
    assert!(!cfg.writer.allow_dtd);
    assert_eq!(cfg.writer, WriterConfig {
        allow_dtd: false,
        ..WriterConfig::default()
    });
}

#[test]
fn zero_threads_is_rejected() {
    let cfg = GroupingConfig {
        threads: Some(0),
        ..GroupingConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(SketchError::Validation(_))));
}

#[test]
fn from_path_reads_and_validates() {
    let dir = std::env::temp_dir().join(format!("sketchpath-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{ "parallel": true, "threads": 2 }"#).unwrap();
    let cfg = GroupingConfig::from_path(&good).unwrap();
    assert!(cfg.parallel);
    assert_eq!(cfg.threads, Some(2));

    let bad = dir.join("bad.json");
    std::fs::write(&bad, r#"{ "writer": { "svg_namespace": "" } }"#).unwrap();
    assert!(GroupingConfig::from_path(&bad).is_err());

    assert!(GroupingConfig::from_path(&dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}
