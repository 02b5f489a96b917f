use super::*;

#[test]
fn defaults_match_canonical_variant() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.ring_count, 16);
    assert_eq!(cfg.update_speed, 0.04);
    assert_eq!(cfg.content_scale, 0.75);
    assert_eq!(cfg.base_stroke_width, 30.0);
    assert_eq!(cfg.ring_color, Rgba8::WHITE);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let cfg =
        EngineConfig::from_json_str(r##"{ "ring_count": 32, "ring_color": "#ff8800" }"##).unwrap();
    assert_eq!(cfg.ring_count, 32);
    assert_eq!(cfg.ring_color, Rgba8::opaque(0xff, 0x88, 0x00));
    assert_eq!(cfg.update_speed, 0.04);
    assert_eq!(cfg.seed, None);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = EngineConfig::from_json_str(r#"{ "rings": 3 }"#).unwrap_err();
    assert!(matches!(err, RingfieldError::Serde(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    for json in [
        r#"{ "ring_count": 0 }"#,
        r#"{ "update_speed": 0.0 }"#,
        r#"{ "update_speed": -0.5 }"#,
        r#"{ "content_scale": 1.5 }"#,
        r#"{ "content_scale": 0.0 }"#,
        r#"{ "base_stroke_width": 0.0 }"#,
        r#"{ "base_stroke_width": 1e12 }"#,
        r#"{ "ring_count": 4097 }"#,
    ] {
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, RingfieldError::Validation(_)), "{json}");
    }
}

#[test]
fn missing_file_reports_path() {
    let err = EngineConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn field_params_mirror_config() {
    let cfg = EngineConfig {
        ring_count: 5,
        ..EngineConfig::default()
    };
    let p = cfg.field_params();
    assert_eq!(p.ring_count, 5);
    assert_eq!(p.base_stroke_width, 30.0);
}

#[test]
fn upper_bounds_are_enforced() {
    let huge_rings = EngineConfig {
        ring_count: usize::MAX,
        ..EngineConfig::default()
    };
    assert!(matches!(
        huge_rings.validate(),
        Err(RingfieldError::Validation(_))
    ));

    let at_limit = EngineConfig {
        ring_count: MAX_RING_COUNT,
        base_stroke_width: MAX_BASE_STROKE_WIDTH,
        ..EngineConfig::default()
    };
    assert!(at_limit.validate().is_ok());
}
