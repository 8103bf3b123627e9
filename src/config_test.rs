use super::*;

#[test]
fn defaults_validate() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.log_level().unwrap(), log::LevelFilter::Info);
}

#[test]
fn defaults_carry_two_scroll_spy_instances() {
    let cfg = SiteConfig::default();
    let names = cfg.scroll_spy.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["policies", "attractions"]);
    assert_ne!(cfg.scroll_spy[0].bottom_margin_pct, cfg.scroll_spy[1].bottom_margin_pct);
}

#[test]
fn defaults_carry_single_and_stagger_reveal_groups() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.reveal.len(), 2);
    assert_eq!(cfg.reveal[0].stagger_ms, None);
    assert_eq!(cfg.reveal[1].stagger_ms, Some(STAGGER_STEP_MS));
}

#[test]
fn empty_object_is_all_defaults() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(
        r#"{ "header": { "thresholdPx": 80, "throttle": false }, "logLevel": "debug" }"#,
    )
    .unwrap();
    assert_eq!(cfg.header.threshold_px, 80.0);
    assert!(!cfg.header.throttle);
    assert_eq!(cfg.header.selector, ".header");
    assert_eq!(cfg.log_level().unwrap(), log::LevelFilter::Debug);
    assert_eq!(cfg.gallery, GalleryConfig::default());
}

#[test]
fn scroll_spy_list_replaces_defaults() {
    let cfg = SiteConfig::from_json(
        r#"{ "scrollSpy": [ { "name": "faq", "sectionSelector": ".faq", "linkSelector": ".faq-nav a" } ] }"#,
    )
    .unwrap();
    assert_eq!(cfg.scroll_spy.len(), 1);
    assert_eq!(cfg.scroll_spy[0].name, "faq");
    assert_eq!(cfg.scroll_spy[0].active_class, ACTIVE_CLASS);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "reveal": [ { "threshold": 1.5 } ] }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn out_of_range_bottom_margin_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "scrollSpy": [ { "bottomMarginPct": 120 } ] }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn empty_selector_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "nav": { "buttonSelector": " " } }"#).unwrap_err();
    assert!(err.to_string().contains("nav.buttonSelector"));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::InvalidConfig(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{ header: ").unwrap_err();
    assert!(matches!(err, BehaviorError::ConfigParse(_)));
}

#[test]
fn contact_label_selector_overrides_and_validates() {
    let cfg = SiteConfig::from_json(r#"{ "contact": { "labelSelector": ".label" } }"#).unwrap();
    assert_eq!(cfg.contact.label_selector, ".label");
    assert_eq!(cfg.contact.form_selector, ContactConfig::default().form_selector);

    let err = SiteConfig::from_json(r#"{ "contact": { "labelSelector": "" } }"#).unwrap_err();
    assert!(err.to_string().contains("contact.labelSelector"));
}
