use super::*;

#[test]
fn sources_require_fallback() {
    assert_eq!(ImageSources::from_attributes(Some("a.webp".into()), None), None);
    assert_eq!(ImageSources::from_attributes(Some("a.webp".into()), Some("  ".into())), None);
}

#[test]
fn sources_keep_optional_responsive_format() {
    let sources = ImageSources::from_attributes(Some("suite.webp".into()), Some("suite.jpg".into())).unwrap();
    assert_eq!(sources.responsive.as_deref(), Some("suite.webp"));
    assert_eq!(sources.fallback, "suite.jpg");

    let sources = ImageSources::from_attributes(Some(String::new()), Some("suite.jpg".into())).unwrap();
    assert_eq!(sources.responsive, None);
}

#[test]
fn inactive_thumbnail_takes_over_marker() {
    let handoff = plan_handoff(&[true, false, false], 2, true).unwrap();
    assert_eq!(handoff, Handoff { deactivate: vec![0], activate: 2 });
}

#[test]
fn already_active_thumbnail_is_noop() {
    assert_eq!(plan_handoff(&[false, true], 1, true), None);
}

#[test]
fn missing_target_image_is_noop() {
    assert_eq!(plan_handoff(&[true, false], 1, false), None);
}

#[test]
fn out_of_range_click_is_noop() {
    assert_eq!(plan_handoff(&[true, false], 4, true), None);
}

#[test]
fn group_without_active_marker_just_activates() {
    let handoff = plan_handoff(&[false, false], 0, true).unwrap();
    assert!(handoff.deactivate.is_empty());
    assert_eq!(handoff.activate, 0);
}

#[test]
fn responsive_format_replaces_source_srcset() {
    let sources = ImageSources::from_attributes(Some("suite.webp".into()), Some("suite.jpg".into())).unwrap();
    assert_eq!(sources.source_update(), SourceUpdate::Set("suite.webp"));
}

#[test]
fn fallback_only_thumbnail_clears_source_srcset() {
    let sources = ImageSources::from_attributes(None, Some("suite.jpg".into())).unwrap();
    assert_eq!(sources.source_update(), SourceUpdate::Clear);
    assert_eq!(sources.fallback, "suite.jpg");
}
