use super::*;

fn labels() -> SubmitLabels {
    SubmitLabels { idle: "Send Message".into(), sending: "Sending...".into(), sent: "Message Sent!".into() }
}

#[test]
fn submit_only_from_idle() {
    assert_eq!(SubmitPhase::Idle.submit(), Some(SubmitPhase::Sending));
    assert_eq!(SubmitPhase::Sending.submit(), None);
    assert_eq!(SubmitPhase::Sent.submit(), None);
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut phase = SubmitPhase::Idle.submit().unwrap();
    let mut seen = vec![phase];
    while phase != SubmitPhase::Idle {
        phase = phase.advance();
        seen.push(phase);
    }
    assert_eq!(seen, vec![SubmitPhase::Sending, SubmitPhase::Sent, SubmitPhase::Idle]);
}

#[test]
fn durations_follow_phase() {
    assert_eq!(SubmitPhase::Idle.duration_ms(2_000, 3_000), None);
    assert_eq!(SubmitPhase::Sending.duration_ms(2_000, 3_000), Some(2_000));
    assert_eq!(SubmitPhase::Sent.duration_ms(2_000, 3_000), Some(3_000));
}

#[test]
fn button_disabled_outside_idle() {
    assert!(!SubmitPhase::Idle.button_disabled());
    assert!(SubmitPhase::Sending.button_disabled());
    assert!(SubmitPhase::Sent.button_disabled());
}

#[test]
fn labels_track_phase() {
    let labels = labels();
    assert_eq!(SubmitPhase::Idle.label(&labels), "Send Message");
    assert_eq!(SubmitPhase::Sending.label(&labels), "Sending...");
    assert_eq!(SubmitPhase::Sent.label(&labels), "Message Sent!");
}

#[test]
fn label_goes_to_dedicated_child_when_present() {
    assert_eq!(LabelSlot::pick(true, true), LabelSlot::Child);
}

#[test]
fn plain_text_button_takes_label_directly() {
    assert_eq!(LabelSlot::pick(false, false), LabelSlot::Button);
}

#[test]
fn button_markup_without_label_child_is_kept() {
    assert_eq!(LabelSlot::pick(false, true), LabelSlot::Untouched);
}
