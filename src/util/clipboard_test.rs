use super::*;

#[test]
fn copy_target_trims_text() {
    assert_eq!(copy_target(Some("  12 rue de Rome  ".to_owned())), Some("12 rue de Rome".to_owned()));
}

#[test]
fn copy_target_rejects_blank_or_missing() {
    assert_eq!(copy_target(Some("   ".to_owned())), None);
    assert_eq!(copy_target(None), None);
}

#[test]
fn first_click_saves_current_label() {
    assert_eq!(label_to_restore(None, "<i></i> Copy".to_owned()), Some("<i></i> Copy".to_owned()));
}

#[test]
fn repeated_click_keeps_original_label() {
    // The control already shows the confirmation label.
    assert_eq!(label_to_restore(Some("true".to_owned()), COPIED_LABEL.to_owned()), None);
}
