use super::*;

// =============================================================
// Submission state machine
// =============================================================

#[test]
fn starts_editing_with_no_error() {
    let submit = Submission::default();
    assert_eq!(submit.phase, FormPhase::Editing);
    assert_eq!(submit.error, None);
    assert!(!submit.in_flight());
}

#[test]
fn begin_enters_submitting() {
    let mut submit = Submission::default();
    assert!(submit.begin());
    assert_eq!(submit.phase, FormPhase::Submitting);
    assert!(submit.in_flight());
}

#[test]
fn begin_clears_previous_error() {
    let mut submit = Submission::default();
    submit.begin();
    submit.fail("bad password".to_owned());

    assert!(submit.begin());
    assert_eq!(submit.error, None);
}

#[test]
fn begin_while_submitting_is_refused() {
    let mut submit = Submission::default();
    assert!(submit.begin());
    assert!(!submit.begin());
    assert_eq!(submit.phase, FormPhase::Submitting);
}

#[test]
fn begin_after_navigation_is_refused() {
    let mut submit = Submission::default();
    submit.begin();
    submit.succeed();
    assert!(!submit.begin());
    assert_eq!(submit.phase, FormPhase::Navigated);
}

#[test]
fn fail_returns_to_editing_with_message() {
    let mut submit = Submission::default();
    submit.begin();
    submit.fail("bad password".to_owned());

    assert_eq!(submit.phase, FormPhase::Editing);
    assert_eq!(submit.error.as_deref(), Some("bad password"));
}

#[test]
fn fail_outside_submitting_is_dropped() {
    let mut submit = Submission::default();
    submit.fail("stale".to_owned());
    assert_eq!(submit.error, None);
    assert_eq!(submit.phase, FormPhase::Editing);
}

#[test]
fn succeed_navigates() {
    let mut submit = Submission::default();
    submit.begin();
    submit.succeed();
    assert_eq!(submit.phase, FormPhase::Navigated);
}

#[test]
fn succeed_outside_submitting_is_dropped() {
    let mut submit = Submission::default();
    submit.succeed();
    assert_eq!(submit.phase, FormPhase::Editing);
}

#[test]
fn resubmit_after_failure_is_allowed() {
    let mut submit = Submission::default();
    submit.begin();
    submit.fail("bad password".to_owned());
    assert!(submit.begin());
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn login_setters_touch_one_field_each() {
    let mut form = LoginForm::default();
    form.set_email("a@b.com".to_owned());
    form.set_password("pw".to_owned());

    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "pw");

    form.set_email("c@d.com".to_owned());
    assert_eq!(form.email, "c@d.com");
    assert_eq!(form.password, "pw");
}

#[test]
fn register_setters_touch_one_field_each() {
    let mut form = RegisterForm::default();
    form.set_name("bob".to_owned());
    form.set_email("b@c.com".to_owned());
    form.set_password("x".to_owned());
    form.set_confirm_password("y".to_owned());

    assert_eq!(form.name, "bob");
    assert_eq!(form.email, "b@c.com");
    assert_eq!(form.password, "x");
    assert_eq!(form.confirm_password, "y");

    form.set_password("z".to_owned());
    assert_eq!(form.confirm_password, "y");
}

#[test]
fn failed_submission_preserves_field_values() {
    let mut form = LoginForm::default();
    form.set_email("a@b.com".to_owned());
    form.set_password("pw".to_owned());

    form.submit.begin();
    form.submit.fail("bad password".to_owned());

    assert_eq!(form.email, "a@b.com");
    assert_eq!(form.password, "pw");
    assert_eq!(form.submit.error.as_deref(), Some("bad password"));
}
