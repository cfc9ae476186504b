//! Per-page credential form state.
//!
//! Each form owns its field values plus a `Submission` machine:
//! `Editing -> Submitting -> {Editing (failure, error shown),
//! Navigated (success)}`. The machine guarantees a single in-flight
//! submission per form instance and drops results that arrive in the
//! wrong phase, so a stale response can never clobber newer state.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Submission lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Navigated,
}

/// Submission state machine shared by the login and register forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub error: Option<String>,
    pub phase: FormPhase,
}

impl Submission {
    /// Enter `Submitting`, clearing any prior error.
    ///
    /// Returns `false` while a submission is already in flight or the
    /// page has navigated away, so no second concurrent request is
    /// ever issued by the same form.
    pub fn begin(&mut self) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    /// Apply a failed result: back to `Editing` with the error shown.
    /// Ignored unless a submission is in flight.
    pub fn fail(&mut self, message: String) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.error = Some(message);
        self.phase = FormPhase::Editing;
    }

    /// Apply a successful result: the page is about to navigate away
    /// and never returns to `Editing`. Ignored unless in flight.
    pub fn succeed(&mut self) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Navigated;
    }

    pub fn in_flight(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}

/// Login page form state.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submit: Submission,
}

impl LoginForm {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }
}

/// Registration page form state. `confirm_password` exists only for
/// the local mismatch check and never reaches the wire.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub submit: Submission,
}

impl RegisterForm {
    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
    }
}
