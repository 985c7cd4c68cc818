//! Form state and its transitions.
//!
//! [`FormState`] is never mutated in place by callers; every change goes
//! through [`FormState::reduce`], which consumes the old record and returns
//! the new one.
//!
//! Every backend submission gets a number. A completion is applied only while
//! its number is the current one, so a reply that was overtaken by a reset,
//! an edit or a newer submission never reaches the display.

use tracing::debug;

use super::field::Field;
use crate::generator::generate;
use crate::models::{GeneratedOutput, SpecificationRequest};

/// Everything the form renders: the field values, the last output and any
/// error from the last submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub request: SpecificationRequest,
    pub output: Option<GeneratedOutput>,
    pub error: Option<String>,
    /// A backend submission is in flight.
    pub pending: bool,
    /// Number of the latest submission; completions must quote it.
    pub submission: u64,
}

/// Input events the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Store `text` in a field. For the C3 checkbox the text is ignored and
    /// the flag is toggled. The read-only category is left alone.
    SetField(Field, String),
    SetC3(bool),
    ToggleC3,
    /// Run the local generator on the current values.
    Generate,
    /// Starts submission number `state.submission + 1`.
    SubmitStarted,
    SubmitSucceeded {
        submission: u64,
        output: GeneratedOutput,
    },
    SubmitFailed {
        submission: u64,
        message: String,
        fallback: Option<GeneratedOutput>,
    },
    Reset,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a text field as currently entered. The C3 flag renders as
    /// `"true"` / `"false"`.
    pub fn value(
        &self,
        field: Field,
    ) -> String {
        let req = &self.request;
        match field {
            Field::Category => req.category.clone(),
            Field::BearingType => req.bearing_type.clone(),
            Field::SubType => req.sub_type.clone(),
            Field::Number => req.number.clone(),
            Field::Seal => req.seal.clone(),
            Field::Suffixes => req.suffixes.clone(),
            Field::C3 => req.has_c3.to_string(),
            Field::Make => req.make.clone(),
        }
    }

    /// Whether a new submission may start.
    pub fn can_submit(&self) -> bool {
        !self.pending
    }

    /// Applies `action` and returns the resulting state.
    pub fn reduce(
        self,
        action: FormAction,
    ) -> Self {
        debug!(?action, "form action");

        match action {
            FormAction::SetField(field, text) => self.set_field(field, text),
            FormAction::SetC3(checked) => self.edited(|req| req.has_c3 = checked),
            FormAction::ToggleC3 => self.edited(|req| req.has_c3 = !req.has_c3),
            FormAction::Generate => {
                let output = generate(&self.request);
                Self {
                    output: Some(output),
                    error: None,
                    ..self
                }
            }
            FormAction::SubmitStarted if self.pending => self,
            FormAction::SubmitStarted => Self {
                output: None,
                error: None,
                pending: true,
                submission: self.submission + 1,
                ..self
            },
            FormAction::SubmitSucceeded { submission, output } if self.awaits(submission) => {
                Self {
                    output: Some(output),
                    error: None,
                    pending: false,
                    ..self
                }
            }
            FormAction::SubmitFailed {
                submission,
                message,
                fallback,
            } if self.awaits(submission) => Self {
                output: fallback,
                error: Some(message),
                pending: false,
                ..self
            },
            FormAction::SubmitSucceeded { submission, .. }
            | FormAction::SubmitFailed { submission, .. } => {
                debug!(submission, current = self.submission, "stale completion dropped");
                self
            }
            FormAction::Reset => Self {
                submission: self.submission + 1,
                ..Self::default()
            },
        }
    }

    /// Whether a completion for `submission` is still wanted.
    fn awaits(
        &self,
        submission: u64,
    ) -> bool {
        self.pending && submission == self.submission
    }

    fn set_field(
        self,
        field: Field,
        text: String,
    ) -> Self {
        match field {
            Field::Category => self,
            Field::C3 => self.edited(|req| req.has_c3 = !req.has_c3),
            Field::BearingType => self.edited(|req| req.bearing_type = text),
            Field::SubType => self.edited(|req| req.sub_type = text),
            Field::Number => self.edited(|req| req.number = text),
            Field::Seal => self.edited(|req| req.seal = text),
            Field::Suffixes => self.edited(|req| req.suffixes = text),
            Field::Make => self.edited(|req| req.make = text),
        }
    }

    /// An edit invalidates whatever was displayed, including the reply to a
    /// submission still in flight for the old values.
    fn edited(
        mut self,
        apply: impl FnOnce(&mut SpecificationRequest),
    ) -> Self {
        apply(&mut self.request);
        self.output = None;
        self.error = None;
        if self.pending {
            self.pending = false;
            self.submission += 1;
        }
        self
    }
}
