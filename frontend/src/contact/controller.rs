use log::{info, warn};

use super::error::{SubmitError, ValidationError};
use super::models::{ContactForm, ContactPayload, ExperienceBracket, Field, InputKind, Position, MINIMUM_AGE};

pub const STATUS_PENDING: &str = "送信中...";
pub const STATUS_SUCCESS: &str = "送信が完了しました";
pub const STATUS_FAILURE_PREFIX: &str = "送信に失敗しました";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failed(String),
}

impl SubmissionStatus {
    /// Inline text rendered under the submit button, `None` while idle.
    pub fn text(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Pending => Some(STATUS_PENDING.to_string()),
            SubmissionStatus::Success => Some(STATUS_SUCCESS.to_string()),
            SubmissionStatus::Failed(reason) => Some(format!("{STATUS_FAILURE_PREFIX}: {reason}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Failure,
    Neutral,
}

impl StatusTone {
    /// Colour by wording, the same way the status line has always been styled.
    pub fn of(text: &str) -> Self {
        if text.contains("完了") {
            StatusTone::Success
        } else if text.contains("失敗") {
            StatusTone::Failure
        } else {
            StatusTone::Neutral
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StatusTone::Success => "text-center text-green-600",
            StatusTone::Failure => "text-center text-red-600",
            StatusTone::Neutral => "text-center text-gray-600",
        }
    }
}

/// Form state plus the `Idle → Pending → {Success, Failed}` submission machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactController {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn on_field_change(&mut self, field: Field, value: &str, kind: InputKind) {
        if let InputKind::Checkbox { checked } = kind {
            if field != Field::Licenses {
                warn!("ignoring checkbox change for {}", field.name());
                return;
            }
            if checked {
                self.form.licenses.insert(value);
            } else {
                self.form.licenses.remove(value);
            }
            return;
        }

        let form = &mut self.form;
        match field {
            Field::LastName => form.last_name = value.to_string(),
            Field::FirstName => form.first_name = value.to_string(),
            Field::Phone => form.phone = value.to_string(),
            Field::Email => form.email = value.to_string(),
            Field::Message => form.message = value.to_string(),
            Field::Experience => form.experience = ExperienceBracket::from_label(value),
            Field::Position => form.position = Position::from_label(value),
            // A number input reports "" for anything it cannot parse.
            Field::Age => form.age = value.trim().parse().ok(),
            Field::Licenses => warn!("licenses only change through their checkboxes"),
        }
    }

    /// Checks the required fields without touching the status.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let form = &self.form;
        let missing: Vec<Field> = [
            (Field::LastName, form.last_name.trim().is_empty()),
            (Field::FirstName, form.first_name.trim().is_empty()),
            (Field::Phone, form.phone.trim().is_empty()),
            (Field::Age, form.age.is_none()),
            (Field::Experience, form.experience.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, empty)| empty.then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }
        match form.age {
            Some(age) if age < MINIMUM_AGE => Err(ValidationError::Underage {
                age,
                minimum: MINIMUM_AGE,
            }),
            _ => Ok(()),
        }
    }

    /// `Idle | Failed | Success → Pending`. Hands back the payload to POST.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ValidationError> {
        if self.is_pending() {
            return Err(ValidationError::InFlight);
        }
        self.validate()?;
        self.status = SubmissionStatus::Pending;
        info!("submitting application");
        Ok(self.form.to_payload())
    }

    /// `Pending → Success | Failed`. Outcomes arriving in any other state are dropped.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_pending() {
            warn!("submission outcome arrived while not pending");
            return;
        }
        match outcome {
            Ok(()) => {
                info!("application delivered");
                self.form = ContactForm::default();
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                warn!("application delivery failed: {}", err);
                self.status = SubmissionStatus::Failed(err.reason());
            }
        }
    }
}
