//! Contact form state machine.
//!
//! Editing → Submitting → Sent → Editing. The two timed phases reuse the
//! deadline idiom of the carousel controller: a phase carries its expiry
//! instant and the shell's timer deliveries move it along. Submission has
//! no transport — the payload is written to the structured log, which is
//! the whole contract here.

use std::time::{Duration, Instant};

use tracing::info;

/// Simulated network delay before a submission is acknowledged.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the success notice stays up before the form returns to
/// editing.
pub const SENT_NOTICE: Duration = Duration::from_millis(3000);

/// Minimum message length accepted by validation, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

// ===== ContactField =====

/// The three input fields, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    /// Sender name.
    #[default]
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// Field below this one, wrapping to the top.
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    /// Field above this one, wrapping to the bottom.
    pub fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

// ===== FormPhase =====

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// Valid submission in flight; input is ignored until `until`.
    Submitting {
        /// When the simulated send completes.
        until: Instant,
    },
    /// Success notice showing; dismissed automatically at `until`.
    Sent {
        /// When the notice disappears.
        until: Instant,
    },
}

// ===== FieldErrors =====

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    /// Error under the name field.
    pub name: Option<&'static str>,
    /// Error under the email field.
    pub email: Option<&'static str>,
    /// Error under the message field.
    pub message: Option<&'static str>,
}

impl FieldErrors {
    /// Whether any field failed validation.
    pub fn any(&self) -> bool {
        self.name.is_some() || self.email.is_some() || self.message.is_some()
    }
}

// ===== ContactFormState =====

/// State for the contact panel's form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    /// Name field contents.
    pub name: String,
    /// Email field contents.
    pub email: String,
    /// Message field contents.
    pub message: String,
    /// Which field receives typed characters.
    pub focused: ContactField,
    /// Validation results from the last failed submit.
    pub errors: FieldErrors,
    /// Current lifecycle phase.
    pub phase: FormPhase,
}

impl ContactFormState {
    /// Fresh empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether input should be ignored (submission in flight).
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Type a character into the focused field.
    ///
    /// Starts clearing that field's error as soon as the user edits it,
    /// so stale messages don't linger while they fix the input.
    pub fn input_char(&mut self, ch: char) {
        if self.is_busy() {
            return;
        }
        self.focused_value_mut().push(ch);
        self.clear_focused_error();
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.is_busy() {
            return;
        }
        self.focused_value_mut().pop();
        self.clear_focused_error();
    }

    /// Move focus to the next field down.
    pub fn focus_next_field(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field up.
    pub fn focus_previous_field(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Validate all fields, recording per-field messages.
    ///
    /// Returns whether the form is acceptable. Validation failure is
    /// ordinary state, not an error value — the panel renders the
    /// messages inline.
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            name: if self.name.trim().is_empty() {
                Some("Name is required")
            } else {
                None
            },
            email: if self.email.trim().is_empty() {
                Some("Email is required")
            } else if !is_valid_email(self.email.trim()) {
                Some("Please enter a valid email")
            } else {
                None
            },
            message: if self.message.trim().is_empty() {
                Some("Message is required")
            } else if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
                Some("Message must be at least 10 characters")
            } else {
                None
            },
        };

        !self.errors.any()
    }

    /// Attempt to submit the form.
    ///
    /// Invalid input stays in `Editing` with errors set; valid input
    /// enters `Submitting` with its acknowledgment deadline.
    pub fn submit(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }
        if !self.validate() {
            return;
        }
        self.phase = FormPhase::Submitting {
            until: now + SUBMIT_DELAY,
        };
    }

    /// Deliver a timer event; advances timed phases whose deadline has
    /// passed. Returns whether anything changed.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        match self.phase {
            FormPhase::Submitting { until } if now >= until => {
                self.log_submission();
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focused = ContactField::Name;
                self.phase = FormPhase::Sent {
                    until: now + SENT_NOTICE,
                };
                true
            }
            FormPhase::Sent { until } if now >= until => {
                self.phase = FormPhase::Editing;
                true
            }
            _ => false,
        }
    }

    /// Validation message for a field, if any.
    pub fn error_for(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.errors.name,
            ContactField::Email => self.errors.email,
            ContactField::Message => self.errors.message,
        }
    }

    /// Current contents of a field.
    pub fn value_of(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    fn clear_focused_error(&mut self) {
        match self.focused {
            ContactField::Name => self.errors.name = None,
            ContactField::Email => self.errors.email = None,
            ContactField::Message => self.errors.message = None,
        }
    }

    fn log_submission(&self) {
        let payload = serde_json::json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        info!(%payload, "Contact form submission");
    }
}

/// Shape check for an email address: `local@domain.tld`, no whitespace,
/// all three parts non-empty.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "contact_form_tests.rs"]
mod tests;
