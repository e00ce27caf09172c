//! Client-side contact form. Nothing is sent anywhere: submissions go through
//! a [`ContactTransport`], and the only shipped transport waits and succeeds.

mod session;
mod transport;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub use session::ContactSession;
pub use transport::{
    ContactTransport, DEFAULT_SUBMIT_DELAY, Delivery, SimulatedTransport, SubmitTask,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A snapshot of the form handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Uuid,
    pub fields: ContactFields,
}

/// What a transport reports back once a submission went through.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub ticket: Uuid,
    pub delivered_at: OffsetDateTime,
}

/// One-shot confirmation surfaced to the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Acknowledgement {
    pub ticket: Uuid,
    pub delivered_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting(Uuid),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting(_))
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    /// Every field is required; whitespace alone does not count.
    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|field| !self.fields.get(*field).trim().is_empty())
    }

    /// Starts a submission, or returns `None` when one is already in flight
    /// or a required field is missing.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting() || !self.is_complete() {
            return None;
        }
        let ticket = Uuid::new_v4();
        self.status = SubmitStatus::Submitting(ticket);
        tracing::info!(%ticket, "contact form submitted");
        Some(Submission {
            ticket,
            fields: self.fields.clone(),
        })
    }

    /// Applies a delivery result. Only the receipt for the submission
    /// currently in flight clears the form; anything else is stale.
    pub fn complete(&mut self, receipt: Receipt) -> Option<Acknowledgement> {
        match self.status {
            SubmitStatus::Submitting(ticket) if ticket == receipt.ticket => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Idle;
                tracing::info!(%ticket, "contact form delivered");
                Some(Acknowledgement {
                    ticket,
                    delivered_at: receipt.delivered_at,
                })
            }
            _ => {
                tracing::warn!(ticket = %receipt.ticket, "ignoring stale contact receipt");
                None
            }
        }
    }

    /// Gives up on the in-flight submission and keeps what was typed.
    pub fn abandon(&mut self, ticket: Uuid) -> bool {
        if self.status == SubmitStatus::Submitting(ticket) {
            self.status = SubmitStatus::Idle;
            true
        } else {
            false
        }
    }
}
