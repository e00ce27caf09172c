use std::future::Future;

use uuid::Uuid;

use super::{Acknowledgement, ContactForm, ContactTransport, Delivery, FormField, SubmitTask};

/// A contact form together with its transport and the delivery in flight.
///
/// Dropping the session drops the pending [`SubmitTask`], so a delivery
/// started here can never touch the form after the session is gone.
#[derive(Debug)]
pub struct ContactSession<T> {
    form: ContactForm,
    transport: T,
    pending: Option<SubmitTask>,
}

impl<T: ContactTransport> ContactSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            form: ContactForm::new(),
            transport,
            pending: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn pending(&self) -> Option<Uuid> {
        self.pending.as_ref().map(SubmitTask::ticket)
    }

    /// Starts a delivery. The caller drives the returned future and feeds
    /// its output back through [`ContactSession::resolve`].
    pub fn submit(&mut self) -> Option<(Uuid, impl Future<Output = Delivery> + Send + 'static)> {
        let submission = self.form.begin_submit()?;
        let ticket = submission.ticket;
        let (task, delivery) = SubmitTask::new(&self.transport, submission);
        self.pending = Some(task);
        Some((ticket, delivery))
    }

    /// Applies the outcome of the delivery for `ticket`.
    pub fn resolve(&mut self, ticket: Uuid, delivery: Delivery) -> Option<Acknowledgement> {
        if self.pending() == Some(ticket) {
            self.pending = None;
        }
        match delivery {
            Delivery::Delivered(receipt) => self.form.complete(receipt),
            Delivery::Failed(error) => {
                tracing::error!(%ticket, %error, "contact delivery failed");
                self.form.abandon(ticket);
                None
            }
            Delivery::Cancelled => {
                tracing::debug!(%ticket, "contact delivery cancelled");
                None
            }
        }
    }

    /// Drops the delivery in flight and keeps what was typed.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => self.form.abandon(task.ticket()),
            None => false,
        }
    }
}
