//! Integration tests for the contact form and its simulated delivery.
//!
//! Tests cover:
//! - A complete submission clears the form after the delay, acknowledging once
//! - Incomplete and duplicate submissions
//! - Stale receipts, failed and abandoned deliveries
//! - Cancelling a delivery by dropping its session or task

mod common;

use std::time::Duration;

use std::future::Future;

use lienzo::contact::{
    ContactForm, ContactTransport, Delivery, FormField, Receipt, SimulatedTransport,
    SubmitStatus, SubmitTask, Submission,
};
use time::OffsetDateTime;
use tokio::time::Instant;
use uuid::Uuid;

use common::*;

const DELAY: Duration = Duration::from_secs(2);

/// Transport whose deliveries always fail.
struct UnreachableTransport;

impl ContactTransport for UnreachableTransport {
    fn deliver(
        &self,
        _submission: Submission,
    ) -> impl Future<Output = anyhow::Result<Receipt>> + Send + 'static {
        async { Err(anyhow::anyhow!("connection refused")) }
    }
}

#[tokio::test(start_paused = true)]
async fn test_submit_clears_form_after_delay() -> anyhow::Result<()> {
    let mut session = filled_session(SimulatedTransport::new(DELAY));

    let started = Instant::now();
    let (ticket, delivery) = session.submit().expect("form is complete");
    assert!(session.form().is_submitting());
    assert_eq!(session.pending(), Some(ticket));

    let outcome = delivery.await;
    assert!(started.elapsed() >= DELAY);
    assert!(matches!(outcome, Delivery::Delivered(_)));

    let acknowledgement = session.resolve(ticket, outcome.clone());
    assert_eq!(acknowledgement.map(|ack| ack.ticket), Some(ticket));
    assert!(session.form().fields().is_empty());
    assert_eq!(session.form().status(), SubmitStatus::Idle);
    assert_eq!(session.pending(), None);

    // Replaying the same outcome does not acknowledge again.
    assert!(session.resolve(ticket, outcome).is_none());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_cancels_delivery() -> anyhow::Result<()> {
    let mut session = filled_session(SimulatedTransport::new(DELAY));
    let (_ticket, delivery) = session.submit().expect("form is complete");

    let started = Instant::now();
    drop(session);

    assert_eq!(delivery.await, Delivery::Cancelled);
    assert!(started.elapsed() < DELAY, "cancellation must not wait for the transport");

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_keeps_typed_fields() -> anyhow::Result<()> {
    let mut session = filled_session(SimulatedTransport::new(DELAY));
    let (ticket, delivery) = session.submit().expect("form is complete");

    assert!(session.cancel());
    assert!(!session.cancel());
    assert_eq!(session.form().status(), SubmitStatus::Idle);

    let outcome = delivery.await;
    assert_eq!(outcome, Delivery::Cancelled);
    assert!(session.resolve(ticket, outcome).is_none());
    assert!(session.form().is_complete());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failed_delivery_keeps_typed_fields() -> anyhow::Result<()> {
    let mut session = filled_session(UnreachableTransport);
    let (ticket, delivery) = session.submit().expect("form is complete");

    let outcome = delivery.await;
    assert!(matches!(&outcome, Delivery::Failed(error) if error.contains("connection refused")));
    assert!(session.resolve(ticket, outcome).is_none());
    assert_eq!(session.form().status(), SubmitStatus::Idle);
    assert!(session.form().is_complete());

    // The visitor can try again.
    assert!(session.submit().is_some());

    Ok(())
}

#[test]
fn test_submit_task_needs_no_runtime() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is complete");
    let ticket = submission.ticket;

    let (task, delivery) = SubmitTask::new(&SimulatedTransport::default(), submission);
    assert_eq!(task.ticket(), ticket);
    assert!(!task.is_finished());

    drop(delivery);
    assert!(task.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_delivery_waits_full_delay() -> anyhow::Result<()> {
    let mut form = filled_form();
    let transport = SimulatedTransport::new(DELAY);
    let submission = form.begin_submit().expect("form is complete");
    let ticket = submission.ticket;

    let early = tokio::time::timeout(
        DELAY - Duration::from_millis(1),
        transport.deliver(submission.clone()),
    )
    .await;
    assert!(early.is_err(), "delivery finished before the delay");

    let receipt = transport.deliver(submission).await?;
    assert_eq!(receipt.ticket, ticket);
    Ok(())
}

#[test]
fn test_incomplete_form_does_not_submit() {
    let mut form = ContactForm::new();
    assert!(form.begin_submit().is_none());

    form.set(FormField::Name, "Ada");
    form.set(FormField::Email, "ada@example.com");
    form.set(FormField::Subject, "Visita");
    form.set(FormField::Message, "   ");
    assert!(!form.is_complete());
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.fields().get(FormField::Name), "Ada");
}

#[test]
fn test_double_submit_is_ignored() {
    let mut form = filled_form();

    let first = form.begin_submit().expect("form is complete");
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status(), SubmitStatus::Submitting(first.ticket));
}

#[test]
fn test_stale_receipt_keeps_form() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is complete");

    let stale = Receipt {
        ticket: Uuid::new_v4(),
        delivered_at: OffsetDateTime::now_utc(),
    };
    assert!(form.complete(stale).is_none());
    assert!(form.is_submitting());
    assert!(!form.fields().is_empty());

    let fresh = Receipt {
        ticket: submission.ticket,
        delivered_at: OffsetDateTime::now_utc(),
    };
    let acknowledgement = form.complete(fresh).expect("matching receipt");
    assert_eq!(acknowledgement.ticket, submission.ticket);
}

#[test]
fn test_abandon_keeps_typed_fields() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is complete");

    assert!(!form.abandon(Uuid::new_v4()));
    assert!(form.abandon(submission.ticket));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert!(form.is_complete());

    // The abandoned delivery can no longer clear the form.
    let late = Receipt {
        ticket: submission.ticket,
        delivered_at: OffsetDateTime::now_utc(),
    };
    assert!(form.complete(late).is_none());
    assert!(form.is_complete());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_task_cancels_delivery() -> anyhow::Result<()> {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is complete");

    let (task, delivery) = SubmitTask::new(&SimulatedTransport::new(DELAY), submission);
    let delivery = tokio::spawn(delivery);
    tokio::time::sleep(Duration::from_millis(500)).await;
    drop(task);

    assert_eq!(delivery.await?, Delivery::Cancelled);
    assert!(form.is_submitting());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_finished_task_reports_finished() -> anyhow::Result<()> {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("form is complete");

    let transport = SimulatedTransport::new(Duration::from_millis(10));
    let (task, delivery) = SubmitTask::new(&transport, submission);
    let Delivery::Delivered(receipt) = delivery.await else {
        anyhow::bail!("delivery should succeed");
    };

    assert!(task.is_finished());
    assert!(form.complete(receipt).is_some());

    Ok(())
}
