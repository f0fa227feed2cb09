use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::json;
use slotbook_mailer::{
    console::ConsoleNotifier,
    mock::{MockMailer, RecordingNotifier},
    templates::BOOKING_DONE,
    Notification, Notifier,
};
use test_log::test;

fn booking_done(to: &str) -> Notification {
    Notification {
        to: to.to_string(),
        subject: "Has realizado una reserva".to_string(),
        template: BOOKING_DONE.to_string(),
        data: json!({ "name": "Ana", "formattedDate": "lunes, 05 de enero del 2026 a las 03:00 PM" }),
    }
}

#[test(tokio::test)]
async fn test_console_notifier_renders_template() {
    let notifier = ConsoleNotifier::new();
    
    assert!(notifier.send_notification(booking_done("ana@example.com")).await.is_ok());
}

#[test(tokio::test)]
async fn test_console_notifier_rejects_unknown_template() {
    let notifier = ConsoleNotifier::new();
    let mut notification = booking_done("ana@example.com");
    notification.template = "welcome".to_string();
    
    assert!(notifier.send_notification(notification).await.is_err());
}

#[test(tokio::test)]
async fn test_recording_notifier_keeps_sent_notifications() {
    let notifier = RecordingNotifier::new();
    
    notifier.send_notification(booking_done("ana@example.com")).await.unwrap();
    notifier.send_notification(booking_done("luis@example.com")).await.unwrap();
    
    let sent = notifier.sent().await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].to, "luis@example.com");
}

#[test(tokio::test)]
async fn test_failing_recording_notifier() {
    let notifier = RecordingNotifier::failing("relay down");
    
    let err = notifier.send_notification(booking_done("ana@example.com")).await.unwrap_err();
    
    assert!(err.to_string().contains("relay down"));
    assert!(notifier.sent().await.is_empty());
}

#[test(tokio::test)]
async fn test_mock_mailer_expectations() {
    let mut mailer = MockMailer::new();
    mailer
        .expect_send_notification()
        .with(predicate::eq(booking_done("ana@example.com")))
        .times(1)
        .returning(|_| Ok(()));
    
    mailer.send_notification(booking_done("ana@example.com")).await.unwrap();
}
