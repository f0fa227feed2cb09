use rstest::rstest;
use slotbook_mailer::config::{parse_smtp_port, resolve_from_email, MailerConfig, SmtpConfig};

#[test]
fn test_from_header() {
    let config = MailerConfig {
        smtp: None,
        from_email: "no-reply@example.com".to_string(),
        from_name: "Reservas".to_string(),
    };
    
    assert_eq!(config.from_header(), "Reservas <no-reply@example.com>");
}

#[test]
fn test_console_notifier_without_smtp() {
    let config = MailerConfig {
        smtp: None,
        from_email: "no-reply@localhost".to_string(),
        from_name: "Reservas".to_string(),
    };
    
    assert!(slotbook_mailer::notifier_from_config(&config).is_ok());
}

#[test]
fn test_smtp_notifier_with_relay() {
    let config = MailerConfig {
        smtp: Some(SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: Some("user".to_string()),
            password: Some("secret".to_string()),
        }),
        from_email: "no-reply@example.com".to_string(),
        from_name: "Reservas".to_string(),
    };
    
    assert!(slotbook_mailer::notifier_from_config(&config).is_ok());
}

#[test]
fn test_mail_from_required_with_smtp() {
    let err = resolve_from_email(None, true).unwrap_err();
    assert!(err.to_string().contains("MAIL_FROM"));

    assert!(resolve_from_email(Some("  ".to_string()), true).is_err());
}

#[rstest]
#[case(Some("reservas@example.com"), true, "reservas@example.com")]
#[case(Some("reservas@example.com"), false, "reservas@example.com")]
#[case(None, false, "no-reply@localhost")]
fn test_resolve_from_email(
    #[case] mail_from: Option<&str>,
    #[case] smtp_configured: bool,
    #[case] expected: &str,
) {
    let resolved = resolve_from_email(mail_from.map(str::to_string), smtp_configured).unwrap();
    assert_eq!(resolved, expected);
}

#[rstest]
#[case(None, 587)]
#[case(Some("465"), 465)]
#[case(Some(" 2525 "), 2525)]
fn test_parse_smtp_port(#[case] raw: Option<&str>, #[case] expected: u16) {
    assert_eq!(parse_smtp_port(raw).unwrap(), expected);
}

#[rstest]
#[case("smtp")]
#[case("70000")]
fn test_parse_smtp_port_rejects_invalid(#[case] raw: &str) {
    assert!(parse_smtp_port(Some(raw)).is_err());
}
