use eml_walk::{HeaderStore, parse_message};

fn store() -> HeaderStore {
    HeaderStore::new(vec![
        ("Received".to_string(), "from a".to_string()),
        ("Subject".to_string(), "Hello".to_string()),
        ("received".to_string(), "from b".to_string()),
        ("X-Mailer".to_string(), "Mutt".to_string()),
    ])
}

#[test]
fn test_lookup_is_case_insensitive() {
    let headers = store();

    assert_eq!(headers.get("subject", ""), "Hello");
    assert_eq!(headers.get("SUBJECT", ""), "Hello");
    assert_eq!(headers.get("x-mailer", ""), "Mutt");
    assert!(headers.contains("RECEIVED"));
}

#[test]
fn test_missing_header_uses_default() {
    let headers = store();

    assert_eq!(headers.get("Reply-To", ""), "");
    assert_eq!(headers.get("Reply-To", "n/a"), "n/a");
    assert!(headers.first("Reply-To").is_none());
    assert!(!headers.contains("Reply-To"));
}

#[test]
fn test_duplicates_are_retained_in_order() {
    let headers = store();

    assert_eq!(headers.get("Received", ""), "from a");
    let all: Vec<&str> = headers.get_all("Received").collect();
    assert_eq!(all, vec!["from a", "from b"]);
}

#[test]
fn test_all_preserves_order_and_casing() {
    let headers = store();

    let names: Vec<&str> = headers.all().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Received", "Subject", "received", "X-Mailer"]);
    assert_eq!(headers.len(), 4);
    assert!(!headers.is_empty());
    assert!(HeaderStore::default().is_empty());
}

#[test]
fn test_parsed_headers_keep_duplicates() {
    let raw = b"Received: by mx1\r\n\
                Received: by mx2\r\n\
                Subject: Dups\r\n\
                \r\n\
                body";

    let message = parse_message(raw).unwrap();

    let received: Vec<&str> = message.headers.get_all("received").collect();
    assert_eq!(received, vec!["by mx1", "by mx2"]);
    assert_eq!(message.headers.all()[0].0, "Received");
}

#[test]
fn test_folded_header_is_unfolded() {
    let raw = b"Subject: a long\r\n subject line\r\n\r\nbody";

    let message = parse_message(raw).unwrap();

    assert_eq!(message.subject, "a long subject line");
}
