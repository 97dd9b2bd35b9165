use eml_walk::{extract_links, is_link_char};

#[test]
fn test_extract_single_link() {
    let links = extract_links("Visit http://example.com/page?a=1 now.");
    assert_eq!(links, vec!["http://example.com/page?a=1"]);
}

#[test]
fn test_extract_multiple_links_in_order() {
    let links = extract_links("First https://b.example/x then http://a.example/y");
    assert_eq!(links, vec!["https://b.example/x", "http://a.example/y"]);
}

#[test]
fn test_duplicates_are_kept() {
    let links = extract_links("http://dup.example and again http://dup.example");
    assert_eq!(links, vec!["http://dup.example", "http://dup.example"]);
}

#[test]
fn test_empty_and_linkless_text() {
    assert!(extract_links("").is_empty());
    assert!(extract_links("no links here, just www.example.com").is_empty());
    assert!(extract_links("ftp://files.example/readme").is_empty());
}

#[test]
fn test_scheme_is_case_sensitive() {
    assert!(extract_links("HTTP://EXAMPLE.COM").is_empty());
}

#[test]
fn test_bare_scheme_needs_a_character() {
    assert!(extract_links("http:// nothing").is_empty());
    assert_eq!(extract_links("http://,"), vec!["http://,"]);
}

#[test]
fn test_trailing_punctuation_is_included() {
    assert_eq!(
        extract_links("See http://example.com/a, or http://example.com/b."),
        vec!["http://example.com/a,", "http://example.com/b."]
    );
}

#[test]
fn test_angle_brackets_are_in_the_class() {
    assert_eq!(
        extract_links("<http://example.com/>"),
        vec!["http://example.com/>"]
    );
}

#[test]
fn test_characters_outside_the_class_end_a_link() {
    assert_eq!(
        extract_links("http://example.com/p#frag"),
        vec!["http://example.com/p"]
    );
    assert_eq!(
        extract_links("http://example.com/~user"),
        vec!["http://example.com/"]
    );
    assert_eq!(
        extract_links("\"http://example.com/q\""),
        vec!["http://example.com/q"]
    );
    assert_eq!(
        extract_links("http://example.com/caf\u{e9}"),
        vec!["http://example.com/caf"]
    );
}

#[test]
fn test_percent_escapes_and_query() {
    assert_eq!(
        extract_links("go https://example.com/a%20b?x=1&y=[2]"),
        vec!["https://example.com/a%20b?x=1&y=[2]"]
    );
}

#[test]
fn test_adjacent_links_do_not_overlap() {
    assert_eq!(
        extract_links("http://a.examplehttp://b.example"),
        vec!["http://a.examplehttp://b.example"]
    );
}

#[test]
fn test_extraction_is_deterministic() {
    let text = "a http://one.example b https://two.example/path c";
    assert_eq!(extract_links(text), extract_links(text));
}

#[test]
fn test_matched_characters_are_link_chars() {
    let text = "x https://ex.com/a_b-c.d@e$f+g!h*i'j(k)l,m;n:o=p?q[r]s^t\\u v";
    let links = extract_links(text);

    assert_eq!(links.len(), 1);
    assert!(links[0]["https://".len()..].chars().all(is_link_char));
    assert!(links[0].ends_with("\\u"));
    assert!(!is_link_char(' '));
    assert!(!is_link_char('#'));
    assert!(!is_link_char('~'));
    assert!(!is_link_char('{'));
}
