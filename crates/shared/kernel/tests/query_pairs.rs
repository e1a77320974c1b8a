use lendhub_kernel::web::{QueryPairs, set_query_param};

fn pairs(query: &QueryPairs) -> Vec<(String, String)> {
    query.iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
}

#[test]
fn key_appears_exactly_once_after_rewrite() {
    let query: QueryPairs =
        [("a", "1"), ("b", "2"), ("a", "3"), ("a", "4")].into_iter().collect();

    let rewritten = set_query_param(&query, "a", "9");

    assert_eq!(rewritten.iter().filter(|(k, _)| *k == "a").count(), 1);
    assert_eq!(rewritten.get("a"), Some("9"));
}

#[test]
fn other_pairs_keep_order_and_multiplicity() {
    let query: QueryPairs =
        [("b", "1"), ("a", "2"), ("b", "3"), ("c", "4")].into_iter().collect();

    let rewritten = set_query_param(&query, "a", "0");

    assert_eq!(
        pairs(&rewritten),
        vec![
            ("b".to_owned(), "1".to_owned()),
            ("b".to_owned(), "3".to_owned()),
            ("c".to_owned(), "4".to_owned()),
            ("a".to_owned(), "0".to_owned()),
        ]
    );
}

#[test]
fn rewrite_is_idempotent() {
    let query: QueryPairs = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();

    let once = set_query_param(&query, "a", "9");
    let twice = set_query_param(&once, "a", "9");

    assert_eq!(once, twice);
}

#[test]
fn duplicate_key_example() {
    let query: QueryPairs = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();

    let rewritten = set_query_param(&query, "a", "9");

    assert_eq!(
        pairs(&rewritten),
        vec![("b".to_owned(), "2".to_owned()), ("a".to_owned(), "9".to_owned())]
    );
}

#[test]
fn empty_query_example() {
    let rewritten = set_query_param(&QueryPairs::new(), "x", "1");

    assert_eq!(pairs(&rewritten), vec![("x".to_owned(), "1".to_owned())]);
}

#[test]
fn input_is_left_untouched() {
    let query: QueryPairs = [("a", "1"), ("a", "2")].into_iter().collect();
    let before = pairs(&query);

    let _ = set_query_param(&query, "a", "9");

    assert_eq!(pairs(&query), before);
}

#[test]
fn absent_key_is_appended_at_the_end() {
    let query: QueryPairs = [("a", "1"), ("b", "2")].into_iter().collect();

    let rewritten = set_query_param(&query, "c", "3");

    assert_eq!(
        pairs(&rewritten),
        vec![
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
            ("c".to_owned(), "3".to_owned()),
        ]
    );
}

#[test]
fn key_and_value_accept_any_string_form() {
    let query: QueryPairs = [("cid", "1")].into_iter().collect();

    let rewritten = set_query_param(&query, String::from("cid"), 42);

    assert_eq!(rewritten.get("cid"), Some("42"));
    assert_eq!(rewritten.len(), 1);
}

#[test]
fn parse_and_display_round_trip_preserves_order() {
    let query = QueryPairs::parse("n=20&cid=7&n=5");

    assert_eq!(query.to_string(), "n=20&cid=7&n=5");
    assert_eq!(query.get("n"), Some("5"));
}

#[test]
fn display_percent_encodes_reserved_characters() {
    let query: QueryPairs = [("q", "lawn mower & trailer")].into_iter().collect();

    assert_eq!(query.to_string(), "q=lawn+mower+%26+trailer");
}
