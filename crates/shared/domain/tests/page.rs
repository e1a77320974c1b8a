use lendhub_domain::page::PageOptions;

#[test]
fn unset_fields_mean_no_constraint() {
    let page = PageOptions::default();
    assert!(page.limit.is_none());
    assert!(page.max_words_match_distance.is_none());
    assert!(page.min_item_id.is_none());
}

#[test]
fn with_limit_leaves_other_fields_unset() {
    let page = PageOptions::with_limit(10);
    assert_eq!(page.limit, Some(10));
    assert!(page.max_words_match_distance.is_none());
    assert!(page.min_item_id.is_none());
}

#[test]
fn explicit_zero_is_distinct_from_unset() {
    let page: PageOptions =
        serde_json::from_str(r#"{ "limit": 0, "min_item_id": 0 }"#).expect("page deserialize");
    assert_eq!(page.limit, Some(0));
    assert_eq!(page.min_item_id, Some(0));
    assert!(page.max_words_match_distance.is_none());
}
