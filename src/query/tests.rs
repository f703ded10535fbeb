use rstest::rstest;

use super::QueryParams;

#[rstest]
#[case("?p=Test+value&other-param=true")]
#[case("p=Test+value&other-param=true")]
fn parse(#[case] search: &str) {
    let q = QueryParams::parse(search);
    assert_eq!(q.get("p"), Some("Test value"));
    assert_eq!(q.get("other-param"), Some("true"));
    assert_eq!(q.len(), 2);
}

#[test]
fn parse_empty() {
    assert!(QueryParams::parse("").is_empty());
    assert!(QueryParams::parse("?").is_empty());
}

#[test]
fn to_string_uses_form_encoding() {
    let mut q = QueryParams::new();
    q.set("p", "Default value");
    q.set("json", r#"{"prop":true}"#);
    assert_eq!(
        q.to_string(),
        "p=Default+value&json=%7B%22prop%22%3Atrue%7D"
    );
}

#[test]
fn set_keeps_position_of_existing_key() {
    let mut q = QueryParams::parse("a=1&b=2&c=3");
    q.set("b", "x");
    assert_eq!(q.to_string(), "a=1&b=x&c=3");
}

#[test]
fn set_appends_missing_key() {
    let mut q = QueryParams::parse("a=1");
    q.set("b", "2");
    assert_eq!(q.to_string(), "a=1&b=2");
}

#[test]
fn set_removes_later_duplicates() {
    let mut q = QueryParams::parse("a=1&b=2&a=3&c=4&a=5");
    q.set("a", "x");
    assert_eq!(q.to_string(), "a=x&b=2&c=4");
}

#[test]
fn delete_removes_all_values() {
    let mut q = QueryParams::parse("a=1&b=2&a=3");
    q.delete("a");
    assert_eq!(q.to_string(), "b=2");
    assert!(!q.has("a"));
}

#[test]
fn get_all() {
    let q = QueryParams::parse("a=1&b=2&a=3");
    assert_eq!(q.get_all("a").collect::<Vec<_>>(), ["1", "3"]);
    assert_eq!(q.get("a"), Some("1"));
}

#[test]
fn from_iter() {
    let q: QueryParams = [("a", "1"), ("b", "two words")].into_iter().collect();
    assert_eq!(q.to_string(), "a=1&b=two+words");
}
