use regex::Regex;

use lastpass_alfred::util;

#[test]
fn regex_search() {
    let re = Regex::new(r"\[id: ([0-9]+)\]").unwrap();

    assert_eq!(util::regex_search(&re, "a/b [id: 42] [url: x]"), "42");
    assert_eq!(util::regex_search(&re, "a/b [id: x] [url: x]"), "");
    assert_eq!(util::regex_search(&re, ""), "");
}

#[test]
fn has_all() {
    let words = |s: &str| s.split(' ').map(ToOwned::to_owned).collect::<Vec<_>>();

    assert!(util::has_all("100 servicea dev", words("dev 100")));
    assert!(util::has_all("100 servicea dev", words("")));
    assert!(util::has_all("anything", Vec::<String>::new()));
    assert!(!util::has_all("100 servicea dev", words("dev prod")));
}

#[test]
fn shell_quote() {
    assert_eq!(util::shell_quote("lpass"), "'lpass'");
    assert_eq!(
        util::shell_quote("/Users/o'brien/bin/lpass"),
        r"'/Users/o'\''brien/bin/lpass'"
    );
}

#[test]
fn parse_bool() {
    for truthy in &["1", "true", "TRUE", " yes ", "on"] {
        assert!(util::parse_bool(truthy), "{:?}", truthy);
    }
    for falsy in &["", "0", "false", "off", "2"] {
        assert!(!util::parse_bool(falsy), "{:?}", falsy);
    }
}
