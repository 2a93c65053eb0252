#![allow(missing_docs)]

use typed_regex::{
    MatchOutcome,
    RegexFlags,
    TypedRegex,
    TypedRegexError,
    TypedRegexOptions,
    engine::EngineSelector,
};

const DATE: &str = r"^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})$";
const NAMES: &str = r"((?<firstName>\w+) (?<middleName>\w+)? (?<lastName>\w+))+";
const NAMES_INPUT: &str = "Joe  Mama,Ligma  Bolz,Sir Prysing Lee";

#[test]
fn captures_date_groups() {
    let re = TypedRegex::new(DATE).unwrap();

    let caps = re.captures("2020-12-02").unwrap().unwrap();
    assert_eq!(
        caps.to_pairs(),
        vec![
            ("year", Some("2020")),
            ("month", Some("12")),
            ("day", Some("02")),
        ]
    );

    assert!(!re.match_one("2020-12").unwrap().matched());
    assert!(re.captures("2020-12").unwrap().is_none());
}

#[test]
fn captures_optional_groups() {
    let re = TypedRegex::new("foo(?<name>.*)?").unwrap();

    let caps = re.captures("hello worldfoobar").unwrap().unwrap();
    assert_eq!(caps.to_pairs(), vec![("name", Some("bar"))]);

    let name = re
        .captures("hello world")
        .unwrap()
        .and_then(|c| c.get("name"));
    assert_eq!(name, None);
}

#[test]
fn captures_star_groups() {
    let re = TypedRegex::with_flags(r"^foo(?<name>\w)*", "gi").unwrap();
    let caps = re.captures("foobar").unwrap().unwrap();
    assert_eq!(caps.to_pairs(), vec![("name", Some("r"))]);
}

#[test]
fn capture_all_names() {
    let re = TypedRegex::with_flags(NAMES, "g").unwrap();
    let all = re.capture_all(NAMES_INPUT).unwrap();
    let middles = all.iter().map(|c| c.get("middleName")).collect::<Vec<_>>();
    let firsts = all.iter().map(|c| c.get("firstName")).collect::<Vec<_>>();
    let lasts = all.iter().map(|c| c.get("lastName")).collect::<Vec<_>>();

    assert_eq!(firsts, vec![Some("Joe"), Some("Ligma"), Some("Sir")]);
    assert_eq!(middles, vec![None, None, Some("Prysing")]);
    assert_eq!(lasts, vec![Some("Mama"), Some("Bolz"), Some("Lee")]);

    assert!(re.capture_all("932408239").unwrap().is_empty());
    assert!(re.capture_all("").unwrap().is_empty());
}

#[test]
fn match_date_raw() {
    let re = TypedRegex::new(DATE).unwrap();
    match re.match_one("2020-12-02").unwrap() {
        MatchOutcome::Matched(record) => {
            assert_eq!(
                record.raw(),
                vec![Some("2020-12-02"), Some("2020"), Some("12"), Some("02")]
            );
            assert_eq!(record.full_text(), "2020-12-02");
        }
        MatchOutcome::NoMatch => panic!("expected a match"),
    }
}

#[test]
fn is_match_date() {
    let re = TypedRegex::new(DATE).unwrap();
    assert!(re.is_match("2020-12-02").unwrap());
    assert!(!re.is_match("2020-12").unwrap());
}

#[test]
fn all_flags_accepted() {
    TypedRegex::with_flags(r"^foo(?<name>\w)*", "gimsuy").unwrap();
    TypedRegex::with_flags(r"^foo(?<name>\w)*", "dgimsuy").unwrap();
}

#[test]
fn invalid_flag_is_a_configuration_error() {
    let err = TypedRegex::with_flags("abc", "x").unwrap_err();
    assert!(matches!(err, TypedRegexError::InvalidFlag { flag: 'x', .. }));
    assert!(err.to_string().contains("'x'"));

    let err = "gix".parse::<RegexFlags>().unwrap_err();
    assert!(matches!(
        err,
        TypedRegexError::InvalidFlag {
            flag: 'x',
            position: 2
        }
    ));
}

#[test]
fn non_capturing_prefix_group() {
    let re = TypedRegex::new(r"^foo(?:\w)(?<name>.*)$").unwrap();
    let caps = re.captures("foobar").unwrap().unwrap();
    assert_eq!(caps.get("name"), Some("ar"));
}

#[test]
fn non_capturing_only_is_empty_mapping() {
    let re = TypedRegex::new("^(?:foo)$").unwrap();
    assert!(re.schema().is_empty());
    let caps = re.captures("foo").unwrap().unwrap();
    assert!(caps.is_empty());
}

#[test]
fn multi_line_and_dot_all_flags() {
    let re = TypedRegex::with_flags(r"^(?<line>b.)$", "gm").unwrap();
    let lines = re.capture_all("a1\nb2\nb3").unwrap();
    assert_eq!(
        lines.iter().map(|c| c.get("line")).collect::<Vec<_>>(),
        vec![Some("b2"), Some("b3")]
    );

    let re = TypedRegex::with_flags(r"a(?<mid>.)b", "s").unwrap();
    assert_eq!(
        re.captures("a\nb").unwrap().unwrap().get("mid"),
        Some("\n")
    );
    let re = TypedRegex::new(r"a(?<mid>.)b").unwrap();
    assert!(re.captures("a\nb").unwrap().is_none());
}

#[test]
fn engines_agree() {
    for engine in [EngineSelector::Basic, EngineSelector::Fancy] {
        let re = TypedRegexOptions::default()
            .with_flags("g".parse().unwrap())
            .with_engine(engine)
            .build(NAMES)
            .unwrap();
        let middles = re
            .capture_all(NAMES_INPUT)
            .unwrap()
            .iter()
            .map(|c| c.get("middleName"))
            .collect::<Vec<_>>();
        assert_eq!(middles, vec![None, None, Some("Prysing")], "{engine:?}");
    }
}

#[test]
fn shared_between_threads() {
    let re = TypedRegex::with_flags(NAMES, "g").unwrap();
    let expected = re.match_all(NAMES_INPUT).unwrap();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..16 {
                    assert_eq!(re.match_all(NAMES_INPUT).unwrap(), expected);
                }
            });
        }
    });
}
