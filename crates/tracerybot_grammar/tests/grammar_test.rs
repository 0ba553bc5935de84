//! Tests for grammar loading and expansion.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracerybot_error::{GrammarErrorKind, TracerybotErrorKind};
use tracerybot_grammar::{Grammar, GrammarGenerator, MAX_SYMBOL_EXPANSIONS};
use tracerybot_interface::TextGenerator;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_single_string_rule_is_accepted() {
    let grammar = Grammar::from_json_str(r##"{"toot": "only option"}"##).expect("valid grammar");
    assert_eq!(grammar.rules("toot"), Some(&["only option".to_string()][..]));
    assert_eq!(grammar.expand("toot", &mut rng()), "only option");
}

#[test]
fn test_unknown_symbol_is_marked() {
    let grammar = Grammar::from_json_str(r##"{"toot": ["hi #nobody#"]}"##).expect("valid grammar");
    assert_eq!(grammar.expand("toot", &mut rng()), "hi ((nobody))");
    assert_eq!(grammar.expand("missing", &mut rng()), "((missing))");
}

#[test]
fn test_nested_expansion_with_modifiers() {
    let grammar = Grammar::from_json_str(
        r##"{
            "toot": ["#greeting.capitalize#, #animal.a#!"],
            "greeting": ["hello there"],
            "animal": ["#color# eel"],
            "color": ["orange"]
        }"##,
    )
    .expect("valid grammar");

    assert_eq!(grammar.expand("toot", &mut rng()), "Hello there, an orange eel!");
}

#[test]
fn test_pushed_rule_is_reused_within_expansion() {
    let grammar = Grammar::from_json_str(
        r##"{
            "origin": ["[hero:#name#]#hero# met #hero#"],
            "name": ["Ada", "Bo", "Cy", "Di", "Ed"]
        }"##,
    )
    .expect("valid grammar");

    let mut rng = rng();
    for _ in 0..20 {
        let text = grammar.expand("origin", &mut rng);
        let (first, second) = text.split_once(" met ").expect("separator present");
        assert_eq!(first, second);
    }
}

#[test]
fn test_tag_actions_are_scoped_to_the_tag() {
    let grammar = Grammar::from_json_str(
        r##"{
            "origin": ["#[pet:cat]line# / #pet#"],
            "line": ["my #pet#"]
        }"##,
    )
    .expect("valid grammar");

    assert_eq!(grammar.expand("origin", &mut rng()), "my cat / ((pet))");
}

#[test]
fn test_pop_action_restores_previous_rules() {
    let grammar =
        Grammar::from_json_str(r##"{"origin": ["[x:a][x:b]#x#[x:POP]#x#[x:POP]#x#"]}"##)
            .expect("valid grammar");

    assert_eq!(grammar.expand("origin", &mut rng()), "ba((x))");
}

#[test]
fn test_self_reference_terminates() {
    let grammar = Grammar::from_json_str(r##"{"loop": ["more #loop#"]}"##).expect("valid grammar");
    let text = grammar.expand("loop", &mut rng());
    assert!(text.starts_with("more more"));
    assert!(text.ends_with("#loop#"));
}

#[test]
fn test_branching_self_reference_is_bounded() {
    let grammar = Grammar::from_json_str(r##"{"a": ["#a##a#"]}"##).expect("valid grammar");
    let started = std::time::Instant::now();
    let text = grammar.expand("a", &mut rng());

    assert!(started.elapsed() < std::time::Duration::from_secs(5));
    assert!(text.contains("#a#"));
    assert!(text.len() < 10 * MAX_SYMBOL_EXPANSIONS);
}

#[test]
fn test_expansion_budget_resets_per_call() {
    let grammar = Grammar::from_json_str(
        r##"{"a": ["#a##a#"], "word": ["owl"]}"##,
    )
    .expect("valid grammar");
    let mut rng = rng();
    let _ = grammar.expand("a", &mut rng);
    assert_eq!(grammar.expand("word", &mut rng), "owl");
}

#[test]
fn test_malformed_rule_is_rejected_at_load() {
    let err = Grammar::from_json_str(r##"{"toot": ["#unclosed"]}"##).expect_err("malformed");
    match err.kind() {
        TracerybotErrorKind::Grammar(e) => {
            assert!(matches!(e.kind, GrammarErrorKind::MalformedRule { .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_symbol_is_rejected_at_load() {
    let err = Grammar::from_json_str(r##"{"toot": []}"##).expect_err("empty symbol");
    assert!(format!("{err}").contains("toot"));
}

#[test]
fn test_non_object_json_is_rejected() {
    let err = Grammar::from_json_str(r#"["not", "an", "object"]"#).expect_err("not an object");
    match err.kind() {
        TracerybotErrorKind::Grammar(e) => assert!(matches!(e.kind, GrammarErrorKind::Parse(_))),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_generator_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r##"{{"toot": ["beep #sound#"], "sound": ["boop"]}}"##).expect("write grammar");

    let generator = GrammarGenerator::from_file(file.path()).expect("grammar loads");
    assert!(generator.grammar().has_symbol("toot"));
    assert_eq!(generator.expand("toot"), "beep boop");
}

#[test]
fn test_missing_grammar_file() {
    let err = GrammarGenerator::from_file("/definitely/not/here.json").expect_err("missing file");
    match err.kind() {
        TracerybotErrorKind::Grammar(e) => {
            assert!(matches!(e.kind, GrammarErrorKind::FileRead(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_seeded_generators_agree() {
    let json = r##"{"toot": ["a", "b", "c", "d", "e", "f", "g", "h"]}"##;
    let first = GrammarGenerator::with_seed(Grammar::from_json_str(json).unwrap(), 9);
    let second = GrammarGenerator::with_seed(Grammar::from_json_str(json).unwrap(), 9);

    let a: Vec<String> = (0..10).map(|_| first.expand("toot")).collect();
    let b: Vec<String> = (0..10).map(|_| second.expand("toot")).collect();
    assert_eq!(a, b);
}
