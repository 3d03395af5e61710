//! End-to-end recommendation runs over whole-file snippets.

use csz_context::SyntaxContext;
use csz_context::test_util::split_marker;
use csz_recommenders::recommend_keywords;

fn keywords_at(marked: &str) -> Vec<&'static str> {
    let (source, position) = split_marker(marked);
    let ctx = SyntaxContext::build(&source, position);
    recommend_keywords(position, &ctx)
        .into_iter()
        .map(|k| k.text)
        .collect()
}

#[test]
fn test_file_start_offers_compilation_unit_keywords() {
    let offered = keywords_at("@@");
    for kw in ["using", "namespace", "class", "struct", "interface", "enum", "public"] {
        assert!(offered.contains(&kw), "missing `{kw}` at file start: {offered:?}");
    }
    for kw in ["return", "break", "case", "this", "override"] {
        assert!(!offered.contains(&kw), "unexpected `{kw}` at file start");
    }
}

#[test]
fn test_class_body_offers_member_keywords() {
    let offered = keywords_at("class C {\n    @@\n}");
    for kw in ["public", "private", "static", "void", "int", "class", "new"] {
        assert!(offered.contains(&kw), "missing `{kw}` in class body: {offered:?}");
    }
    for kw in ["return", "var", "namespace", "break"] {
        assert!(!offered.contains(&kw), "unexpected `{kw}` in class body");
    }
}

#[test]
fn test_method_body_offers_statement_keywords() {
    let offered = keywords_at("class C { void M() {\n    @@\n} }");
    for kw in ["if", "for", "foreach", "return", "var", "try", "int", "const"] {
        assert!(offered.contains(&kw), "missing `{kw}` in method body: {offered:?}");
    }
    for kw in ["public", "namespace", "else", "catch", "void"] {
        assert!(!offered.contains(&kw), "unexpected `{kw}` in method body");
    }
}

#[test]
fn test_expression_position_offers_expression_keywords() {
    let offered = keywords_at("class C { void M() { var x = @@ } }");
    for kw in ["true", "false", "null", "new", "this", "typeof", "await"] {
        assert!(offered.contains(&kw), "missing `{kw}` in initializer: {offered:?}");
    }
    assert!(!offered.contains(&"if"), "statements do not start inside an initializer");
}

#[test]
fn test_output_is_deterministic() {
    let first = keywords_at("class C { void M() { @@ } }");
    let second = keywords_at("class C { void M() { @@ } }");
    assert_eq!(first, second);
}

#[test]
fn test_inside_string_offers_nothing() {
    assert!(keywords_at("class C { void M() { var s = \"hello @@ world\"; } }").is_empty());
}

#[test]
fn test_unterminated_string_at_eof_offers_nothing() {
    assert!(keywords_at("class C { void M() { var s = \"open@@").is_empty());
}

#[test]
fn test_midword_caret_uses_word_start() {
    // Caret in the middle of a partially typed word: the word is the
    // completion prefix, not part of the context.
    let offered = keywords_at("class C { void M() { ret@@ } }");
    assert!(offered.contains(&"return"), "offered: {offered:?}");
}
