//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a caller would: scan a whole
//! program, inspect the tokens, and render diagnostics for failures.

use pretty_assertions::assert_eq;
use scopelex::{
    errors::errors::ErrorImpl,
    lexer::{
        classes::LexerConfig,
        lexer::{tokenize, tokenize_with},
        scope::ScopeKind,
        tokens::TokenKind,
    },
    render_error,
};

const PROGRAM: &str = r#"
@add(int a, int b){
    return a + b
}

class Person{
    int age
    string name
    @Get_status(){
        return "Person is " + age + ' years old'
    }
}
"#;

#[test]
fn test_scan_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("person.toy".to_string())).unwrap();

    let opens = tokens.iter().filter(|t| t.kind == TokenKind::ScopeOpen).count();
    let closes = tokens.iter().filter(|t| t.kind == TokenKind::ScopeClose).count();
    assert_eq!(opens, 5);
    assert_eq!(opens, closes);

    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(keywords, vec!["int", "int", "int", "string"]);

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(strings, vec!["Person is ", " years old"]);
}

#[test]
fn test_tokens_appear_in_source_order() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    for window in tokens.windows(2) {
        assert!(window[0].span.end.0 <= window[1].span.start.0);
    }
}

#[test]
fn test_program_with_semicolons_needs_custom_table() {
    let source = "@main(){ print(person.Get_status()); }".to_string();

    let error = tokenize(source.clone(), None).unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::UnclassifiableCharacter { character: ';' });

    let config = LexerConfig::default().with_punctuation(';');
    let tokens = tokenize_with(source, None, &config).unwrap();
    assert_eq!(tokens.len(), 15);
}

#[test]
fn test_render_mismatched_close() {
    let source = "int a = (1 +\n    2]\n";
    let error = tokenize(source.to_string(), Some("main.toy".to_string())).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::MismatchedScopeClose {
            expected: ScopeKind::Parens,
            found: ScopeKind::Brackets,
        }
    );

    let rendered = render_error(&error, source);
    assert_eq!(
        rendered,
        "Error: MismatchedScopeClose (Expected `)` to close Parens, found the end of Brackets)\n\
         -> main.toy\n  |\n2 | 2]\n  | -^\n"
    );
}

#[test]
fn test_render_unterminated_scope_at_end_of_input() {
    let source = "{ int a";
    let error = tokenize(source.to_string(), Some("main.toy".to_string())).unwrap_err();

    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: UnterminatedScope (Braces opened at offset 0 is never closed, expected `}`)"
    );
    assert_eq!(lines[3], "1 | { int a");
    assert_eq!(lines[4], "  | -------^");
}

#[test]
fn test_concurrent_scans_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = if i % 2 == 0 {
                    format!("{{ int a{} = ({} + 1) }}", i, i)
                } else {
                    format!("[ a{} ", i)
                };
                tokenize(source, Some(format!("thread{}.toy", i)))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();

        if i % 2 == 0 {
            assert_eq!(result.unwrap().len(), 10);
        } else {
            let error = result.unwrap_err();
            assert_eq!(error.get_error_name(), "UnterminatedScope");
            assert_eq!(error.get_position().1.as_str(), format!("thread{}.toy", i));
        }
    }
}

#[test]
fn test_render_caret_after_non_ascii_string() {
    let source = "x = 'café' ]";
    let error = tokenize(source.to_string(), Some("main.toy".to_string())).unwrap_err();

    assert_eq!(error.get_position().0, 12);

    let rendered = render_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[3], "1 | x = 'café' ]");
    assert_eq!(lines[4], "  | -----------^");
}
