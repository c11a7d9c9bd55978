use super::{analyze, SemanticReport};
use crate::lexer::lex;
use crate::parser::parse;
use crate::utils::span::Span;

// 一个通用的设置函数，负责词法和语法分析
fn analyze_source(source: &str) -> SemanticReport {
    let tokens = lex(source).expect("lexer should not fail in analyzer tests");
    let program = parse(&tokens).expect("parser should not fail in analyzer tests");
    analyze(&program)
}

#[test]
fn test_distinct_names_pass() {
    let report = analyze_source("int x = 1; float y = x; int z = x + y;");
    assert!(report.is_clean());
    assert_eq!(report.to_string(), "Semantic analysis passed.");
}

#[test]
fn test_duplicate_is_reported_by_name() {
    let report = analyze_source("int x = 1; float x = 2;");
    assert!(!report.is_clean());
    assert_eq!(report.duplicates().len(), 1);
    assert_eq!(report.duplicates()[0].name, "x");
    assert_eq!(
        report.to_string(),
        "Semantic Error: Variable 'x' already declared."
    );
}

#[test]
fn test_all_duplicates_are_collected() {
    // 三次 x、两次 y：x 产生两条发现，y 产生一条，按出现顺序
    let report = analyze_source("int x = 1; int y = 2; int x = 3; int y = 4; int x = 5;");

    let names: Vec<&str> = report
        .duplicates()
        .iter()
        .map(|duplicate| duplicate.name.as_str())
        .collect();
    assert_eq!(names, vec!["x", "y", "x"]);

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Semantic Error: Variable 'x' already declared.",
            "Semantic Error: Variable 'y' already declared.",
            "Semantic Error: Variable 'x' already declared.",
        ]
    );
}

#[test]
fn test_finding_points_at_both_declaration_sites() {
    let report = analyze_source("int x = 1; float x = 2;");

    let duplicate = &report.duplicates()[0];
    assert_eq!(duplicate.original_span, Span::new(4, 5));
    assert_eq!(duplicate.span, Span::new(17, 18));
}

#[test]
fn test_empty_program_is_clean() {
    assert!(analyze_source("").is_clean());
}
