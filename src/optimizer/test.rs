use super::optimize;
use crate::ir::{generate, Instruction};
use crate::lexer::lex;
use crate::parser::parse;

fn optimize_source(source: &str) -> Vec<Instruction> {
    let tokens = lex(source).expect("lexer should not fail in optimizer tests");
    let program = parse(&tokens).expect("parser should not fail in optimizer tests");
    optimize(&generate(&program))
}

fn rendered(instructions: &[Instruction]) -> Vec<String> {
    instructions
        .iter()
        .map(|instruction| instruction.to_string())
        .collect()
}

// --- 常量折叠 ---

#[test]
fn test_folds_literal_arithmetic() {
    let instructions = optimize_source("int x = 1 + 2;");
    assert_eq!(rendered(&instructions), vec!["DECLARE x", "ASSIGN x 3"]);
}

#[test]
fn test_folds_nested_trees_bottom_up() {
    // (2 + 3) * 4 - 6 / 2 = 20 - 3 = 17
    let instructions = optimize_source("int x = (2 + 3) * 4 - 6 / 2;");
    assert_eq!(instructions[1].to_string(), "ASSIGN x 17");
}

#[test]
fn test_division_truncates() {
    let instructions = optimize_source("int x = 7 / 2;");
    assert_eq!(instructions[1].to_string(), "ASSIGN x 3");
}

#[test]
fn test_division_by_zero_is_never_folded() {
    let instructions = optimize_source("int x = 1 / 0;");
    assert_eq!(instructions[1].to_string(), "ASSIGN x 1 / 0");
}

#[test]
fn test_overflow_is_never_folded() {
    let instructions = optimize_source("int x = 9223372036854775807 + 1;");
    assert_eq!(
        instructions[1].to_string(),
        "ASSIGN x 9223372036854775807 + 1"
    );
}

// --- 代数恒等式 ---

#[test]
fn test_additive_and_multiplicative_identities() {
    let instructions = optimize_source(
        "int a = x + 0; int b = 0 + x; int c = x - 0; int d = x * 1; int e = 1 * x; int f = x / 1;",
    );
    for (index, name) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
        assert_eq!(
            instructions[index * 2 + 1].to_string(),
            format!("ASSIGN {name} x")
        );
    }
}

#[test]
fn test_multiplication_by_zero_collapses() {
    let instructions = optimize_source("int a = x * 0; int b = 0 * x;");
    assert_eq!(instructions[1].to_string(), "ASSIGN a 0");
    assert_eq!(instructions[3].to_string(), "ASSIGN b 0");
}

#[test]
fn test_identities_apply_after_inner_folding() {
    // 内层 2 - 2 先折叠成 0，外层 x + 0 再化简为 x
    let instructions = optimize_source("int y = x + (2 - 2);");
    assert_eq!(instructions[1].to_string(), "ASSIGN y x");
}

// --- 硬约束 ---

#[test]
fn test_declares_survive_in_place() {
    let before_source = "int a = 1 + 1; int b = 2 * 0; int c = a + b;";
    let instructions = optimize_source(before_source);

    assert_eq!(instructions.len(), 6);
    for (index, instruction) in instructions.iter().enumerate() {
        if index % 2 == 0 {
            assert!(matches!(instruction, Instruction::Declare { .. }));
        } else {
            assert!(matches!(instruction, Instruction::Assign { .. }));
        }
    }
    assert_eq!(instructions[0].to_string(), "DECLARE a");
    assert_eq!(instructions[2].to_string(), "DECLARE b");
    assert_eq!(instructions[4].to_string(), "DECLARE c");
}

#[test]
fn test_variable_operands_are_untouched() {
    let instructions = optimize_source("int z = x + y;");
    assert_eq!(instructions[1].to_string(), "ASSIGN z x + y");
}
