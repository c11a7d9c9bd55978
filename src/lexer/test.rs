// 导入父模块（也就是 lexer 模块）的所有内容
use super::*;
use crate::reporter::LexerError;
use miette::SourceSpan;

/// 一个辅助函数，用于简化测试。
/// 它接收源代码，调用 lexer，然后只返回 Token 种类的向量（忽略它们的 span）。
fn lex_just_kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .expect("lexing should succeed")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

// --- 成功案例 (Happy Path) ---

#[test]
fn test_declaration_token_sequence() {
    let kinds = lex_just_kinds("int x = 1 + 2;");
    let expected = vec![
        TokenKind::Type(TypeName::Int),
        TokenKind::Ident("x".to_string()),
        TokenKind::Assign,
        TokenKind::Number(1),
        TokenKind::Op(BinOp::Add),
        TokenKind::Number(2),
        TokenKind::Semicolon,
        TokenKind::Eof,
    ];
    assert_eq!(kinds, expected);
}

#[test]
fn test_eof_is_always_last_and_unique() {
    for source in ["", "int a = 1;", "  \n\t\n  ", "float f = (2 * 3) - 1;"] {
        let kinds = lex_just_kinds(source);
        assert_eq!(kinds.last(), Some(&TokenKind::Eof));
        let eof_count = kinds.iter().filter(|kind| **kind == TokenKind::Eof).count();
        assert_eq!(eof_count, 1);
    }
}

#[test]
fn test_keywords_win_over_identifiers() {
    // `int`/`float` 是关键字，但更长的标识符不能被拆开
    let kinds = lex_just_kinds("int float intx floaty");
    let expected = vec![
        TokenKind::Type(TypeName::Int),
        TokenKind::Type(TypeName::Float),
        TokenKind::Ident("intx".to_string()),
        TokenKind::Ident("floaty".to_string()),
        TokenKind::Eof,
    ];
    assert_eq!(kinds, expected);
}

#[test]
fn test_all_operators_and_punctuation() {
    let kinds = lex_just_kinds("+ - * / = ; ( )");
    let expected = vec![
        TokenKind::Op(BinOp::Add),
        TokenKind::Op(BinOp::Sub),
        TokenKind::Op(BinOp::Mul),
        TokenKind::Op(BinOp::Div),
        TokenKind::Assign,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Eof,
    ];
    assert_eq!(kinds, expected);
}

#[test]
fn test_whitespace_and_newlines_are_discarded() {
    let kinds = lex_just_kinds("int\n\tvalue\t=  42 ;\n");
    let expected = vec![
        TokenKind::Type(TypeName::Int),
        TokenKind::Ident("value".to_string()),
        TokenKind::Assign,
        TokenKind::Number(42),
        TokenKind::Semicolon,
        TokenKind::Eof,
    ];
    assert_eq!(kinds, expected);
}

#[test]
fn test_token_spans_cover_their_lexemes() {
    let tokens = lex("int x = 1;").expect("lexing should succeed");
    assert_eq!(tokens[0].span, Span::new(0, 3)); // int
    assert_eq!(tokens[1].span, Span::new(4, 5)); // x
    assert_eq!(tokens[4].span, Span::new(9, 10)); // ;
    assert_eq!(tokens[5].span, Span::new(10, 10)); // Eof 落在输入末端
}

// --- 失败案例 (Sad Path) ---

#[test]
fn test_unrecognized_character_aborts_scan() {
    let error = lex("int x = 1 $ 2;").unwrap_err();

    let LexerError::UnrecognizedToken {
        unrecognized_char,
        span,
    } = error
    else {
        panic!("expected an UnrecognizedToken error, got: {error:?}");
    };

    assert_eq!(unrecognized_char, '$');
    assert_eq!(span, SourceSpan::from(10..11));
}

#[test]
fn test_no_partial_token_stream_on_error() {
    // 全有或全无：哪怕错误出现在末尾，也不返回任何 token
    assert!(lex("int ok = 1; @").is_err());
}

#[test]
fn test_integer_literal_overflow() {
    let error = lex("int x = 99999999999999999999;").unwrap_err();

    let LexerError::IntegerOverflow { literal, .. } = error else {
        panic!("expected an IntegerOverflow error, got: {error:?}");
    };

    assert_eq!(literal, "99999999999999999999");
}
