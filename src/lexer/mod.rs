//! 词法分析。
//!
//! 规则表用 `logos` 声明，按书写顺序编译为一个静态状态机：
//! 空白与换行被跳过；`int`/`float` 作为关键字规则压过标识符规则。
//! 扫描是全有或全无的：遇到第一个无法识别的字符立即失败，
//! 不返回任何部分 token 流。

// 导入logos分词库
use logos::Logos;

use crate::reporter::LexerError;
use crate::utils::span::Span;

pub mod token;
// 声明单元测试模块
#[cfg(test)]
mod test;

pub use token::{BinOp, Token, TokenKind, TypeName};

/// 词素规则表。变体顺序即规则声明顺序。
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
// 跳过空格与制表符
#[logos(skip r"[ \t]+")]
// 跳过换行
#[logos(skip r"\n")]
enum Lexeme {
    // 整数字面量
    #[regex(r"[0-9]+")]
    Number,

    // 类型关键字，优先于标识符匹配
    #[token("int")]
    Int,
    #[token("float")]
    Float,

    // 标识符
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // 运算符号
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // 赋值与分隔符号
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// 对源代码进行词法分析，返回一个以 Eof 结尾的 Token 向量。
///
/// 任何一个无法匹配的字符都会让整次扫描失败，错误中带着
/// 该字符本身及其位置。
pub fn lex(source: &str) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();

    for (result, range) in Lexeme::lexer(source).spanned() {
        let slice = &source[range.clone()];
        let span = Span::from(range);

        let lexeme = match result {
            Ok(lexeme) => lexeme,
            // logos 的错误本身不包含无效字符的信息，
            // 需要从切片中提取。
            Err(()) => {
                let unrecognized_char = slice.chars().next().unwrap_or_default();
                return Err(LexerError::UnrecognizedToken {
                    unrecognized_char,
                    span: span.into(),
                });
            }
        };

        let kind = match lexeme {
            Lexeme::Number => {
                let value = slice
                    .parse::<i64>()
                    .map_err(|_| LexerError::IntegerOverflow {
                        literal: slice.to_string(),
                        span: span.into(),
                    })?;
                TokenKind::Number(value)
            }
            Lexeme::Int => TokenKind::Type(TypeName::Int),
            Lexeme::Float => TokenKind::Type(TypeName::Float),
            Lexeme::Ident => TokenKind::Ident(slice.to_string()),
            Lexeme::Plus => TokenKind::Op(BinOp::Add),
            Lexeme::Minus => TokenKind::Op(BinOp::Sub),
            Lexeme::Star => TokenKind::Op(BinOp::Mul),
            Lexeme::Slash => TokenKind::Op(BinOp::Div),
            Lexeme::Assign => TokenKind::Assign,
            Lexeme::Semicolon => TokenKind::Semicolon,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
        };

        tokens.push(Token { kind, span });
    }

    // 结尾的 Eof 哨兵，位置为输入末端
    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(source.len(), source.len()),
    });

    Ok(tokens)
}
