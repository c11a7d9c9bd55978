use crate::utils::span::Span;
use std::fmt::{Display, Formatter, Result};

/// 主体 Token 定义，包含其种类和在源代码中的位置。
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// 声明语言中所有可能的词法单元。
#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    /// 文件结束标志，每个 token 流的最后一项。
    Eof,

    /// 标识符。
    Ident(String),

    /// 整数字面量，直接存储为 i64。
    Number(i64),

    /// 类型关键字。
    Type(TypeName),

    /// 算术运算符。
    Op(BinOp),

    /// `=`
    Assign,

    /// `;`
    Semicolon,

    /// `(`
    LParen,

    /// `)`
    RParen,
}

impl TokenKind {
    /// 词法规则表中的经典种类名，用于 token 列表工件。
    pub fn table_name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ident(_) => "ID",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Type(_) => "TYPE",
            TokenKind::Op(_) => "OP",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMI",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }

    /// 该 token 的字面量文本。Eof 没有字面量，渲染为空串。
    pub fn literal(&self) -> String {
        match self {
            TokenKind::Eof => String::new(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Number(value) => value.to_string(),
            TokenKind::Type(name) => name.to_string(),
            TokenKind::Op(op) => op.to_string(),
            TokenKind::Assign => "=".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
        }
    }

    /// 一个用于错误报告的简单字符串表示。
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Ident(_) => "an identifier".to_string(),
            TokenKind::Number(_) => "an integer literal".to_string(),
            TokenKind::Type(name) => format!("keyword `{name}`"),
            TokenKind::Op(op) => format!("operator `{op}`"),
            TokenKind::Assign => "`=`".to_string(),
            TokenKind::Semicolon => "`;`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
        }
    }
}

/// 声明语句允许的类型关键字。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeName {
    Int,
    Float,
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
        };
        write!(f, "{}", s)
    }
}

/// 二元算术运算符。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl BinOp {
    /// 运算优先级：乘除绑定得比加减更紧。
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        };
        write!(f, "{}", s)
    }
}
