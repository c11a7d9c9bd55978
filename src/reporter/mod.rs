//! 整个编译器错误处理系统的核心。
//! 使用 `thiserror` 和 `miette` 来定义所有结构化的诊断信息。
//!
//! 这里只收录会中断管线的致命错误：词法与语法两个阶段。
//! 语义分析的重复声明发现是非致命的报告值（见 [`crate::analyzer`]），
//! 不参与这套错误传播。

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// 顶层的编译器错误枚举。
/// 任何一个阶段失败，管线立即终止，不产出任何工件。
#[derive(Debug, Error, Diagnostic)]
pub enum CompilerError {
    /// 词法分析阶段的错误
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexerError),

    /// 语法分析阶段的错误
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parsing(#[from] ParserError),
}

/// 词法分析器可能产生的所有错误的集合。
#[derive(Debug, Error, Diagnostic)]
pub enum LexerError {
    #[error("无法识别的字符: '{unrecognized_char}'")]
    #[diagnostic(
        code(E0001),
        help("这个字符在语言中不是一个有效的符号。请检查是否有拼写错误或多余的字符。")
    )]
    UnrecognizedToken {
        unrecognized_char: char,
        #[label("这个字符无法被识别")]
        span: SourceSpan,
    },

    #[error("整数字面量 '{literal}' 超出可表示范围")]
    #[diagnostic(code(E0002))]
    IntegerOverflow {
        literal: String,
        #[label("这个数字太大了")]
        span: SourceSpan,
    },
}

/// 语法分析器可能产生的所有错误的集合。
#[derive(Debug, Error, Diagnostic)]
pub enum ParserError {
    #[error("语法错误: 期望 {expected}, 但找到了 {found}")]
    #[diagnostic(
        code(E0100),
        help("请检查语法并确保其符合语言规则。")
    )]
    UnexpectedToken {
        expected: String,
        found: String,
        #[label("在这里")]
        span: SourceSpan,
    },
}
