//! 语法分析。
//!
//! 采用递归下降技术，将 Token 流转换为抽象语法树 (AST)。
//! 文法如下（优先级由 expression/term/factor 的分层给出，
//! 左结合由循环内的左折叠保证）：
//!
//! ```text
//! program    := declaration* EOF
//! declaration:= TYPE ID ASSIGN expression SEMI
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := NUMBER | ID | '(' expression ')'
//! ```
//!
//! 解析没有错误恢复：第一处不匹配即返回错误，不产出部分 AST。

pub mod ast;

use crate::lexer::{BinOp, Token, TokenKind, TypeName};
use crate::reporter::ParserError;
use crate::utils::span::Span;
use ast::{BinaryExpression, Declaration, Expression, Identifier, Node, Program};

/// parser 模块唯一的公共入口函数。
///
/// `tokens` 必须以 `Eof` 结尾（[`crate::lexer::lex`] 的输出保证这一点）。
pub fn parse(tokens: &[Token]) -> Result<Program, ParserError> {
    Parser { tokens, current: 0 }.program()
}

/// 解析器结构体，持有解析过程所需的全部状态。
struct Parser<'a> {
    /// 从 Lexer 获取的 Token 流的引用。
    tokens: &'a [Token],
    /// 指向当前待处理 Token 的指针（在 tokens 切片中的索引）。
    current: usize,
}

impl<'a> Parser<'a> {
    // --- 文法产生式 ---

    fn program(mut self) -> Result<Program, ParserError> {
        let mut declarations = Vec::new();
        while !matches!(self.peek().kind, TokenKind::Eof) {
            declarations.push(self.declaration()?);
        }
        Ok(Program { declarations })
    }

    fn declaration(&mut self) -> Result<Node<Declaration>, ParserError> {
        let type_spec = self.type_keyword()?;
        let name = self.identifier()?;
        self.consume(TokenKind::Assign, "`=`")?;
        let initializer = self.expression()?;
        let semicolon = self.consume(TokenKind::Semicolon, "`;`")?;

        let span = Span::new(type_spec.span.start, semicolon.span.end);
        Ok(Node::new(
            Declaration {
                type_spec,
                name,
                initializer,
            },
            span,
        ))
    }

    fn expression(&mut self) -> Result<Node<Expression>, ParserError> {
        let mut left = self.term()?;
        while let TokenKind::Op(op @ (BinOp::Add | BinOp::Sub)) = self.peek().kind {
            let operator = Node::new(op, self.peek().span);
            self.advance();
            let right = self.term()?;
            left = fold_binary(left, operator, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Node<Expression>, ParserError> {
        let mut left = self.factor()?;
        while let TokenKind::Op(op @ (BinOp::Mul | BinOp::Div)) = self.peek().kind {
            let operator = Node::new(op, self.peek().span);
            self.advance();
            let right = self.factor()?;
            left = fold_binary(left, operator, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Node<Expression>, ParserError> {
        let token = self.advance();
        match &token.kind {
            TokenKind::Number(value) => Ok(Node::new(Expression::Number(*value), token.span)),

            TokenKind::Ident(name) => Ok(Node::new(
                Expression::Variable(Identifier {
                    name: name.clone(),
                    span: token.span,
                }),
                token.span,
            )),

            // 括号只改变结合方式，不在树中保留节点
            TokenKind::LParen => {
                let expression = self.expression()?;
                self.consume(TokenKind::RParen, "`)`")?;
                Ok(expression)
            }

            other => Err(unexpected("a number, an identifier or `(`", other, token.span)),
        }
    }

    // --- Token 流操作 ---

    /// 查看当前的 Token。
    fn peek(&self) -> &'a Token {
        &self.tokens[self.current]
    }

    /// 消费当前 Token 并返回它，同时前移指针。到达 Eof 后不再前移。
    fn advance(&mut self) -> &'a Token {
        let token = &self.tokens[self.current];
        if !matches!(token.kind, TokenKind::Eof) {
            self.current += 1;
        }
        token
    }

    /// 消费一个指定种类的 Token，否则报告“期望 vs 实际”错误。
    fn consume(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParserError> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(expected, &token.kind, token.span))
        }
    }

    fn type_keyword(&mut self) -> Result<Node<TypeName>, ParserError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Type(name) => Ok(Node::new(name, token.span)),
            ref other => Err(unexpected(
                "a type keyword (`int` or `float`)",
                other,
                token.span,
            )),
        }
    }

    fn identifier(&mut self) -> Result<Identifier, ParserError> {
        let token = self.advance();
        match &token.kind {
            TokenKind::Ident(name) => Ok(Identifier {
                name: name.clone(),
                span: token.span,
            }),
            other => Err(unexpected("an identifier", other, token.span)),
        }
    }
}

/// 左结合折叠：把已解析的左树与新的右操作数合并为一个二元节点。
fn fold_binary(
    left: Node<Expression>,
    operator: Node<BinOp>,
    right: Node<Expression>,
) -> Node<Expression> {
    let span = Span::new(left.span.start, right.span.end);
    Node::new(
        Expression::Binary(BinaryExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }),
        span,
    )
}

fn unexpected(expected: &str, found: &TokenKind, span: Span) -> ParserError {
    ParserError::UnexpectedToken {
        expected: expected.to_string(),
        found: found.describe(),
        span: span.into(),
    }
}
