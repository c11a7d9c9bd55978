use crate::lexer::{BinOp, TypeName};
use crate::utils::span::Span;
use std::fmt::{self, Display, Formatter};

// --- 1. 核心 AST 节点与标识符 ---

/// 所有 AST 节点的通用包装，包含了节点本身和其在源代码中的位置。
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub kind: T,
    pub span: Span,
}

impl<T> Node<T> {
    pub fn new(kind: T, span: Span) -> Self {
        Node { kind, span }
    }
}

/// 一个标识符，例如变量名。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

// --- 2. 程序顶层结构 ---

/// AST 的根节点，代表一个完整的源文件：一串声明语句。
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: Vec<Node<Declaration>>,
}

/// 一条声明语句：`<type> <id> = <expr> ;`。
/// 这是语言中唯一的语句种类。
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub type_spec: Node<TypeName>,
    pub name: Identifier,
    pub initializer: Node<Expression>,
}

// --- 3. 表达式 ---

/// 表达式，其运算后会产生一个值。
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(i64),
    Variable(Identifier),
    Binary(BinaryExpression),
}

/// 二元运算，例如 `a + b`。
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Node<Expression>>,
    pub operator: Node<BinOp>,
    pub right: Box<Node<Expression>>,
}

// --- 4. 文本渲染 ---

/// `Program` 的 `Display` 是结构化转储：每条声明一行，
/// 表达式按树形展开。这是语法分析阶段对外的文本工件。
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", declaration.kind)?;
        }
        Ok(())
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Declare({}, {})", self.name.name, structural(&self.initializer.kind))
    }
}

fn structural(expression: &Expression) -> String {
    match expression {
        Expression::Number(value) => format!("Number({value})"),
        Expression::Variable(identifier) => format!("Variable({})", identifier.name),
        Expression::Binary(binary) => format!(
            "Binary({}, {}, {})",
            binary.operator.kind,
            structural(&binary.left.kind),
            structural(&binary.right.kind)
        ),
    }
}

/// `Expression` 的 `Display` 是类源码的中缀渲染，供 IR 与目标代码
/// 工件内插。括号只在树形需要时出现：优先级更低的子树，
/// 或 `-`/`/` 等不满足右结合的同级右子树。
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{value}"),
            Expression::Variable(identifier) => f.write_str(&identifier.name),
            Expression::Binary(binary) => {
                let precedence = binary.operator.kind.precedence();
                write_operand(f, &binary.left.kind, precedence, false)?;
                write!(f, " {} ", binary.operator.kind)?;
                write_operand(f, &binary.right.kind, precedence, true)
            }
        }
    }
}

fn write_operand(
    f: &mut Formatter<'_>,
    operand: &Expression,
    parent_precedence: u8,
    is_right: bool,
) -> fmt::Result {
    let needs_parens = match operand {
        Expression::Binary(binary) => {
            let precedence = binary.operator.kind.precedence();
            precedence < parent_precedence || (is_right && precedence == parent_precedence)
        }
        _ => false,
    };

    if needs_parens {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}
