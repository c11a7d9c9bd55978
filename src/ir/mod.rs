//! 线性中间表示。
//!
//! 每条源声明按序降级为两条指令：先 `Declare` 后 `Assign`，
//! 因此 IR 的长度恒等于声明数的两倍。初始化表达式原样搬入
//! `Assign`，这一阶段不做任何求值。


use crate::parser::ast::{Expression, Node, Program};
use std::fmt::{self, Display, Formatter};

/// 一条 IR 指令。
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Declare {
        name: String,
    },
    Assign {
        name: String,
        value: Node<Expression>,
    },
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Declare { name } => write!(f, "DECLARE {name}"),
            Instruction::Assign { name, value } => write!(f, "ASSIGN {name} {}", value.kind),
        }
    }
}

/// 把 AST 降级为 IR 指令序列。
pub fn generate(program: &Program) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(program.declarations.len() * 2);

    for declaration in &program.declarations {
        let name = declaration.kind.name.name.clone();
        instructions.push(Instruction::Declare { name: name.clone() });
        instructions.push(Instruction::Assign {
            name,
            value: declaration.kind.initializer.clone(),
        });
    }

    instructions
}
