//! IR 优化：常量折叠与代数恒等式化简。
//!
//! 这一趟只改写 `Assign` 的初始化表达式，输出与输入保持同样的
//! 指令形态。两条硬约束：`Declare` 指令永不删除（每个被赋值的
//! 名字在优化后的流里仍然有声明），指令顺序永不改变。

#[cfg(test)]
mod test;

use crate::ir::Instruction;
use crate::lexer::BinOp;
use crate::parser::ast::{BinaryExpression, Expression, Node};

/// 对 IR 指令序列做一趟化简。
pub fn optimize(instructions: &[Instruction]) -> Vec<Instruction> {
    instructions
        .iter()
        .map(|instruction| match instruction {
            Instruction::Declare { name } => Instruction::Declare { name: name.clone() },
            Instruction::Assign { name, value } => Instruction::Assign {
                name: name.clone(),
                value: simplify(value.clone()),
            },
        })
        .collect()
}

/// 自底向上化简一棵表达式树。化简不了的节点原样保留。
fn simplify(node: Node<Expression>) -> Node<Expression> {
    let Node { kind, span } = node;
    let binary = match kind {
        Expression::Binary(binary) => binary,
        leaf => return Node::new(leaf, span),
    };

    let left = simplify(*binary.left);
    let right = simplify(*binary.right);
    let operator = binary.operator;

    let left_number = as_number(&left);
    let right_number = as_number(&right);

    // 两个字面量操作数：尝试折叠。溢出与除零不折叠。
    if let (Some(l), Some(r)) = (left_number, right_number) {
        if let Some(folded) = fold(operator.kind, l, r) {
            return Node::new(Expression::Number(folded), span);
        }
    }

    // 代数恒等式
    match operator.kind {
        BinOp::Add if right_number == Some(0) => left,
        BinOp::Add if left_number == Some(0) => right,
        BinOp::Sub if right_number == Some(0) => left,
        BinOp::Mul if right_number == Some(1) => left,
        BinOp::Mul if left_number == Some(1) => right,
        BinOp::Mul if right_number == Some(0) || left_number == Some(0) => {
            Node::new(Expression::Number(0), span)
        }
        BinOp::Div if right_number == Some(1) => left,

        _ => Node::new(
            Expression::Binary(BinaryExpression {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            }),
            span,
        ),
    }
}

fn as_number(node: &Node<Expression>) -> Option<i64> {
    match node.kind {
        Expression::Number(value) => Some(value),
        _ => None,
    }
}

/// 带检查的整数算术。`checked_div` 同时挡住除零和 `MIN / -1`。
fn fold(op: BinOp, left: i64, right: i64) -> Option<i64> {
    match op {
        BinOp::Add => left.checked_add(right),
        BinOp::Sub => left.checked_sub(right),
        BinOp::Mul => left.checked_mul(right),
        BinOp::Div => left.checked_div(right),
    }
}
