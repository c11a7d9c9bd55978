//! 目标代码生成：伪汇编文本。
//!
//! 每条 IR 指令对应一行输出，顺序不变：`Declare` 变成注释行，
//! `Assign` 变成 `MOV`，右侧原样照搬已渲染的表达式文本。


use crate::ir::Instruction;
use std::fmt::{self, Display, Formatter};

/// 一行伪汇编。
#[derive(Debug, Clone, PartialEq)]
pub enum AsmLine {
    Comment(String),
    Mov { dest: String, src: String },
}

impl Display for AsmLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AsmLine::Comment(text) => write!(f, "; {text}"),
            AsmLine::Mov { dest, src } => write!(f, "MOV {dest}, {src}"),
        }
    }
}

/// 把（已优化的）IR 翻译为伪汇编行。
pub fn generate(instructions: &[Instruction]) -> Vec<AsmLine> {
    instructions
        .iter()
        .map(|instruction| match instruction {
            Instruction::Declare { name } => {
                AsmLine::Comment(format!("Declaring variable {name}"))
            }
            Instruction::Assign { name, value } => AsmLine::Mov {
                dest: name.clone(),
                src: value.kind.to_string(),
            },
        })
        .collect()
}
