//! 语义分析：重复声明检查。
//!
//! 这一阶段只产出报告，不产出错误：发现重复声明不会中断遍历，
//! 也不会阻止后续的 IR 生成。所有重复项都会被收集，而不只是第一个。

#[cfg(test)]
mod test;

use crate::parser::ast::Program;
use crate::utils::span::Span;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// 一条重复声明的发现，带着两处位置：重复处与首次声明处。
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateDeclaration {
    pub name: String,
    pub span: Span,
    pub original_span: Span,
}

/// 语义分析的产物。
///
/// 这是一个只读的报告值，由调用方决定如何展示；
/// 它从不被用来决定管线是否继续。
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticReport {
    duplicates: Vec<DuplicateDeclaration>,
}

impl SemanticReport {
    /// 没有发现任何重复声明。
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }

    pub fn duplicates(&self) -> &[DuplicateDeclaration] {
        &self.duplicates
    }
}

impl Display for SemanticReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.duplicates.is_empty() {
            return f.write_str("Semantic analysis passed.");
        }

        for (i, duplicate) in self.duplicates.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Semantic Error: Variable '{}' already declared.",
                duplicate.name
            )?;
        }
        Ok(())
    }
}

/// 按声明顺序遍历 AST，用符号表收集名字；
/// 已出现过的名字每重复一次就追加一条发现。
pub fn analyze(program: &Program) -> SemanticReport {
    // 名字 → 首次声明处
    let mut symbols: HashMap<String, Span> = HashMap::new();
    let mut duplicates = Vec::new();

    for declaration in &program.declarations {
        let name = &declaration.kind.name;
        match symbols.get(&name.name) {
            Some(&original_span) => duplicates.push(DuplicateDeclaration {
                name: name.name.clone(),
                span: name.span,
                original_span,
            }),
            None => {
                symbols.insert(name.name.clone(), name.span);
            }
        }
    }

    SemanticReport { duplicates }
}
