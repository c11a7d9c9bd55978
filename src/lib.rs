//! declc：一个最小类型化声明语言的编译管线。
//!
//! 源程序是一串 `<type> <id> = <expr> ;` 语句。一次编译同步地依次
//! 跑完词法分析、语法分析、语义检查、IR 生成、优化、目标代码生成
//! 六个阶段。每个阶段都是纯函数，消费上一阶段的产物并构造全新的
//! 工件，调用之间不共享任何状态。

pub mod analyzer;
pub mod codegen;
pub mod ir;
pub mod lexer;
pub mod optimizer;
pub mod parser;
pub mod reporter;
pub mod utils;


use analyzer::SemanticReport;
use codegen::AsmLine;
use ir::Instruction;
use lexer::Token;
use parser::ast::Program;
use reporter::CompilerError;

/// 一次完整编译产出的六份工件。
///
/// 每份工件都以类型化的形式保存，同时提供对应的文本渲染方法，
/// 供任意展示层（CLI、测试或图形界面）直接使用。
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineArtifacts {
    pub tokens: Vec<Token>,
    pub ast: Program,
    pub semantics: SemanticReport,
    pub ir: Vec<Instruction>,
    pub optimized: Vec<Instruction>,
    pub code: Vec<AsmLine>,
}

impl PipelineArtifacts {
    /// 词法工件：每行一个 token（序号、种类名、字面量）。
    pub fn tokens_text(&self) -> String {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                format!(
                    "{:3}. {:<15} → '{}'",
                    i + 1,
                    token.kind.table_name(),
                    token.kind.literal()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 语法工件：声明序列的结构化转储。
    pub fn ast_text(&self) -> String {
        self.ast.to_string()
    }

    /// 语义工件：成功消息，或逐行列出的重复声明。
    pub fn semantics_text(&self) -> String {
        self.semantics.to_string()
    }

    /// IR 工件：`DECLARE`/`ASSIGN` 行。
    pub fn ir_text(&self) -> String {
        render_instructions(&self.ir)
    }

    /// 优化后 IR 工件，形态与 IR 相同。
    pub fn optimized_text(&self) -> String {
        render_instructions(&self.optimized)
    }

    /// 目标代码工件：伪汇编行。
    pub fn code_text(&self) -> String {
        self.code
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_instructions(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .map(|instruction| instruction.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 编译一段源代码，走完全部六个阶段。
///
/// 词法或语法错误会立即终止管线并返回 [`CompilerError`]，此时
/// 不产出任何工件。语义分析只记录发现、从不拦截：即使报告里有
/// 重复声明，IR 生成与后续阶段仍会在完整的 AST 上继续。
pub fn compile(source: &str) -> Result<PipelineArtifacts, CompilerError> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(&tokens)?;

    // 只记录，不拦截
    let semantics = analyzer::analyze(&ast);

    let ir = ir::generate(&ast);
    let optimized = optimizer::optimize(&ir);
    let code = codegen::generate(&optimized);

    Ok(PipelineArtifacts {
        tokens,
        ast,
        semantics,
        ir,
        optimized,
        code,
    })
}
