//! 命令行驱动：读入源文件，跑完整条管线，输出文本工件。

use clap::{Parser, ValueEnum};
use declc::{compile, PipelineArtifacts};
use miette::{IntoDiagnostic, NamedSource, Report, WrapErr};
use std::fs;

/// 一个最小类型化声明语言的编译器
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 需要编译的源文件路径
    input_file: String,

    /// 只输出指定阶段的工件（默认带标题输出全部六个）
    #[arg(long, value_enum)]
    emit: Option<Stage>,

    /// 把工件写入文件而不是打印到标准输出
    #[arg(short, long)]
    output: Option<String>,
}

/// 管线的六个阶段，与六份文本工件一一对应。
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stage {
    Tokens,
    Ast,
    Semantics,
    Ir,
    Optimized,
    Code,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input_file)
        .into_diagnostic()
        .wrap_err(format!("Failed to read file '{}'", cli.input_file))?;

    // 致命错误带上具名源码交给 miette 渲染
    let artifacts = compile(&source).map_err(|error| {
        Report::new(error).with_source_code(NamedSource::new(&cli.input_file, source.clone()))
    })?;

    let text = match cli.emit {
        Some(stage) => render_stage(&artifacts, stage),
        None => render_all(&artifacts),
    };

    match &cli.output {
        Some(path) => fs::write(path, text + "\n")
            .into_diagnostic()
            .wrap_err(format!("Failed to write file '{path}'"))?,
        None => println!("{text}"),
    }

    Ok(())
}

fn render_stage(artifacts: &PipelineArtifacts, stage: Stage) -> String {
    match stage {
        Stage::Tokens => artifacts.tokens_text(),
        Stage::Ast => artifacts.ast_text(),
        Stage::Semantics => artifacts.semantics_text(),
        Stage::Ir => artifacts.ir_text(),
        Stage::Optimized => artifacts.optimized_text(),
        Stage::Code => artifacts.code_text(),
    }
}

fn render_all(artifacts: &PipelineArtifacts) -> String {
    let sections = [
        ("Tokens", artifacts.tokens_text()),
        ("AST", artifacts.ast_text()),
        ("Semantics", artifacts.semantics_text()),
        ("IR", artifacts.ir_text()),
        ("Optimized IR", artifacts.optimized_text()),
        ("Target", artifacts.code_text()),
    ];

    sections
        .iter()
        .map(|(title, body)| format!("=== {title} ===\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
