//! 终端展示
//!
//! 文本格式对应原界面的题目列表；JSON 格式输出与前端一致的题目对象数组。

use std::fmt::Write;

use crate::error::AppResult;
use crate::models::{Question, QuestionRecord};

pub const MCQ_NOTE: &str = "Note: For MCQ's First option is the correct answer";
pub const CODE_PLACEHOLDER: &str = "Code snippet will appear here.";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(questions: &[Question], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(questions)),
        OutputFormat::Json => render_json(questions),
    }
}

pub fn render_text(questions: &[Question]) -> String {
    let mut out = String::new();
    if questions.is_empty() {
        return out;
    }

    // write! 到 String 不会失败
    let _ = writeln!(out, "Generated Questions");
    let _ = writeln!(out, "{}", MCQ_NOTE);

    for (index, question) in questions.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. [{}] ({})",
            index + 1,
            question.question_type().label().to_uppercase(),
            question.difficulty
        );
        let _ = writeln!(out, "{}", question.question);

        if let Some(options) = question.options() {
            for option in options {
                let _ = writeln!(out, "  ( ) {}", option);
            }
        }

        if let Some(code) = question.code() {
            let code = if code.is_empty() { CODE_PLACEHOLDER } else { code };
            for line in code.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }

    out
}

pub fn render_json(questions: &[Question]) -> AppResult<String> {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
