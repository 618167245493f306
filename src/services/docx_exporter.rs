//! Word 文档导出 - 业务能力层
//!
//! 先把题目列表排成纯数据的版式（段落 + 文本段），再用 `docx-rs` 渲染打包。
//! 每道题对应一个段落。

use std::io::Cursor;
use std::path::Path;

use docx_rs::{BreakType, Docx, Paragraph, Run};
use tracing::{debug, info};

use crate::error::{AppError, AppResult, ExportError};
use crate::models::Question;

/// 默认导出文件名
pub const DEFAULT_FILE_NAME: &str = "GeneratedQuestions.docx";

/// 既没有答案也没有代码时的答案行
pub const ANSWER_FALLBACK: &str = "Refer to the first option for MCQ";

/// 文本段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    pub text: String,
    pub bold: bool,
    /// 文本前的换行数
    pub breaks_before: usize,
}

impl RunLayout {
    fn plain(text: impl Into<String>, breaks_before: usize) -> Self {
        Self {
            text: text.into(),
            bold: false,
            breaks_before,
        }
    }

    fn bold(text: impl Into<String>, breaks_before: usize) -> Self {
        Self {
            text: text.into(),
            bold: true,
            breaks_before,
        }
    }
}

/// 段落
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphLayout {
    pub runs: Vec<RunLayout>,
}

/// 整个文档的版式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLayout {
    pub paragraphs: Vec<ParagraphLayout>,
}

/// 把题目列表排成文档版式
pub fn layout_questions(questions: &[Question]) -> DocumentLayout {
    let paragraphs = questions
        .iter()
        .enumerate()
        .map(|(index, question)| layout_question(index + 1, question))
        .collect();

    DocumentLayout { paragraphs }
}

fn layout_question(number: usize, question: &Question) -> ParagraphLayout {
    let mut runs = vec![RunLayout::bold(
        format!("Question {}: {}", number, question.question),
        0,
    )];

    if let Some(options) = question.options() {
        for (i, option) in options.iter().enumerate() {
            runs.push(RunLayout::plain(format!("Option {}: {}", i + 1, option), 1));
        }
    }

    let code = question.code().filter(|code| !code.is_empty());
    if let Some(code) = code {
        runs.push(RunLayout::plain("Code:", 1));
        for line in code.lines() {
            runs.push(RunLayout::plain(line, 1));
        }
    }

    // 空字符串视为缺失：答案 > 代码 > 固定提示
    let answer = question
        .answer()
        .filter(|answer| !answer.is_empty())
        .or(code)
        .unwrap_or(ANSWER_FALLBACK);
    runs.push(RunLayout::bold(format!("Answer: {}", answer), 2));

    ParagraphLayout { runs }
}

/// 把版式渲染成 docx 字节
pub fn render_docx(layout: &DocumentLayout) -> AppResult<Vec<u8>> {
    let mut docx = Docx::new();

    for paragraph_layout in &layout.paragraphs {
        let mut paragraph = Paragraph::new();
        for run_layout in &paragraph_layout.runs {
            let mut run = Run::new();
            for _ in 0..run_layout.breaks_before {
                run = run.add_break(BreakType::TextWrapping);
            }
            run = run.add_text(run_layout.text.as_str());
            if run_layout.bold {
                run = run.bold();
            }
            paragraph = paragraph.add_run(run);
        }
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).map_err(|e| {
        AppError::Export(ExportError::PackFailed {
            message: e.to_string(),
        })
    })?;

    let bytes = buffer.into_inner();
    debug!("docx 打包完成，大小: {} 字节", bytes.len());
    Ok(bytes)
}

/// 导出题目列表为 docx 字节
pub fn export_docx(questions: &[Question]) -> AppResult<Vec<u8>> {
    if questions.is_empty() {
        return Err(ExportError::NothingToExport.into());
    }
    render_docx(&layout_questions(questions))
}

/// 导出题目列表并写入文件
pub async fn write_docx(questions: &[Question], path: &Path) -> AppResult<()> {
    let bytes = export_docx(questions)?;

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    info!("📄 已导出 {} 道题目到 {}", questions.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq() -> Question {
        Question::multiple_choice(
            "What is 2+2?",
            ["4".to_string(), "3".to_string(), "5".to_string(), "6".to_string()],
        )
    }

    #[test]
    fn test_one_paragraph_per_question() {
        let layout = layout_questions(&[
            mcq(),
            Question::short_answer("Define osmosis."),
            Question::coding("Reverse", "s[::-1]"),
        ]);
        assert_eq!(layout.paragraphs.len(), 3);
        assert_eq!(layout.paragraphs[1].runs[0].text, "Question 2: Define osmosis.");
        assert!(layout.paragraphs[1].runs[0].bold);
    }

    #[test]
    fn test_mcq_layout() {
        let layout = layout_questions(&[mcq()]);
        let texts: Vec<&str> = layout.paragraphs[0]
            .runs
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Question 1: What is 2+2?",
                "Option 1: 4",
                "Option 2: 3",
                "Option 3: 5",
                "Option 4: 6",
                "Answer: 4",
            ]
        );

        let answer = layout.paragraphs[0].runs.last().unwrap();
        assert!(answer.bold);
        assert_eq!(answer.breaks_before, 2);
        assert!(layout.paragraphs[0].runs[1..5]
            .iter()
            .all(|r| !r.bold && r.breaks_before == 1));
    }

    #[test]
    fn test_coding_layout_uses_code_as_answer() {
        let layout = layout_questions(&[Question::coding(
            "Reverse a string",
            "def rev(s): return s[::-1]",
        )]);
        let runs = &layout.paragraphs[0].runs;
        assert_eq!(runs[1].text, "Code:");
        assert_eq!(runs[2].text, "def rev(s): return s[::-1]");
        assert_eq!(runs[3].text, "Answer: def rev(s): return s[::-1]");
        assert_eq!(runs.len(), 4);
    }

    #[test]
    fn test_answer_fallback() {
        let layout = layout_questions(&[
            Question::long_answer("Discuss."),
            Question::coding("Empty code", ""),
        ]);
        for paragraph in &layout.paragraphs {
            assert_eq!(
                paragraph.runs.last().unwrap().text,
                "Answer: Refer to the first option for MCQ"
            );
        }
        // 空代码不输出 Code 块
        assert_eq!(layout.paragraphs[1].runs.len(), 2);
    }

    #[test]
    fn test_empty_first_option_falls_back() {
        let q = Question::multiple_choice(
            "q",
            [String::new(), "b".to_string(), "c".to_string(), "d".to_string()],
        );
        let layout = layout_questions(&[q]);
        assert_eq!(
            layout.paragraphs[0].runs.last().unwrap().text,
            format!("Answer: {}", ANSWER_FALLBACK)
        );
    }

    #[test]
    fn test_export_produces_zip_archive() {
        let bytes = export_docx(&[mcq(), Question::short_answer("Why?")]).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_export_rejects_empty_list() {
        assert!(matches!(
            export_docx(&[]),
            Err(AppError::Export(ExportError::NothingToExport))
        ));
    }

    #[tokio::test]
    async fn test_write_docx_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        write_docx(&[mcq()], &path).await.unwrap();

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
