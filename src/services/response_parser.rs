//! 响应解析 - 业务能力层
//!
//! 把模型返回的纯文本按行首标记解析成题目列表。
//!
//! 解析是宽松的：无法识别的行、选项不足的 `MCQ:` 行、缺少代码的 `CQ:` 行
//! 都会被直接丢弃，不会报错。

use tracing::debug;

use crate::models::{Question, QuestionType};

/// 解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// 按原文顺序识别出的题目
    pub questions: Vec<Question>,
    /// 带有已知标记但格式不完整的行数
    pub malformed: usize,
    /// 没有任何已知标记的非空行数
    pub unrecognized: usize,
}

/// 单行解析结果
enum LineOutcome {
    Parsed(Question),
    Malformed,
    Unrecognized,
}

/// 解析模型返回的文本
pub fn parse_response(raw: &str) -> Vec<Question> {
    parse_with_report(raw).questions
}

/// 解析模型返回的文本，同时统计被丢弃的行
pub fn parse_with_report(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line) {
            LineOutcome::Parsed(question) => report.questions.push(question),
            LineOutcome::Malformed => {
                debug!("丢弃格式不完整的行: {}", line);
                report.malformed += 1;
            }
            LineOutcome::Unrecognized => report.unrecognized += 1,
        }
    }

    report
}

/// 按行首标记分类（标记必须位于行首，不先去除前导空白）
fn parse_line(line: &str) -> LineOutcome {
    if let Some(rest) = line.strip_prefix(QuestionType::ShortAnswer.marker()) {
        return LineOutcome::Parsed(Question::short_answer(rest.trim()));
    }

    if let Some(rest) = line.strip_prefix(QuestionType::MultipleChoice.marker()) {
        let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
        // 1 个题干 + 4 个选项，多余的部分忽略
        if parts.len() < 5 {
            return LineOutcome::Malformed;
        }
        let options = [
            parts[1].to_string(),
            parts[2].to_string(),
            parts[3].to_string(),
            parts[4].to_string(),
        ];
        return LineOutcome::Parsed(Question::multiple_choice(parts[0], options));
    }

    if let Some(rest) = line.strip_prefix(QuestionType::LongAnswer.marker()) {
        return LineOutcome::Parsed(Question::long_answer(rest.trim()));
    }

    if let Some(rest) = line.strip_prefix(QuestionType::Coding.marker()) {
        // 只在第一个 `|` 处切分，代码里的 `|` 保留
        return match rest.split_once('|') {
            Some((question, code)) => {
                LineOutcome::Parsed(Question::coding(question.trim(), code.trim()))
            }
            None => LineOutcome::Malformed,
        };
    }

    LineOutcome::Unrecognized
}
