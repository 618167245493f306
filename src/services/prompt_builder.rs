//! 提示词构建
//!
//! 把出题设置转换成发给模型的指令。行首标记取自 `QuestionType::marker`，
//! 与响应解析器保持一致。

use crate::models::{GenerationSettings, QuestionType};

/// 构建出题提示词
///
/// 不做任何校验：没有勾选题型或难度时对应部分为空，由调用方负责拦截。
pub fn build_generation_prompt(settings: &GenerationSettings, text: &str) -> String {
    let count = settings.questions_per_type;

    let question_types: Vec<String> = settings
        .enabled_types()
        .into_iter()
        .map(|t| match t {
            QuestionType::MultipleChoice => {
                format!("{count} multiple-choice questions (MCQ) with 4 options each")
            }
            QuestionType::ShortAnswer => format!("{count} short-answer questions"),
            QuestionType::LongAnswer => format!("{count} long-answer questions"),
            QuestionType::Coding => format!("{count} coding questions"),
        })
        .collect();

    let difficulty_levels: Vec<&str> = settings
        .enabled_difficulties()
        .into_iter()
        .map(|d| d.name())
        .collect();

    let mcq = QuestionType::MultipleChoice.marker();
    let short = QuestionType::ShortAnswer.marker();
    let long = QuestionType::LongAnswer.marker();
    let coding = QuestionType::Coding.marker();

    format!(
        r#"Generate the following questions based on the text below:
- {types}

The questions must align with the following difficulty levels: {levels}.

Difficulty Levels:
1. *Easy* – Simple questions that test basic knowledge (e.g., recall facts, define terms).
2. *Moderate* – Questions that require understanding and application of concepts (e.g., explain processes, solve problems).
3. *Hard* – Challenging questions that require analysis, evaluation, or creativity (e.g., compare and contrast, design experiments).

For multiple-choice questions (MCQ), provide the question followed by 4 options separated by "|". The first option should be the correct answer.
Example: {mcq} What is photosynthesis? | Process by which plants convert sunlight into energy | Process of breathing | Process of digestion | Process of reproduction

For short-answer questions, start the question with "{short}".
For long-answer questions, start the question with "{long}".
For coding questions, start the question with "{coding}" and provide a code snippet or problem statement.
Example: {coding} Write a Python function to calculate the factorial of a number. | def factorial(n): return 1 if n == 0 else n * factorial(n-1)

Ensure the questions are relevant to the text and match the specified difficulty levels.

Text: {text}"#,
        types = question_types.join("\n- "),
        levels = difficulty_levels.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_default_settings_prompt() {
        let prompt = build_generation_prompt(&GenerationSettings::default(), "Photosynthesis.");

        assert!(prompt.contains(
            "- 3 multiple-choice questions (MCQ) with 4 options each\n- 3 short-answer questions\n- 3 coding questions"
        ));
        assert!(!prompt.contains("long-answer questions\n"));
        assert!(prompt.contains("difficulty levels: easy, moderate, hard."));
        assert!(prompt.ends_with("Text: Photosynthesis."));
    }

    #[test]
    fn test_prompt_embeds_parser_markers() {
        let prompt = build_generation_prompt(&GenerationSettings::default(), "x");
        assert!(prompt.contains("Example: MCQ: What is photosynthesis?"));
        assert!(prompt.contains(r#"start the question with "Q:""#));
        assert!(prompt.contains(r#"start the question with "LQ:""#));
        assert!(prompt.contains(r#"start the question with "CQ:""#));
    }

    #[test]
    fn test_selected_types_and_levels_only() {
        let mut settings = GenerationSettings::default();
        settings.set_types(&[QuestionType::LongAnswer]);
        settings.set_difficulties(&[Difficulty::Hard]);
        settings.questions_per_type = 1;

        let prompt = build_generation_prompt(&settings, "Rust ownership");
        assert!(prompt.contains("- 1 long-answer questions\n"));
        assert!(!prompt.contains("multiple-choice questions (MCQ) with"));
        assert!(prompt.contains("difficulty levels: hard."));
    }

    #[test]
    fn test_nothing_enabled_degenerates() {
        let mut settings = GenerationSettings::default();
        settings.set_types(&[]);
        settings.set_difficulties(&[]);

        let prompt = build_generation_prompt(&settings, "t");
        assert!(prompt.starts_with("Generate the following questions based on the text below:\n- \n"));
        assert!(prompt.contains("difficulty levels: ."));
    }
}
