use serde::{Deserialize, Serialize};

/// 题型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum QuestionType {
    /// 选择题
    #[serde(rename = "mcq")]
    #[value(name = "mcq")]
    MultipleChoice,
    /// 简答题
    #[serde(rename = "short")]
    #[value(name = "short")]
    ShortAnswer,
    /// 论述题
    #[serde(rename = "long")]
    #[value(name = "long")]
    LongAnswer,
    /// 编程题
    #[serde(rename = "coding")]
    #[value(name = "coding")]
    Coding,
}

impl QuestionType {
    /// 提示词中题型列表的固定顺序
    pub const ALL: [QuestionType; 4] = [
        QuestionType::MultipleChoice,
        QuestionType::ShortAnswer,
        QuestionType::LongAnswer,
        QuestionType::Coding,
    ];

    /// 模型输出中的行首标记，提示词和解析器共用
    pub fn marker(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MCQ:",
            QuestionType::ShortAnswer => "Q:",
            QuestionType::LongAnswer => "LQ:",
            QuestionType::Coding => "CQ:",
        }
    }

    /// 固定难度（不根据题目内容判断）
    pub fn default_difficulty(self) -> Difficulty {
        match self {
            QuestionType::MultipleChoice => Difficulty::Easy,
            QuestionType::ShortAnswer => Difficulty::Moderate,
            QuestionType::LongAnswer => Difficulty::Hard,
            QuestionType::Coding => Difficulty::Moderate,
        }
    }

    /// 短标签
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "mcq",
            QuestionType::ShortAnswer => "short",
            QuestionType::LongAnswer => "long",
            QuestionType::Coding => "coding",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 难度
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 各题型特有的数据
///
/// 选项只属于选择题、代码只属于编程题，其余题型没有附加字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// 四个选项，第一个为正确答案
    MultipleChoice { options: [String; 4] },
    ShortAnswer,
    LongAnswer,
    Coding { code: String },
}

/// 生成的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub question: String,
}

impl Question {
    pub fn multiple_choice(question: impl Into<String>, options: [String; 4]) -> Self {
        Self::with_kind(QuestionKind::MultipleChoice { options }, question)
    }

    pub fn short_answer(question: impl Into<String>) -> Self {
        Self::with_kind(QuestionKind::ShortAnswer, question)
    }

    pub fn long_answer(question: impl Into<String>) -> Self {
        Self::with_kind(QuestionKind::LongAnswer, question)
    }

    pub fn coding(question: impl Into<String>, code: impl Into<String>) -> Self {
        Self::with_kind(QuestionKind::Coding { code: code.into() }, question)
    }

    fn with_kind(kind: QuestionKind, question: impl Into<String>) -> Self {
        let question_type = match &kind {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::ShortAnswer => QuestionType::ShortAnswer,
            QuestionKind::LongAnswer => QuestionType::LongAnswer,
            QuestionKind::Coding { .. } => QuestionType::Coding,
        };
        Self {
            kind,
            difficulty: question_type.default_difficulty(),
            question: question.into(),
        }
    }

    pub fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::ShortAnswer => QuestionType::ShortAnswer,
            QuestionKind::LongAnswer => QuestionType::LongAnswer,
            QuestionKind::Coding { .. } => QuestionType::Coding,
        }
    }

    /// 选择题选项
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => Some(options.as_slice()),
            _ => None,
        }
    }

    /// 选择题答案（恒为第一个选项）
    pub fn answer(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => Some(options[0].as_str()),
            _ => None,
        }
    }

    /// 编程题代码
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::Coding { code } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// 用于 JSON 输出的题目记录
///
/// 字段布局与前端的题目对象一致：可选字段不存在时直接省略。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<&Question> for QuestionRecord {
    fn from(q: &Question) -> Self {
        Self {
            question_type: q.question_type(),
            difficulty: q.difficulty,
            question: q.question.clone(),
            options: q.options().map(|opts| opts.to_vec()),
            answer: q.answer().map(str::to_string),
            code: q.code().map(str::to_string),
        }
    }
}
