//! 出题流程 - 流程层
//!
//! 核心职责：定义"一次生成"的完整流程
//!
//! 流程顺序：
//! 1. 校验设置（至少一个题型、一个难度）
//! 2. 构建提示词
//! 3. 调用模型
//! 4. 解析响应

use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, InputError};
use crate::models::{GenerationSettings, Question};
use crate::services::{build_generation_prompt, parse_with_report, TextGenerator};
use crate::utils::logging::truncate_text;

/// 出题流程
///
/// - 不持有任何界面状态
/// - 只依赖业务能力（services）
pub struct QuestionFlow<G> {
    generator: G,
}

impl<G: TextGenerator> QuestionFlow<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn run(&self, settings: &GenerationSettings, text: &str) -> AppResult<Vec<Question>> {
        // 提示词本身不做校验，这里拦截
        let types = settings.enabled_types();
        if types.is_empty() {
            return Err(InputError::NoQuestionTypes.into());
        }
        if settings.enabled_difficulties().is_empty() {
            return Err(InputError::NoDifficultyLevels.into());
        }
        if !settings.count_in_range() {
            return Err(AppError::question_count_out_of_range(
                settings.questions_per_type,
            ));
        }

        info!(
            "📝 题型: {:?}，每种 {} 道",
            types.iter().map(|t| t.label()).collect::<Vec<_>>(),
            settings.questions_per_type
        );

        let prompt = build_generation_prompt(settings, text);
        debug!("提示词: {}", truncate_text(&prompt, 200));

        info!("🤖 正在调用模型生成题目...");
        let raw = self.generator.generate(&prompt).await?;
        debug!("模型返回 {} 行", raw.lines().count());

        let report = parse_with_report(&raw);
        if report.malformed > 0 {
            warn!("⚠️ 丢弃了 {} 行格式不完整的题目", report.malformed);
        }
        if report.unrecognized > 0 {
            debug!("跳过 {} 行无标记文本", report.unrecognized);
        }

        info!("✓ 解析出 {} 道题目", report.questions.len());

        Ok(report.questions)
    }
}
