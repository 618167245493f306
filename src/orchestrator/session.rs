//! 会话 - 编排层
//!
//! 持有全部可变状态：输入文本、出题设置、生成中标志、题目列表。

use std::path::Path;

use tokio::sync::{RwLock, Semaphore};
use tracing::info;

use crate::error::{AppError, AppResult, InputError};
use crate::models::{GenerationSettings, Question};
use crate::services::{docx_exporter, TextGenerator};
use crate::workflow::QuestionFlow;

/// 校验输入文本
pub fn ensure_input(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyText.into());
    }
    Ok(())
}

/// 出题会话
///
/// 同一时间只允许一次生成：生成中标志由单许可信号量实现，
/// 许可在任何退出路径上都会释放。
pub struct Session<G> {
    flow: QuestionFlow<G>,
    text: String,
    settings: GenerationSettings,
    busy: Semaphore,
    questions: RwLock<Vec<Question>>,
}

impl<G: TextGenerator> Session<G> {
    pub fn new(generator: G, settings: GenerationSettings) -> Self {
        Self {
            flow: QuestionFlow::new(generator),
            text: String::new(),
            settings,
            busy: Semaphore::new(1),
            questions: RwLock::new(Vec::new()),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn settings_mut(&mut self) -> &mut GenerationSettings {
        &mut self.settings
    }

    pub fn generator(&self) -> &G {
        self.flow.generator()
    }

    /// 是否有生成任务在进行
    pub fn is_generating(&self) -> bool {
        self.busy.available_permits() == 0
    }

    /// 生成题目并替换当前列表
    ///
    /// 失败时保留原有列表。返回本次生成的题目数量。
    pub async fn generate(&self) -> AppResult<usize> {
        ensure_input(&self.text)?;

        let _permit = self.busy.try_acquire().map_err(|_| AppError::Busy)?;

        let questions = self.flow.run(&self.settings, &self.text).await?;
        let count = questions.len();
        *self.questions.write().await = questions;

        Ok(count)
    }

    /// 当前题目列表的快照
    pub async fn questions(&self) -> Vec<Question> {
        self.questions.read().await.clone()
    }

    /// 把当前题目导出为 docx 字节
    pub async fn export(&self) -> AppResult<Vec<u8>> {
        let questions = self.questions.read().await;
        docx_exporter::export_docx(&questions)
    }

    /// 把当前题目导出到文件
    pub async fn export_to(&self, path: &Path) -> AppResult<()> {
        let questions = self.questions.read().await;
        docx_exporter::write_docx(&questions, path).await?;
        info!("💾 文件已保存: {}", path.display());
        Ok(())
    }
}
