//! # Quizgen
//!
//! 一个根据原文调用 Gemini 自动出题、并导出 Word 文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用三层架构，控制流严格线性：
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，彼此独立
//! - `prompt_builder` - 把出题设置转换成提示词
//! - `LlmService` - 一次 Gemini 请求，取回文本
//! - `response_parser` - 按行首标记解析题目
//! - `docx_exporter` - 题目列表导出为 docx
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一次生成"的完整流程
//! - `QuestionFlow` - 校验 → 提示词 → 模型 → 解析
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/session` - 持有状态，保证同一时间只有一次生成
//! - `orchestrator/app` - 命令行入口，负责输入、展示和导出
//!
//! ## 行首标记协议
//!
//! 模型按行输出题目，解析器只识别以下行首标记：
//!
//! | 标记 | 题型 | 格式 |
//! |------|------|------|
//! | `Q:` | 简答 | `Q: 题干` |
//! | `MCQ:` | 选择 | `MCQ: 题干 \| 正确选项 \| 选项 \| 选项 \| 选项` |
//! | `LQ:` | 论述 | `LQ: 题干` |
//! | `CQ:` | 编程 | `CQ: 题干 \| 代码` |

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, GenerationSettings, Question, QuestionType};
pub use orchestrator::{App, Session};
pub use services::{LlmService, TextGenerator};
pub use workflow::QuestionFlow;
