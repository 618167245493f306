//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层持有全部可变状态，并按顺序调度下层能力。
//!
//! ## 模块划分
//!
//! ### `app` - 命令行应用
//! - 加载配置、读取输入
//! - 创建 `LlmService` 和 `Session`
//! - 打印题目、导出 Word 文件
//!
//! ### `session` - 出题会话
//! - 持有输入文本、设置、生成中标志、题目列表
//! - 同一时间只允许一次生成
//!
//! ### `render` - 终端展示
//!
//! ## 层次关系
//!
//! ```text
//! app (命令行)
//!     ↓
//! session (状态 + 生成中标志)
//!     ↓
//! workflow::QuestionFlow (提示词 → 模型 → 解析)
//!     ↓
//! services (能力层：prompt / llm / parser / docx)
//! ```

pub mod app;
pub mod render;
pub mod session;

pub use app::App;
pub use session::Session;
