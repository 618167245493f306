//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 默认级别 info（`verbose` 时为 debug），可用 `RUST_LOG` 覆盖。
/// 日志写到标准错误，标准输出只留给题目。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    let settings = &config.generation;
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🧠 模型: {}", config.model_name);
    info!(
        "📊 每种题型 {} 道，难度: {:?}",
        settings.questions_per_type,
        settings
            .enabled_difficulties()
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
    );
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `count`: 生成的题目数量
/// - `saved_to`: 导出的文件路径（未导出时为 None）
pub fn print_final_stats(count: usize, saved_to: Option<&Path>) {
    info!("{}", "=".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 生成题目: {}", count);
    if let Some(path) = saved_to {
        info!("文档已保存至: {}", path.display());
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("光合作用是什么", 4), "光合作用...");
    }
}
