//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：加载配置，合并命令行参数
//! 2. **读取输入**：从文件或标准输入读取原文
//! 3. **生成题目**：委托 `Session` 完成一次生成
//! 4. **展示与导出**：把题目打印到标准输出，并按需写出 Word 文件

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Config;
use crate::orchestrator::render::{self, OutputFormat};
use crate::orchestrator::session::{ensure_input, Session};
use crate::error::AppResult;
use crate::services::{LlmService, TextGenerator};
use crate::utils::logging::{self, log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    input: Option<PathBuf>,
    output: PathBuf,
    export: bool,
    format: OutputFormat,
}

impl App {
    /// 初始化应用
    pub async fn initialize(cli: Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())
            .await
            .context("加载配置失败")?;

        cli.apply_to(&mut config.generation);
        if cli.verbose {
            config.verbose_logging = true;
        }

        logging::init(config.verbose_logging);
        log_startup(&config);

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_file));

        Ok(Self {
            config,
            input: cli.input,
            output,
            export: !cli.no_export,
            format: cli.format,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let text = read_input(self.input.as_deref()).await?;

        // 先检查输入，再检查密钥
        ensure_input(&text)?;
        let llm = LlmService::new(&self.config)?;
        info!("🔗 接口: {} (模型: {})", llm.endpoint(), llm.model_name());

        let mut session = Session::new(llm, self.config.generation.clone());
        session.set_text(text);

        let count = session.generate().await?;

        let questions = session.questions().await;
        let rendered = render::render(&questions, self.format)?;
        print!("{}", rendered);

        let target = self.export.then_some(self.output.as_path());
        let saved_to = export_results(&session, count, target).await?;
        print_final_stats(count, saved_to);

        Ok(())
    }
}

/// 按需导出本次生成的题目
///
/// 没有解析出题目或未指定导出路径时跳过，返回实际写出的文件路径。
pub async fn export_results<'a, G: TextGenerator>(
    session: &Session<G>,
    count: usize,
    target: Option<&'a Path>,
) -> AppResult<Option<&'a Path>> {
    if count == 0 {
        warn!("⚠️ 模型返回的内容中没有可识别的题目");
        return Ok(None);
    }

    match target {
        Some(path) => {
            session.export_to(path).await?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

/// 读取原文：给定路径时读文件，否则读标准输入
pub async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("📁 读取输入文件: {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("无法读取输入文件: {}", path.display()))
        }
        None => {
            info!("⌨️ 从标准输入读取原文...");
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("无法读取标准输入")?;
            Ok(text)
        }
    }
}
