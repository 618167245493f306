use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::settings::QUESTIONS_PER_TYPE_RANGE;
use crate::models::GenerationSettings;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 程序配置
///
/// 优先级：默认值 < 配置文件 < 环境变量 < 命令行参数。
/// API 密钥没有默认值，必须由外部提供。
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- Gemini 配置 ---
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub model_name: String,
    /// 导出的 Word 文件
    pub output_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 默认出题设置
    pub generation: GenerationSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model_name: "gemini-2.0-flash".to_string(),
            output_file: "GeneratedQuestions.docx".to_string(),
            verbose_logging: false,
            generation: GenerationSettings::default(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base_url", &self.api_base_url)
            .field("model_name", &self.model_name)
            .field("output_file", &self.output_file)
            .field("verbose_logging", &self.verbose_logging)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Config {
    /// 默认值叠加环境变量
    pub fn from_env() -> AppResult<Self> {
        Self::default().apply_env(|name| std::env::var(name).ok())
    }

    /// 加载配置：可选的 TOML 文件，再叠加环境变量
    pub async fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub async fn from_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        if !config.generation.count_in_range() {
            return Err(AppError::Config(ConfigError::ValueOutOfRange {
                path: path.display().to_string(),
                key: "generation.questions_per_type".to_string(),
                value: config.generation.questions_per_type,
                min: *QUESTIONS_PER_TYPE_RANGE.start(),
                max: *QUESTIONS_PER_TYPE_RANGE.end(),
            }));
        }

        Ok(config)
    }

    /// 用环境变量覆盖配置
    ///
    /// `lookup` 便于测试时替换真实环境。
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup("GEMINI_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model_name = model;
        }
        if let Some(output) = lookup("QUIZGEN_OUTPUT") {
            self.output_file = output;
        }
        if let Some(value) = lookup("QUIZGEN_VERBOSE") {
            self.verbose_logging = value.parse().map_err(|_| {
                AppError::Config(ConfigError::EnvVarParseFailed {
                    var_name: "QUIZGEN_VERBOSE".to_string(),
                    value: value.clone(),
                    expected_type: "bool".to_string(),
                })
            })?;
        }
        Ok(self)
    }

    /// 获取 API 密钥，缺失或为空时报错（在发出任何请求之前）
    pub fn require_api_key(&self) -> AppResult<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AppError::missing_api_key(API_KEY_ENV)),
        }
    }
}
