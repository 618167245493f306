use thiserror::Error;

use crate::models::settings::QUESTIONS_PER_TYPE_RANGE;

/// 应用程序错误类型
///
/// 面向用户的提示文本保持与界面一致（英文），日志中再补充上下文。
#[derive(Debug, Error)]
pub enum AppError {
    /// 用户输入错误（不会发出请求）
    #[error(transparent)]
    Input(#[from] InputError),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 远程生成接口错误
    #[error(transparent)]
    Api(#[from] ApiError),
    /// 文档导出错误
    #[error(transparent)]
    Export(#[from] ExportError),
    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
    /// 已有生成任务在进行中
    #[error("Questions are already being generated, please wait")]
    Busy,
}

/// 输入错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 输入文本为空
    #[error("Please enter some text first")]
    EmptyText,
    /// 没有勾选任何题型
    #[error("Please select at least one question type")]
    NoQuestionTypes,
    /// 没有勾选任何难度
    #[error("Please select at least one difficulty level")]
    NoDifficultyLevels,
    /// 每种题型的数量超出范围
    #[error("Questions per type must be between {min} and {max}, got {value}")]
    QuestionCountOutOfRange { value: u32, min: u32, max: u32 },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少 API 密钥
    #[error("Gemini API key is missing. Set {var_name} or `api_key` in the config file.")]
    MissingApiKey { var_name: String },
    /// 环境变量解析失败
    #[error("environment variable {var_name}: value '{value}' is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置项取值非法
    #[error("config {path}: {key} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        path: String,
        key: String,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// 远程接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("Request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 接口返回非成功状态码
    #[error("API Error: {message}")]
    BadResponse { status: u16, message: String },
    /// 成功响应中没有生成内容
    #[error("No questions generated by AI.")]
    NoContent,
    /// 响应 JSON 解析失败
    #[error("Failed to decode API response: {source}")]
    JsonParseFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// 文档导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 题目列表为空
    #[error("There are no questions to export")]
    NothingToExport,
    /// docx 打包失败
    #[error("Failed to build the Word document: {message}")]
    PackFailed { message: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("Failed to parse {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建数量超出范围错误
    pub fn question_count_out_of_range(value: u32) -> Self {
        AppError::Input(InputError::QuestionCountOutOfRange {
            value,
            min: *QUESTIONS_PER_TYPE_RANGE.start(),
            max: *QUESTIONS_PER_TYPE_RANGE.end(),
        })
    }

    /// 创建缺少密钥错误
    pub fn missing_api_key(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::MissingApiKey {
            var_name: var_name.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_remote_message() {
        let err: AppError = ApiError::BadResponse {
            status: 400,
            message: "API key not valid".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "API Error: API key not valid");
    }

    #[test]
    fn test_input_errors_are_user_facing() {
        let err: AppError = InputError::EmptyText.into();
        assert_eq!(err.to_string(), "Please enter some text first");
        assert!(matches!(err, AppError::Input(InputError::EmptyText)));
    }

    #[test]
    fn test_count_error_names_bounds() {
        let err = AppError::question_count_out_of_range(0);
        assert_eq!(
            err.to_string(),
            "Questions per type must be between 1 and 10, got 0"
        );
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = AppError::missing_api_key("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
