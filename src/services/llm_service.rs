//! LLM 服务 - 业务能力层
//!
//! 只负责"把提示词发给模型、取回文本"这一能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `reqwest` 直接调用 Gemini `generateContent` 接口
//! - 密钥通过 URL 查询参数传递，来自配置而不是源码
//! - 一次请求一次往返：不重试、不设超时、不可取消

use std::future::Future;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};

/// 文本生成能力
///
/// 流程层只依赖这个 trait，测试时可以换成固定返回值的实现。
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = AppResult<String>> + Send;
}

/// LLM 服务
///
/// 职责：
/// - 组装 Gemini 请求体
/// - 发起一次 POST 请求
/// - 从响应中取出第一个候选的文本
pub struct LlmService {
    client: reqwest::Client,
    api_key: String,
    api_base_url: String,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// 缺少 API 密钥时直接报错，不会发出请求。
    pub fn new(config: &Config) -> AppResult<Self> {
        let api_key = config.require_api_key()?.to_string();

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model_name: config.model_name.clone(),
        })
    }

    /// 接口地址（不含密钥，可用于日志）
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url, self.model_name
        )
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 发送提示词并返回生成的文本
    pub async fn send_to_llm(&self, prompt: &str) -> AppResult<String> {
        let endpoint = self.endpoint();
        debug!("调用 Gemini API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", prompt.len());

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Gemini API 请求失败: {}", e);
                AppError::api_request_failed(&endpoint, e)
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        debug!("Gemini API 返回状态码: {}", status);

        extract_generated_text(status, &text)
    }
}

impl TextGenerator for LlmService {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.send_to_llm(prompt).await
    }
}

/// 根据状态码和响应体取出生成文本
///
/// - 非 2xx：返回 `ApiError::BadResponse`，带上接口返回的 `error.message`（为空时用 `Unknown error`）
/// - 2xx 但没有 `candidates[0].content.parts[0].text`：返回 `ApiError::NoContent`
pub fn extract_generated_text(status: StatusCode, body: &str) -> AppResult<String> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());

        warn!("Gemini API 返回错误 ({}): {}", status, message);

        return Err(ApiError::BadResponse {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    let response: GenerateContentResponse = serde_json::from_str(body)?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::NoContent.into())
}

// ========== 请求/响应结构 ==========

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            api_base_url: "http://localhost:8080/v1beta/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = LlmService::new(&Config::default());
        assert!(matches!(
            result,
            Err(AppError::Config(crate::error::ConfigError::MissingApiKey { .. }))
        ));
    }

    #[test]
    fn test_endpoint_hides_key() {
        let service = LlmService::new(&test_config()).unwrap();
        assert_eq!(
            service.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert!(!service.endpoint().contains("test-key"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_extract_first_candidate_text() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Q: one" }, { "text": "ignored" }], "role": "model" } },
                { "content": { "parts": [{ "text": "Q: two" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 10 }
        }"#;
        assert_eq!(extract_generated_text(StatusCode::OK, body).unwrap(), "Q: one");
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" } }"#;
        match extract_generated_text(StatusCode::BAD_REQUEST, body) {
            Err(AppError::Api(ApiError::BadResponse { status, message })) => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_extract_error_without_message() {
        let err = extract_generated_text(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
            .unwrap_err();
        assert_eq!(err.to_string(), "API Error: Unknown error");
    }

    #[test]
    fn test_extract_error_with_empty_message() {
        let err = extract_generated_text(StatusCode::BAD_REQUEST, r#"{"error":{"message":""}}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "API Error: Unknown error");
    }

    #[test]
    fn test_missing_payload_is_no_content() {
        for body in [
            r#"{}"#,
            r#"{ "candidates": [] }"#,
            r#"{ "candidates": [{ "finishReason": "SAFETY" }] }"#,
            r#"{ "candidates": [{ "content": { "parts": [] } }] }"#,
            r#"{ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }"#,
        ] {
            assert!(
                matches!(
                    extract_generated_text(StatusCode::OK, body),
                    Err(AppError::Api(ApiError::NoContent))
                ),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_invalid_success_body() {
        assert!(matches!(
            extract_generated_text(StatusCode::OK, "not json"),
            Err(AppError::Api(ApiError::JsonParseFailed { .. }))
        ));
    }

    /// 真实调用 Gemini API
    ///
    /// 运行方式：
    /// ```bash
    /// GEMINI_API_KEY=... cargo test test_send_to_llm_live -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_send_to_llm_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env().expect("读取环境变量失败");
        let service = LlmService::new(&config).expect("缺少 GEMINI_API_KEY");

        let response = service
            .send_to_llm("Reply with exactly one line: Q: What is Rust?")
            .await
            .expect("Gemini API 调用失败");

        println!("{}", response);
        assert!(!response.is_empty());
    }
}
