pub mod docx_exporter;
pub mod llm_service;
pub mod prompt_builder;
pub mod response_parser;

pub use docx_exporter::{export_docx, layout_questions, write_docx, DocumentLayout};
pub use llm_service::{LlmService, TextGenerator};
pub use prompt_builder::build_generation_prompt;
pub use response_parser::{parse_response, parse_with_report, ParseReport};
