use std::path::PathBuf;

use clap::Parser;

use crate::models::{Difficulty, GenerationSettings, QuestionType};
use crate::orchestrator::render::OutputFormat;

/// 根据输入文本调用 Gemini 生成练习题，并导出为 Word 文档
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 输入文本文件，省略时从标准输入读取
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 题型，逗号分隔
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub types: Vec<QuestionType>,

    /// 每种题型的数量
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub count: Option<u32>,

    /// 难度，逗号分隔
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub difficulty: Vec<Difficulty>,

    /// 导出的 Word 文件路径
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 只展示题目，不导出文件
    #[arg(long)]
    pub no_export: bool,

    /// 终端输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 用命令行参数覆盖出题设置
    pub fn apply_to(&self, settings: &mut GenerationSettings) {
        if !self.types.is_empty() {
            settings.set_types(&self.types);
        }
        if let Some(count) = self.count {
            settings.questions_per_type = count;
        }
        if !self.difficulty.is_empty() {
            settings.set_difficulties(&self.difficulty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::parse_from([
            "quizgen",
            "--types",
            "short,coding",
            "-n",
            "1",
            "--difficulty",
            "hard",
        ]);
        let mut settings = GenerationSettings::default();
        cli.apply_to(&mut settings);

        assert_eq!(
            settings.enabled_types(),
            vec![QuestionType::ShortAnswer, QuestionType::Coding]
        );
        assert_eq!(settings.questions_per_type, 1);
        assert_eq!(settings.enabled_difficulties(), vec![Difficulty::Hard]);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let cli = Cli::parse_from(["quizgen"]);
        let mut settings = GenerationSettings::default();
        cli.apply_to(&mut settings);
        assert_eq!(settings, GenerationSettings::default());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_count_out_of_range() {
        assert!(Cli::try_parse_from(["quizgen", "-n", "11"]).is_err());
        assert!(Cli::try_parse_from(["quizgen", "-n", "0"]).is_err());
    }
}
