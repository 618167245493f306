use anyhow::Result;
use clap::Parser;
use quizgen::cli::Cli;
use quizgen::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置、初始化日志并运行
    App::initialize(cli).await?.run().await?;

    Ok(())
}
