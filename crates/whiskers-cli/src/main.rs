//! Whiskers CLI
//!
//! 命令行前端，复用与 GUI 相同的面板状态机完成一次猫狗分类

mod classify;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use whiskers_core::AppSettings;

#[derive(Parser)]
#[command(name = "whiskers", version, about = "Whiskers - 猫狗图片分类")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 上传图片并输出预测结果
    Predict {
        /// 图片路径
        file: PathBuf,
        /// 预测服务地址 (覆盖配置文件)
        #[arg(short, long)]
        endpoint: Option<String>,
        /// 请求超时时间 (秒)
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// 查看当前配置
    Config {
        /// 将当前配置写入配置文件
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut settings = AppSettings::load();

    match cli.command {
        Commands::Predict {
            file,
            endpoint,
            timeout,
        } => {
            if let Some(endpoint) = endpoint {
                settings.endpoint = endpoint;
            }
            if let Some(secs) = timeout {
                settings.request_timeout_secs = secs;
            }

            eprintln!("🐾 {}", file.display());
            let outcome = classify::run(&settings, &file).await?;
            if outcome.is_failure() {
                anyhow::bail!("{}", outcome.text());
            }
            println!("{}", outcome.text());
        }
        Commands::Config { init } => {
            if init {
                let path = settings.save()?;
                println!("✅ 已写入 {}", path.display());
            } else {
                println!("# {}", AppSettings::config_path().display());
            }
            println!("endpoint = {}", settings.endpoint);
            println!("request_timeout_secs = {}", settings.request_timeout_secs);
            println!("upload_file_name = {}", settings.upload_file_name);
            println!("upload_mime = {}", settings.upload_mime);
            println!("dark_mode = {}", settings.dark_mode);
        }
    }

    Ok(())
}

/// 初始化日志，默认只输出 warn 以上，避免干扰结果输出
fn init_logging() {
    // 桥接 log crate（whiskers-core 使用）到 tracing
    let _ = tracing_log::LogTracer::init();

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();
}
