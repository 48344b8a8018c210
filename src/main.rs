use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use range_downloader::downloader::hooks::TracingHook;
use range_downloader::downloader::{DownloadError, RangeDownloader, DEFAULT_WORKERS};
use range_downloader::utils::filename_from_url;

/// 并发分片下载器。
///
/// 先探测服务器是否支持 Range 请求，再把文件等分成若干段并发下载，最后按序合并。
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 要下载的文件 URL
    #[arg(short, long)]
    url: String,

    /// 输出文件路径；不指定时从 URL 推导文件名
    #[arg(short, long)]
    output: Option<String>,

    /// 分片数（每个分片一个并发连接）
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    concurrency: usize,

    /// 同时进行的分片请求上限；不指定则不限制
    #[arg(long)]
    max_in_flight: Option<usize>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let output = args
        .output
        .unwrap_or_else(|| filename_from_url(&args.url));

    let mut downloader = RangeDownloader::new(args.url)
        .save_to(&output)
        .workers(args.concurrency)
        .with_hook(TracingHook);
    if let Some(n) = args.max_in_flight {
        downloader = downloader.max_in_flight(n);
    }

    match downloader.send().await {
        Ok(_) => ExitCode::SUCCESS,
        // 探测与合并阶段的失败已经由 TracingHook 输出
        Err(e @ (DownloadError::InvalidJob(_) | DownloadError::Client(_))) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
        Err(_) => ExitCode::FAILURE,
    }
}
