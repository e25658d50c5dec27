use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use rust_edurecords::commands::Cli;
use rust_edurecords::config::AppConfig;
use rust_edurecords::runtime::prepare_startup;

#[tokio::main]
async fn main() {
    dotenv().ok();
    setup_panic!();

    // 先解析参数，--help / --version 不需要配置
    let cli = Cli::parse();

    // 初始化配置
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志，输出到 stderr，避免与表格输出混在一起
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "Starting {} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let mut ctx = match prepare_startup(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("Startup failed: {}", e);
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            #[cfg(not(debug_assertions))]
            eprintln!("{}", e.format_simple());
            std::process::exit(1);
        }
    };

    let outcome = cli.run(&mut ctx).await;
    debug!("Command finished: {:?}", outcome);

    // 退出前释放日志 guard，确保缓冲的日志写出
    drop(_guard);
    std::process::exit(outcome.exit_code());
}
