use anyhow::Context;
use base_service::utils::{logger, validation::Validate};
use base_service::{CliConfig, ServiceConfig, ServiceError, ServiceRunner};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = cli.validate() {
        fail(&e);
    }

    // 載入服務配置 (可選)
    let file_config = match &cli.config {
        Some(path) => match ServiceConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => fail(&e),
        },
        None => ServiceConfig::default(),
    };

    // 初始化日誌
    let (level, json) = file_config.logger_settings(cli.verbose);
    logger::init_logger(level, json);

    tracing::info!("Starting base-service CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Service config: {:?}", file_config);
    }

    let service = file_config.echo_service(&cli.sentinel);
    let mut runner = ServiceRunner::new(service);

    match runner.run() {
        Ok(report) => {
            if cli.json {
                let rendered = report.to_json().context("failed to render init report")?;
                println!("{}", rendered);
            } else {
                println!("{}", report.output);
            }
        }
        Err(e) => {
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            fail(&e);
        }
    }

    Ok(())
}

fn fail(e: &ServiceError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
