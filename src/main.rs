use clap::Parser;
use project_pricer::utils::logger;
use project_pricer::{render, write_report, CliConfig, PricingEngine, PricingError};
use std::path::Path;

fn fail(e: PricingError) -> ! {
    tracing::error!(
        "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting project-pricer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 合併預設值、設定檔與命令列參數
    let resolved = match cli.resolve() {
        Ok(resolved) => resolved,
        Err(e) => fail(e),
    };

    let engine = PricingEngine::with_validation(resolved.snapshot, !resolved.skip_validation);
    let result = match engine.run() {
        Ok(result) => result,
        Err(e) => fail(e),
    };

    let report = match render(&result, resolved.format) {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    match &resolved.output_path {
        Some(path) => {
            if let Err(e) = write_report(Path::new(path), &report) {
                fail(e);
            }
        }
        None => println!("{}", report.trim_end()),
    }
}
