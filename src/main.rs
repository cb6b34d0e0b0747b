use clap::Parser;
use icon_sync::core::report::{export_json_report, render_sync_report};
use icon_sync::utils::error::SyncError;
use icon_sync::utils::{logger, validation::Validate};
use icon_sync::{CliConfig, IconSync, LocalStorage};

const EXIT_NOTHING_UPDATED: i32 = 2;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🔄 Icon Sync");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    tracing::info!(
        "✅ Configuration loaded: {} icons, {} identifiers",
        config.icons.len(),
        config.target_count()
    );

    let storage = LocalStorage::new(cli.root.clone());
    let sync = IconSync::new(storage, config).with_dry_run(cli.dry_run);

    let report = match sync.run() {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    println!("{}", render_sync_report(&report));

    if let Some(report_file) = cli.report_path() {
        export_json_report(&report, &report_file)?;
        println!("📊 Report exported to: {}", report_file.display());
    }

    if !report.is_success() {
        std::process::exit(EXIT_NOTHING_UPDATED);
    }

    if !report.dry_run {
        println!("📋 Next steps:");
        println!(
            "  1. Review changes: git diff {} {}",
            report.primary.path.display(),
            report.alternate.path.display()
        );
        println!("  2. Commit: git add . && git commit -m 'Sync icons from assets'");
    }

    Ok(())
}

fn fail(e: &SyncError) -> ! {
    tracing::error!(
        "❌ Icon sync failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
