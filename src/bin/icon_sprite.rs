use clap::Parser;
use icon_sync::core::report::render_sprite_report;
use icon_sync::utils::logger;
use icon_sync::{LocalStorage, SpriteBuilder, SyncConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "icon-sprite")]
#[command(about = "Merge every SVG icon in a directory into one <defs> sprite")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that relative paths are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Override the icons directory
    #[arg(long)]
    icons_dir: Option<PathBuf>,

    /// Override the sprite output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Build the sprite without writing it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("🧩 Icon Sprite");

    let mut config = match SyncConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(icons_dir) = args.icons_dir {
        config.paths.icons_dir = icons_dir;
    }
    if let Some(output) = args.output {
        config.sprite.output = output;
    }

    if let Err(e) = config.validate_sprite_config() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let builder = SpriteBuilder::new(LocalStorage::new(args.root), config).with_dry_run(args.dry_run);

    match builder.run() {
        Ok(report) => {
            println!("{}", render_sprite_report(&report));
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Sprite generation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
