mod cli;

use cli::{Args, Command};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voucher_service::adapters::outbound::filesystem::JsonFileVoucherRepository;
use voucher_service::application::factories::{FormatterFactory, PresenterFactory};
use voucher_service::application::use_cases::VoucherService;
use voucher_service::config::{discover_config, load_config_from_path, ConfigFile};
use voucher_service::ports::inbound::VoucherServicePort;
use voucher_service::shared::{ExitCode, Result};
use voucher_service::voucher::domain::{Amount, DiscountPercent, VoucherCode};

/// Store file used when neither the CLI nor the config names one
const DEFAULT_STORE_FILE: &str = "vouchers.json";

#[tokio::main]
async fn main() {
    init_tracing();

    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n{} {}", "error:".red().bold(), e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

/// Initialize tracing from the VOUCHER_LOG environment variable, defaulting to "warn".
/// Logs go to stderr so stdout only carries command output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("VOUCHER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let store_path = args
        .store
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE));
    let format = args.format.or(config.format).unwrap_or_default();

    // Create adapters (Dependency Injection)
    let repository = JsonFileVoucherRepository::new(store_path);
    let service = VoucherService::with_policy(repository, config.discount_policy()?);
    let formatter = FormatterFactory::create(format);

    let output = match args.command {
        Command::Create { code, discount } => {
            let code = VoucherCode::new(code)?;
            let discount = DiscountPercent::new(discount)?;
            service.create_voucher(code.clone(), discount).await?;
            formatter.format_created(&code, discount)?
        }
        Command::Apply { code, amount } => {
            let code = VoucherCode::new(code)?;
            let amount = Amount::new(amount)?;
            let result = service.apply_voucher(&code, amount).await?;
            formatter.format_apply(&result)?
        }
    };

    let presenter = PresenterFactory::create(args.output.into());
    presenter.present(&output)?;

    Ok(())
}

/// Explicit config path wins; otherwise look for the config in the working directory
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}
