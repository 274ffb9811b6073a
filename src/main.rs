use clap::Parser;
use portfolio_catalog::app::runner;
use portfolio_catalog::utils::logger;
use portfolio_catalog::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = runner::run(&config, &mut stdout.lock(), &mut stderr.lock())?;

    if code != runner::EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}
