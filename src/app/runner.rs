use crate::config::CliConfig;
use crate::core::catalog::PortfolioCatalog;
use crate::core::export::export;
use crate::utils::error::CatalogError;
use crate::utils::validation::Validate;
use anyhow::Context;
use std::io::Write;

pub const EXIT_OK: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_LOAD_FAILED: i32 = 2;

/// Executes one CLI invocation and returns the process exit code.
///
/// Catalog output goes to `out`, user-facing errors to `err`. Only failures
/// writing to those streams surface as `Err`.
pub fn run<O: Write, E: Write>(config: &CliConfig, out: &mut O, err: &mut E) -> anyhow::Result<i32> {
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report(err, &e)?;
        return Ok(EXIT_USAGE);
    }

    let source = config.source();
    tracing::info!("Using {}", source.describe());

    let catalog = match source.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load {}: {}", source.describe(), e);
            report(err, &e)?;
            return Ok(EXIT_LOAD_FAILED);
        }
    };

    if config.count {
        writeln!(out, "{}", catalog.get_topic_count())?;
        return Ok(EXIT_OK);
    }

    if let Some(key) = &config.key {
        let Some(entry) = catalog.find(key) else {
            tracing::warn!("No portfolio entry with key '{}'", key);
            writeln!(err, "❌ No portfolio entry with key '{}'", key)?;
            return Ok(EXIT_USAGE);
        };
        let single = PortfolioCatalog::new(vec![entry.clone()]);
        render(out, &single, config)?;
        return Ok(EXIT_OK);
    }

    render(out, &catalog, config)?;
    Ok(EXIT_OK)
}

fn report<E: Write>(err: &mut E, e: &CatalogError) -> std::io::Result<()> {
    writeln!(err, "❌ {}", e.user_friendly_message())?;
    writeln!(err, "💡 {}", e.recovery_suggestion())
}

fn render<O: Write>(out: &mut O, catalog: &PortfolioCatalog, config: &CliConfig) -> anyhow::Result<()> {
    let output = export(catalog, config.format)
        .with_context(|| format!("rendering catalog as {:?}", config.format))?;
    out.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
