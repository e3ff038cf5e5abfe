use wp_plugin_meta::{logging, run_scrap, ScraperConfig};

const CONFIG_FILE: &str = "wp-plugin-meta.yaml";

fn main() -> anyhow::Result<()> {
    let conf = ScraperConfig::load_or_default(CONFIG_FILE)?;
    let _log = logging::init(&conf.log_file, &conf.log_level)?;

    let stats = run_scrap(&conf).map_err(|e| {
        log::error!("{e:#}");
        e
    })?;

    println!(
        "Plugin metadata for {} URLs ({} failed) exported to {}. Please check {} for details.",
        stats.total,
        stats.errors,
        conf.output_file.display(),
        conf.log_file.display()
    );

    Ok(())
}
