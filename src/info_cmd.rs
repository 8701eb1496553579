//! Info command: summarize the date range of a TOML series.

use anyhow::{Context, Result};
use tracing::info_span;

use dayvec_vector::{DateVector, NaiveDate};

use crate::cli::InfoArgs;
use crate::config;

/// Run the info command.
pub fn run(args: InfoArgs) -> Result<()> {
    let _cmd = info_span!("info").entered();
    let series_cfg = config::load(&args.config)?;
    let series = DateVector::from_vec(series_cfg.first_day.as_str(), series_cfg.values)
        .with_context(|| format!("invalid series in {}", args.config.display()))?;
    print!("{}", summary(&series));
    Ok(())
}

fn fmt_day(day: Option<NaiveDate>) -> String {
    day.map_or_else(|| "-".to_string(), |d| d.to_string())
}

fn summary(series: &DateVector<'_, f64>) -> String {
    format!(
        "first_day: {}\nlast_day: {}\ndays: {}\n",
        fmt_day(series.first_day()),
        fmt_day(series.last_day()),
        series.len()
    )
}
