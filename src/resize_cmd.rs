//! Resize command: re-align a TOML series to a new window and print it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use dayvec_vector::DateVector;

use crate::cli::ResizeArgs;
use crate::config;

/// Run the resize command.
pub fn run(args: ResizeArgs) -> Result<()> {
    let _cmd = info_span!("resize").entered();
    let series_cfg = config::load(&args.config)?;

    let series = DateVector::from_vec(series_cfg.first_day.as_str(), series_cfg.values)
        .with_context(|| format!("invalid series in {}", args.config.display()))?;
    info!(%series, "loaded series");

    // CLI flags override the [resize] table.
    let first_day = args.first_day.or(series_cfg.resize.first_day);
    let last_day = args.last_day.or(series_cfg.resize.last_day);

    let resized = series
        .resize(first_day.as_deref(), last_day.as_deref())
        .context("failed to resize series")?;

    let Some(resized) = resized else {
        warn!(
            first_day = first_day.as_deref().unwrap_or("-"),
            last_day = last_day.as_deref().unwrap_or("-"),
            "requested window does not overlap the series; nothing to print"
        );
        return Ok(());
    };
    info!(len = resized.len(), shared = resized.is_view(), "resized");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_series(&mut out, &resized, series_cfg.output.precision)?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Write `date,value` lines for every day in `series`.
fn write_series<W: Write>(
    out: &mut W,
    series: &DateVector<'_, f64>,
    precision: usize,
) -> Result<()> {
    for (day, value) in series.iter()? {
        writeln!(out, "{day},{value:.precision$}").context("failed to write output")?;
    }
    Ok(())
}
