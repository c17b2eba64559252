use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, trace};

use placement_core::{AnalyticsReport, analyze_file};
use placement_model::AnalyticsOptions;
use placement_portal::config::{GCP_CREDS, GCP_CREDS_2, analytics_options};
use placement_portal::{
    AuthorizedSheets, ConfigProvider, Dashboard, LocalSheets, collect_dashboard_stats,
};
use placement_report::{AnalyticsView, write_summary_csv};

use crate::cli::{AnalyzeArgs, DashboardArgs, OutputFormatArg};
use crate::logging::redact_value;
use crate::summary::{render_aliases, render_report};

/// Settings from the environment, overridden by explicit flags.
pub fn resolve_options(
    args: &AnalyzeArgs,
    config: &dyn ConfigProvider,
) -> Result<AnalyticsOptions> {
    let mut options = analytics_options(config).context("read analytics settings")?;
    if let Some(max_rows) = args.max_rows {
        options = options.with_max_rows(max_rows);
    }
    if let Some(max_bytes) = args.max_upload_bytes {
        options = options.with_max_upload_bytes(max_bytes);
    }
    if let Some(normalization) = args.key_normalization {
        options = options.with_key_normalization(normalization.into());
    }
    Ok(options)
}

pub fn run_analyze(args: &AnalyzeArgs, config: &dyn ConfigProvider) -> Result<()> {
    let options = resolve_options(args, config)?;
    let outcome = analyze_file(&args.file, &options);

    if args.format == OutputFormatArg::Json {
        let view = AnalyticsView::from_outcome(outcome);
        let mut json = serde_json::to_string_pretty(&view).context("serialize analytics view")?;
        json.push('\n');
        write_output(args.output.as_deref(), json.as_bytes())?;
        return match view.error() {
            Some(error) => Err(anyhow!("{error}")),
            None => Ok(()),
        };
    }

    let report = outcome.with_context(|| format!("analyze {}", args.file.display()))?;
    trace_top_keys(&report);
    let bytes = match args.format {
        OutputFormatArg::Csv => {
            let mut buffer = Vec::new();
            write_summary_csv(&mut buffer, &report.result)?;
            buffer
        }
        OutputFormatArg::Table | OutputFormatArg::Json => render_report(&report).into_bytes(),
    };
    write_output(args.output.as_deref(), &bytes)
}

pub fn run_aliases() -> Result<()> {
    write_output(None, render_aliases().as_bytes())
}

pub fn run_dashboard(args: &DashboardArgs, config: &dyn ConfigProvider) -> Result<Dashboard> {
    if !args.sheets_dir.is_dir() {
        bail!("sheets directory not found: {}", args.sheets_dir.display());
    }
    let local = LocalSheets::new(args.sheets_dir.clone());
    let dashboard = if args.require_credentials {
        let students = AuthorizedSheets::from_config(config, GCP_CREDS, local.clone());
        let mentors = AuthorizedSheets::from_config(config, GCP_CREDS_2, local);
        collect_dashboard_stats(&students, &mentors)
    } else {
        collect_dashboard_stats(&local, &local)
    };
    Ok(dashboard)
}

fn trace_top_keys(report: &AnalyticsReport) {
    if let Some(top) = report.result.by_site.first() {
        let key = top.key.to_string();
        trace!(site = redact_value(&key), count = top.count, "most frequent site");
    }
    if let Some(top) = report.result.score_avg.first() {
        let key = top.key.to_string();
        trace!(site = redact_value(&key), mean = top.mean, "highest mean score");
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("write to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
