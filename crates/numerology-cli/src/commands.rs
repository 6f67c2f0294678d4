use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use numerology_cli::logging::redact_value;
use numerology_cli::overrides::load_overrides;
use numerology_cli::summary::{print_summary, recap_table_view, render_traces};
use numerology_core::{compute_numerology, recap_table};
use numerology_model::{BirthRecord, ComputeOptions, NumerologyResult, YOverrides};

use crate::cli::{ComputeArgs, OutputFormatArg};

pub fn run_recap() -> Result<()> {
    let rows = recap_table().context("build recap table")?;
    println!("{}", recap_table_view(&rows));
    Ok(())
}

pub fn run_compute(args: &ComputeArgs) -> Result<NumerologyResult> {
    let span = info_span!("compute");
    let _guard = span.enter();
    let start = Instant::now();

    let record = birth_record(args);
    info!(
        first_name = %redact_value(&record.first_name),
        family_name = %redact_value(&record.family_name),
        birth_date = %redact_value(&record.birth_date),
        "computing figures"
    );

    let y_overrides = match &args.y_overrides {
        Some(path) => load_overrides(path)?,
        None => YOverrides::builtin(),
    };
    debug!(entries = y_overrides.len(), "Y overrides ready");

    let mut options = ComputeOptions::new()
        .with_debug(args.debug)
        .with_y_overrides(y_overrides);
    if let Some(year) = args.target_year {
        options = options.with_target_year(year);
    }

    let result = compute_numerology(&record, &options)?;
    info!(
        life_path = result.computed.life_path.reduced,
        expression = result.computed.expression.reduced,
        elapsed_ms = start.elapsed().as_millis(),
        "computation complete"
    );
    Ok(result)
}

pub fn emit(result: &NumerologyResult, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_summary(result),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize result")?;
            println!("{json}");
        }
        OutputFormatArg::Traces => print!("{}", render_traces(result)),
    }
    Ok(())
}

fn birth_record(args: &ComputeArgs) -> BirthRecord {
    let mut record = BirthRecord::new(&args.first_name, &args.family_name, &args.birth_date);
    if let Some(middle) = &args.middle_names {
        record = record.with_middle_names(middle);
    }
    if let Some(marital) = &args.marital_name {
        record = record.with_marital_name(marital);
    }
    if let Some(place) = &args.birth_place {
        record = record.with_birth_place(place);
    }
    record
}
