//! Annotate command: write global and variable attributes for one index.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{info, info_span};

use ecattrs_attrs::{AttributeDocument, GlobalAttrs, write_threshold_attrs, write_variable_attrs};
use ecattrs_indices::ThresholdIndex;

use crate::cli::AnnotateArgs;
use crate::config::{self, EcattrsConfig};
use crate::convert;

/// Run the annotate command.
pub fn run(args: AnnotateArgs) -> Result<()> {
    let _cmd = info_span!("annotate", index = %args.index).entered();
    let config = config::load(args.config.as_deref())?;

    let mut doc = match &args.input {
        Some(path) => read_document(path)?,
        None => AttributeDocument::new(),
    };

    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    annotate(&mut doc, &args, &config, now)?;

    let json = render(&doc, config.output.pretty)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "attributes written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Writes every attribute requested by `args` into `doc`.
///
/// Global attributes are all-or-nothing. Variable attributes are only
/// touched once the global ones succeeded.
fn annotate(
    doc: &mut AttributeDocument,
    args: &AnnotateArgs,
    config: &EcattrsConfig,
    now: NaiveDateTime,
) -> Result<()> {
    let grouping = convert::build_grouping(&args.grouping)?;
    let range = convert::build_range(args.start, args.end)?;
    let institution = args
        .institution
        .as_deref()
        .or(config.institution.as_deref())
        .unwrap_or_default();

    GlobalAttrs::new(&args.index, &*grouping, range, now)
        .with_institution(institution)
        .with_append_history(config.history.append)
        .write_all(&mut doc.global)
        .with_context(|| format!("failed to write global attributes for {}", args.index))?;
    info!("global attributes written");

    if let Some(threshold) = args.threshold {
        let kind: ThresholdIndex = args.index.parse()?;
        write_threshold_attrs(doc.variable_mut(&config.variables.threshold), kind)?;
        write_variable_attrs(doc.variable_mut(&args.index), kind, threshold)?;
        info!(threshold, "variable attributes written");
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<AttributeDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read attribute document: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse attribute document: {}", path.display()))
}

fn render(doc: &AttributeDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    json.context("failed to serialize attribute document")
}
