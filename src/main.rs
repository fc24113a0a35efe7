//! dataview - Entry Point

use clap::Parser;
use dataview::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, KeyBindings,
};
use dataview::model::{FieldPath, Layout, PaginatorPosition, ParseEnumError, SortOrder};
use dataview::state::{AppState, DataView};
use dataview::view::{ColorConfig, ItemRenderer, ViewOptions, ViewStyles};
use ratatui::text::{Line, Text};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};

/// dataview - paginated list/grid viewer for JSON records
#[derive(Parser, Debug)]
#[command(name = "dataview")]
#[command(version)]
#[command(about = "Browse a JSON array or JSONL file as a paginated, sortable list or grid")]
pub struct Args {
    /// Path to a JSON array or JSONL file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Records per page (0 for no limit)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Index of the first record shown
    #[arg(long)]
    pub first: Option<usize>,

    /// Initial layout
    #[arg(long, value_parser = ["list", "grid"])]
    pub layout: Option<String>,

    /// Field path to sort by (e.g. "address.city")
    #[arg(short, long)]
    pub sort_field: Option<String>,

    /// Sort direction
    #[arg(long, value_parser = ["asc", "desc"])]
    pub sort_order: Option<String>,

    /// Field path identifying records
    #[arg(long)]
    pub data_key: Option<String>,

    /// Field path shown as each record's title
    #[arg(short, long)]
    pub title_field: Option<String>,

    /// Where the paginator is shown
    #[arg(long, value_parser = ["top", "bottom", "both"])]
    pub paginator_position: Option<String>,

    /// Show all records without pagination
    #[arg(long)]
    pub no_paginator: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// CLI values that override the resolved configuration.
    fn overrides(&self) -> Result<CliOverrides, ParseEnumError> {
        Ok(CliOverrides {
            rows: self.rows,
            first: self.first,
            layout: self.layout.as_deref().map(str::parse::<Layout>).transpose()?,
            sort_field: self.sort_field.clone(),
            sort_order: self
                .sort_order
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()?,
            data_key: self.data_key.clone(),
            title_field: self.title_field.clone(),
            paginator_position: self
                .paginator_position
                .as_deref()
                .map(str::parse::<PaginatorPosition>)
                .transpose()?,
            no_paginator: self.no_paginator,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let color = ColorConfig::from_env_and_args(args.no_color);

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.overrides()?)
    };

    dataview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = dataview::source::detect_input_source(args.file.clone())?;
    let parsed = dataview::source::load_records(&source)?;
    if !parsed.skipped.is_empty() {
        warn!(
            skipped = parsed.skipped.len(),
            "Some lines could not be parsed and were skipped"
        );
    }

    let styles = ViewStyles::with_color_config(color);
    let title_field = config
        .title_field
        .as_deref()
        .map(FieldPath::parse)
        .transpose()?;
    let header = Text::from(Line::styled(source.display_name(), styles.title));

    let props = config
        .data_view_props::<Value, Text<'static>>()?
        .with_value(parsed.records)
        .with_header(header)
        .with_item_template(ItemRenderer::new(title_field, styles).into_template());
    let view = DataView::new(props)?;

    let options = ViewOptions {
        grid_columns: config.grid_columns,
        styles,
        link_template: None,
    };

    dataview::view::run(AppState::new(view), KeyBindings::default(), options)?;

    Ok(())
}
