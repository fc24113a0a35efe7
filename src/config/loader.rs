//! Config file discovery and layering of env vars and CLI flags.

use crate::model::{DataViewError, FieldPath, Layout, PaginatorPosition, SortOrder};
use crate::state::DataViewProps;
use crate::view_state::{DEFAULT_PAGE_LINK_SIZE, DEFAULT_REPORT_TEMPLATE};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "DATAVIEW_CONFIG";
/// Environment variable overriding the layout.
pub const LAYOUT_ENV_VAR: &str = "DATAVIEW_LAYOUT";
/// Environment variable overriding the page size.
pub const ROWS_ENV_VAR: &str = "DATAVIEW_ROWS";

/// A config file that was found but could not be used.
///
/// A missing file is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `DATAVIEW_CONFIG` is set but empty.
    #[error("DATAVIEW_CONFIG is set but empty")]
    EmptyPathVariable,

    /// The file exists but reading it failed.
    #[error("Cannot read config {path}: {reason}")]
    Unreadable {
        /// Config file location.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    InvalidToml {
        /// Config file location.
        path: PathBuf,
        /// `toml` error text.
        reason: String,
    },
}

/// Contents of `~/.config/dataview/config.toml`. Absent keys keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial layout (`"list"` or `"grid"`).
    #[serde(default)]
    pub layout: Option<Layout>,

    /// Page size; `0` disables the page limit.
    #[serde(default)]
    pub rows: Option<usize>,

    /// Enable pagination.
    #[serde(default)]
    pub paginator: Option<bool>,

    /// Paginator placement (`"top"`, `"bottom"` or `"both"`).
    #[serde(default)]
    pub paginator_position: Option<PaginatorPosition>,

    /// Keep the paginator visible with a single page.
    #[serde(default)]
    pub always_show_paginator: Option<bool>,

    /// Number of numbered page links.
    #[serde(default)]
    pub page_link_size: Option<usize>,

    /// Rows-per-page choices cycled with `+`/`-`.
    #[serde(default)]
    pub rows_per_page_options: Option<Vec<usize>>,

    /// Current page report template.
    #[serde(default)]
    pub current_page_report_template: Option<String>,

    /// Empty-state text.
    #[serde(default)]
    pub empty_message: Option<String>,

    /// Columns in grid layout.
    #[serde(default)]
    pub grid_columns: Option<usize>,

    /// Field used to sort records.
    #[serde(default)]
    pub sort_field: Option<String>,

    /// Initial sort direction.
    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    /// Field identifying records.
    #[serde(default)]
    pub data_key: Option<String>,

    /// Field shown as each record's title.
    #[serde(default)]
    pub title_field: Option<String>,

    /// Where tracing output goes.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Final settings: defaults, then the file, then env vars, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial layout.
    pub layout: Layout,
    /// Page size, `0` for no limit.
    pub rows: usize,
    /// Initial first record index.
    pub first: usize,
    /// Pagination enabled.
    pub paginator: bool,
    /// Paginator placement.
    pub paginator_position: PaginatorPosition,
    /// Keep the paginator visible with a single page.
    pub always_show_paginator: bool,
    /// Number of numbered page links.
    pub page_link_size: usize,
    /// Rows-per-page choices.
    pub rows_per_page_options: Vec<usize>,
    /// Current page report template.
    pub current_page_report_template: String,
    /// Empty-state text override.
    pub empty_message: Option<String>,
    /// Columns in grid layout.
    pub grid_columns: usize,
    /// Sort field path.
    pub sort_field: Option<String>,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Data key path.
    pub data_key: Option<String>,
    /// Title field path.
    pub title_field: Option<String>,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            layout: Layout::List,
            rows: 10,
            first: 0,
            paginator: true,
            paginator_position: PaginatorPosition::Bottom,
            always_show_paginator: true,
            page_link_size: DEFAULT_PAGE_LINK_SIZE,
            rows_per_page_options: vec![5, 10, 20, 50],
            current_page_report_template: DEFAULT_REPORT_TEMPLATE.to_string(),
            empty_message: None,
            grid_columns: 3,
            sort_field: None,
            sort_order: SortOrder::Unsorted,
            data_key: None,
            title_field: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Data view props for this configuration, without records or templates.
    ///
    /// # Errors
    ///
    /// [`DataViewError::InvalidFieldPath`] when the sort field or data key
    /// is not a valid field path.
    pub fn data_view_props<R, T>(&self) -> Result<DataViewProps<R, T>, DataViewError> {
        let mut props = DataViewProps::new()
            .with_layout(self.layout)
            .with_first(self.first)
            .with_rows(self.rows)
            .with_paginator(self.paginator)
            .with_paginator_position(self.paginator_position)
            .with_always_show_paginator(self.always_show_paginator)
            .with_page_link_size(self.page_link_size)
            .with_rows_per_page_options(self.rows_per_page_options.clone())
            .with_current_page_report_template(self.current_page_report_template.clone());

        if let Some(message) = &self.empty_message {
            props = props.with_empty_message(message.clone());
        }
        if let Some(field) = &self.sort_field {
            props = props.with_sort(FieldPath::parse(field.as_str())?, self.sort_order);
        }
        if let Some(key) = &self.data_key {
            props = props.with_data_key(FieldPath::parse(key.as_str())?);
        }
        Ok(props)
    }
}

/// Log file location: `<state dir>/dataview/dataview.log`, or `./dataview.log`
/// on platforms without a state directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("dataview").join("dataview.log"))
        .unwrap_or_else(|| PathBuf::from("dataview.log"))
}

/// Read and parse one config file. A file that does not exist yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::Unreadable`] or [`ConfigError::InvalidToml`] for a file
/// that exists but cannot be used.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(ConfigError::Unreadable {
                reason: error.to_string(),
                path,
            })
        }
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|error| ConfigError::InvalidToml {
            reason: error.to_string(),
            path,
        })
}

/// `<config dir>/dataview/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dataview").join("config.toml"))
}

/// Find and load the config file.
///
/// The first of these that is set wins: `config_path` (`--config`),
/// `DATAVIEW_CONFIG`, the default path. Whichever is chosen may be missing.
///
/// # Errors
///
/// See [`load_config_file`]; additionally [`ConfigError::EmptyPathVariable`].
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = match (config_path, std::env::var_os(CONFIG_ENV_VAR)) {
        (Some(path), _) => Some(path),
        (None, Some(env_path)) if env_path.is_empty() => {
            return Err(ConfigError::EmptyPathVariable)
        }
        (None, Some(env_path)) => Some(PathBuf::from(env_path)),
        (None, None) => default_config_path(),
    };

    chosen.map_or(Ok(None), load_config_file)
}

/// Layer `DATAVIEW_LAYOUT` and `DATAVIEW_ROWS` over `config`.
/// Values that do not parse are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(layout) = std::env::var(LAYOUT_ENV_VAR) {
        match layout.parse::<Layout>() {
            Ok(layout) => config.layout = layout,
            Err(reason) => warn!(%reason, "ignoring {}", LAYOUT_ENV_VAR),
        }
    }

    if let Ok(rows) = std::env::var(ROWS_ENV_VAR) {
        match rows.trim().parse() {
            Ok(rows) => config.rows = rows,
            Err(error) => warn!(%error, value = %rows, "ignoring {}", ROWS_ENV_VAR),
        }
    }

    config
}

/// Fill a [`ResolvedConfig`] from the file, using defaults for absent keys.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        layout: config.layout.unwrap_or(defaults.layout),
        rows: config.rows.unwrap_or(defaults.rows),
        first: defaults.first,
        paginator: config.paginator.unwrap_or(defaults.paginator),
        paginator_position: config
            .paginator_position
            .unwrap_or(defaults.paginator_position),
        always_show_paginator: config
            .always_show_paginator
            .unwrap_or(defaults.always_show_paginator),
        page_link_size: config.page_link_size.unwrap_or(defaults.page_link_size),
        rows_per_page_options: config
            .rows_per_page_options
            .unwrap_or(defaults.rows_per_page_options),
        current_page_report_template: config
            .current_page_report_template
            .unwrap_or(defaults.current_page_report_template),
        empty_message: config.empty_message.or(defaults.empty_message),
        grid_columns: config
            .grid_columns
            .filter(|&columns| columns > 0)
            .unwrap_or(defaults.grid_columns),
        sort_field: config.sort_field.or(defaults.sort_field),
        sort_order: config.sort_order.unwrap_or(defaults.sort_order),
        data_key: config.data_key.or(defaults.data_key),
        title_field: config.title_field.or(defaults.title_field),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Overrides taken from command-line flags.
///
/// `None` (or `false` for switches) leaves the lower-precedence value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--rows`
    pub rows: Option<usize>,
    /// `--first`
    pub first: Option<usize>,
    /// `--layout`
    pub layout: Option<Layout>,
    /// `--sort-field`
    pub sort_field: Option<String>,
    /// `--sort-order`
    pub sort_order: Option<SortOrder>,
    /// `--data-key`
    pub data_key: Option<String>,
    /// `--title-field`
    pub title_field: Option<String>,
    /// `--paginator-position`
    pub paginator_position: Option<PaginatorPosition>,
    /// `--no-paginator`
    pub no_paginator: bool,
}

/// Layer the flags the user actually passed over `config`. Last in the chain.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(first) = cli.first {
        config.first = first;
    }
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    if let Some(field) = cli.sort_field {
        config.sort_field = Some(field);
        // A sort field alone sorts ascending
        if config.sort_order == SortOrder::Unsorted {
            config.sort_order = SortOrder::Ascending;
        }
    }
    if let Some(order) = cli.sort_order {
        config.sort_order = order;
    }
    if let Some(key) = cli.data_key {
        config.data_key = Some(key);
    }
    if let Some(field) = cli.title_field {
        config.title_field = Some(field);
    }
    if let Some(position) = cli.paginator_position {
        config.paginator_position = position;
    }
    if cli.no_paginator {
        config.paginator = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
