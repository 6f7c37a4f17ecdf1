//! Tracing setup for mxabi.
//!
//! Builds a [`tracing_subscriber`] registry out of independently filtered layers: stdout (in
//! terminal, JSON or logfmt format), journald, and an optional log file.
//!
//! ```no_run
//! use mxabi_tracing::{LayerInfo, LogFormat, MxabiTracer, Tracer};
//!
//! let tracer = MxabiTracer::new().with_stdout(LayerInfo::new(
//!     LogFormat::Terminal,
//!     "info".to_string(),
//!     "mxabi_types=debug".to_string(),
//!     Some("always".to_string()),
//! ));
//! let _guard = tracer.init().expect("failed to initialize tracing");
//! ```

// re-export tracing crates.
pub use tracing;
pub use tracing_subscriber;

// Re-export LogFormat
pub use formatter::LogFormat;
pub use layers::{BoxedLayer, FileInfo, FileWorkerGuard};

use std::str::FromStr;

use tracing_subscriber::{filter::Directive, layer::SubscriberExt, util::SubscriberInitExt};

mod formatter;
mod layers;

use layers::Layers;

/// Tracer for application logging.
///
/// Manages the configuration and initialization of logging layers, including standard output,
/// optional journald, and optional file logging.
#[derive(Debug, Clone)]
pub struct MxabiTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl MxabiTracer {
    /// Constructs a new `MxabiTracer` with default settings.
    ///
    /// Initializes with default stdout layer configuration.
    /// Journald and file layers are not set by default.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), journald: None, file: None }
    }

    /// Sets a custom configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Sets up the journald layer with the given filter.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Sets up the file layer.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for MxabiTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a logging layer.
///
/// This struct holds configuration parameters for a tracing layer, including
/// the format, filtering directives, optional coloring, and directive.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Constructs a new `LayerInfo`.
    ///
    /// # Arguments
    /// * `format` - Specifies the format for log messages.
    /// * `default_directive` - Directive for filtering log messages.
    /// * `filters` - Additional filtering parameters as a string.
    /// * `color` - Optional color configuration for the log messages.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    /// Provides default values for `LayerInfo`.
    ///
    /// By default, it uses terminal format, INFO level filter,
    /// no additional filters, and colors always on.
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: tracing::Level::INFO.to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Trait defining a general interface for logging configuration.
///
/// The `Tracer` trait provides a standardized way to initialize logging configurations
/// in an application. Implementations of this trait can specify different logging setups,
/// such as standard output logging, file logging, journald logging, or custom logging
/// configurations tailored for specific environments (like testing).
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// # Returns
    /// An `eyre::Result` which is `Ok` with an optional `FileWorkerGuard` if a file layer is used,
    /// or an `Err` in case of an error during initialization.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

impl Tracer for MxabiTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            Directive::from_str(&self.stdout.default_directive)?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        if let Some(config) = self.journald {
            layers.journald(&config)?;
        }

        let file_guard = if let Some((config, file_info)) = self.file {
            Some(layers.file(config.format, &config.filters, file_info)?)
        } else {
            None
        };

        tracing_subscriber::registry().with(layers.into_inner()).try_init()?;
        Ok(file_guard)
    }
}

/// Initializes a tracing subscriber for tests.
///
/// The filter is configurable via `RUST_LOG`.
///
/// # Note
///
/// The subscriber will silently fail if it could not be installed.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
