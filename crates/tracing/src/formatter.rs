use std::{
    fmt::{self, Display},
    io::IsTerminal,
};

use tracing::Subscriber;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer};

use crate::layers::BoxedLayer;

/// Represents the logging format.
///
/// This enum defines the supported formats for logging output.
/// It is used to configure the format layer of a tracing subscriber.
#[derive(Debug, Copy, Clone, clap::ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// Represents JSON formatting for logs.
    /// This format outputs log records as JSON objects,
    /// making it suitable for structured logging.
    Json,

    /// Represents logfmt (key=value) formatting for logs.
    /// This format is concise and human-readable,
    /// typically used in command-line applications.
    LogFmt,

    /// Represents terminal-friendly formatting for logs.
    Terminal,
}

impl LogFormat {
    /// Applies the specified logging format to create a new layer.
    ///
    /// # Arguments
    /// * `filter` - An `EnvFilter` used to determine which log records to output.
    /// * `color` - The color mode (`always`, `auto` or `never`), or `None` for no colors.
    /// * `file_writer` - An optional writer for file output, stdout is used when `None`.
    pub fn apply<S>(
        &self,
        filter: EnvFilter,
        color: Option<String>,
        file_writer: Option<NonBlocking>,
    ) -> BoxedLayer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let ansi = match color.as_deref() {
            None | Some("never") => false,
            Some("always") => file_writer.is_none(),
            _ => file_writer.is_none() && std::io::stdout().is_terminal(),
        };
        let target = std::env::var("RUST_LOG_TARGET").map(|val| val != "0").unwrap_or(false);

        match self {
            LogFormat::Json => {
                let layer =
                    tracing_subscriber::fmt::layer().json().with_ansi(ansi).with_target(target);

                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
            LogFormat::LogFmt => {
                let layer = tracing_logfmt::builder().layer();

                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
            LogFormat::Terminal => {
                let layer = tracing_subscriber::fmt::layer().with_ansi(ansi).with_target(target);

                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "log-fmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use tracing_subscriber::layer::SubscriberExt;

    fn write_through_file_layer(format: LogFormat, file_name: &str) -> String {
        let dir = std::env::temp_dir().join("mxabi-tracing-tests");
        std::fs::create_dir_all(&dir).expect("failed to create log dir");
        let path = dir.join(file_name);
        let _ = std::fs::remove_file(&path);

        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, file_name));
        let subscriber = tracing_subscriber::registry().with(format.apply::<tracing_subscriber::Registry>(
            EnvFilter::new("info"),
            None,
            Some(writer),
        ));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("loaded registry adder");
        });
        drop(guard);

        std::fs::read_to_string(path).expect("failed to read log file")
    }

    #[test]
    fn test_logfmt_file_layer_writes_to_file() {
        let contents = write_through_file_layer(LogFormat::LogFmt, "logfmt.log");
        assert!(contents.contains("loaded registry adder"));
        assert!(contents.contains("level=info"));
    }

    #[test]
    fn test_json_file_layer_writes_to_file() {
        let contents = write_through_file_layer(LogFormat::Json, "json.log");
        assert!(contents.contains("loaded registry adder"));
        assert!(contents.contains("\"level\":\"INFO\""));
    }

    #[test]
    fn test_log_format_display_matches_value_names() {
        for format in LogFormat::value_variants() {
            let parsed = LogFormat::from_str(&format.to_string(), false).expect("valid name");
            assert_eq!(&parsed, format);
        }
    }
}
