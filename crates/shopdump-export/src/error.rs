use thiserror::Error;

/// Errors returned while writing the export file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or flushed.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be serialized or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
