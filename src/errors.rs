// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad form input) or building a download.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Export Error: {0}")]
    Export(#[from] ExportError),

    #[error("Internal Server Error")]
    InternalError,
}

/// Failures while serializing listings to a download.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
