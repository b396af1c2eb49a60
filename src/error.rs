use thiserror::Error;

#[derive(Error, Debug)]
pub enum QasumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error at position {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed report: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, QasumError>;
