/// Reasons a record set cannot be turned into an index.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusDefect {
    #[error("corpus contains no records")]
    Empty,
    #[error("no text fields were requested")]
    NoFields,
    #[error("record {record_id} has no field {field:?}")]
    MissingField { record_id: u32, field: String },
    #[error("record id {0} appears more than once")]
    DuplicateId(u32),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid corpus: {0}")]
    InvalidCorpus(CorpusDefect),
    #[error("Corpus is still loading")]
    CorpusLoading,
    #[error("Corpus failed to load: {0}")]
    CorpusFailed(String),
    #[error("Failed to decode corpus records: {0}")]
    CorpusDecode(#[from] serde_json::Error),
    #[error("Failed to parse search options: {0}")]
    Config(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to initialize tracing: {0}")]
    TracingInit(String),
}

impl From<CorpusDefect> for Error {
    fn from(defect: CorpusDefect) -> Self {
        Error::InvalidCorpus(defect)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
