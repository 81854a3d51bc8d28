use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum TraceError {
    InvalidMode(String),
    AlreadyActive(String),
    NoActiveTrace(),
    MissingArtifact(),
    InvalidDistribution(String),
    Program(String),
}
impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TraceError::*;
        match self {
            InvalidMode(s) => write!(
                f,
                "unknown mode: {}. Use one of (inference, compilation, compiled_inference)",
                s
            ),
            AlreadyActive(root) => write!(
                f,
                "a trace rooted at `{}` is already active; traces do not nest",
                root
            ),
            NoActiveTrace() => write!(f, "no trace is active"),
            MissingArtifact() => {
                write!(f, "compiled inference requires an artifact, but none was set")
            }
            InvalidDistribution(s) => write!(f, "invalid distribution: {}", s),
            Program(s) => write!(f, "{}", s),
        }
    }
}
impl std::error::Error for TraceError {}

impl From<statrs::StatsError> for TraceError {
    fn from(e: statrs::StatsError) -> Self {
        TraceError::InvalidDistribution(e.to_string())
    }
}

pub type Result<T> = core::result::Result<T, TraceError>;

pub fn invalid_mode<T>(s: &str) -> Result<T> {
    Err(TraceError::InvalidMode(s.to_string()))
}
pub fn already_active<T>(root: &str) -> Result<T> {
    Err(TraceError::AlreadyActive(root.to_string()))
}
pub fn no_active_trace<T>() -> Result<T> {
    Err(TraceError::NoActiveTrace())
}
pub fn missing_artifact<T>() -> Result<T> {
    Err(TraceError::MissingArtifact())
}
pub fn invalid_dist<T>(s: &str) -> Result<T> {
    Err(TraceError::InvalidDistribution(s.to_string()))
}
/// for user programs that need to bail out mid-execution
pub fn program<T>(s: &str) -> Result<T> {
    Err(TraceError::Program(s.to_string()))
}
