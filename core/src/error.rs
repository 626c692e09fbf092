#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BentoError {
    #[error("unknown image: {0}")]
    UnknownImage(String),
    #[error("unknown grid variant: {0}")]
    UnknownVariant(String),
    #[error("invalid toggle value: {0}")]
    InvalidToggle(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
