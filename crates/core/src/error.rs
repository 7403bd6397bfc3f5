#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown {entity} field '{name}'")]
    UnknownField { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
