#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid range: end must be greater than start")]
    InvalidRange,

    #[error("Invalid mode '{0}', expected 'add' or 'set'")]
    InvalidMode(String),

    #[error("Invalid operation '{0}', expected MODE FROM TO AMOUNT")]
    InvalidOperation(String),
}
