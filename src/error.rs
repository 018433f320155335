use thiserror::Error;

#[derive(Error, Debug)]
pub enum AsmError {
    #[error("unresolved symbol: @{symbol}")]
    UnresolvedSymbol { symbol: String },

    #[error("unrecognized instruction: {text}")]
    UnrecognizedLine { text: String },

    #[error("A-instruction value out of range: @{value} (max 32767)")]
    ValueOutOfRange { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsmError>;
