use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Erros recuperáveis do simulador. Todos são detectados antes de qualquer
/// estado da simulação ser criado ou alterado.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Número de frames zero, negativo ou não numérico.
    #[error("invalid frame count: {0:?} (must be a positive integer)")]
    InvalidFrameCount(String),

    /// Token da sequência que não é um número de página válido.
    #[error("invalid sequence token {token:?} at position {position}")]
    InvalidSequenceToken { position: usize, token: String },

    /// Acesso a uma página fora da tabela de páginas.
    #[error("page {page} is outside the address space of {size} pages")]
    PageOutOfRange { page: usize, size: usize },

    #[error("address space must contain at least one page")]
    InvalidAddressSpace,

    #[error("unknown replacement policy {0:?} (expected \"lru\" or \"fifo\")")]
    InvalidPolicy(String),

    #[error("invalid sequence length bounds: min {min} > max {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}
