//! Simulador de substituição de páginas (LRU e FIFO).
//!
//! Uma execução recebe uma sequência de acessos e um número de frames, e
//! produz o histórico passo a passo: faltas de página, páginas substituídas e
//! o conteúdo dos frames após cada acesso.

pub mod error;
pub mod frame;
pub mod mmu;
pub mod page_replacer;
pub mod page_table;
pub mod sequence;
pub mod simulation;

pub use error::{Error, Result};
pub use frame::{Frame, FrameSnapshot, FrameTable};
pub use mmu::{handle_request, AccessOutcome, Mmu};
pub use page_replacer::{PageEvent, ReplacementPolicy, ReplacementQueue};
pub use page_table::{PageTable, PageTableEntry};
pub use sequence::{format_sequence, generate_random_sequence, parse_frame_count, parse_sequence};
pub use simulation::{run_simulation, SimulationConfig, SimulationResult, SimulationRunner, Step};
