use log::info;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    frame::{FrameSnapshot, FrameTable},
    mmu::Mmu,
    page_replacer::ReplacementPolicy,
    page_table::PageTable,
};

/// Tamanho do espaço de endereçamento usado pelo simulador de referência.
pub const DEFAULT_ADDRESS_SPACE_SIZE: usize = 10;

pub const DEFAULT_FRAME_COUNT: usize = 2;

/// Maior número de frames aceito por uma execução.
pub const MAX_FRAME_COUNT: usize = 1 << 16;

/// Maior espaço de endereçamento aceito, em páginas.
pub const MAX_ADDRESS_SPACE_SIZE: usize = 1 << 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub frame_count: usize,
    pub policy: ReplacementPolicy,
    pub address_space_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            frame_count: DEFAULT_FRAME_COUNT,
            policy: ReplacementPolicy::default(),
            address_space_size: DEFAULT_ADDRESS_SPACE_SIZE,
        }
    }
}

impl SimulationConfig {
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    pub fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_address_space_size(mut self, address_space_size: usize) -> Self {
        self.address_space_size = address_space_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_count == 0 || self.frame_count > MAX_FRAME_COUNT {
            return Err(Error::InvalidFrameCount(self.frame_count.to_string()));
        }

        if self.address_space_size == 0 || self.address_space_size > MAX_ADDRESS_SPACE_SIZE {
            return Err(Error::InvalidAddressSpace);
        }

        Ok(())
    }
}

/// Histórico completo de uma execução. As quatro sequências têm sempre o
/// mesmo tamanho da sequência de acessos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub policy: ReplacementPolicy,
    pub access_sequence: Vec<usize>,
    pub page_faults: Vec<bool>,
    pub replaced_pages: Vec<Option<usize>>,
    pub frame_history: Vec<FrameSnapshot>,
    pub page_table: PageTable,
    pub frames: FrameTable,
}

/// Visão de um passo do histórico.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step<'a> {
    pub index: usize,
    pub page_number: usize,
    pub faulted: bool,
    pub replaced_page: Option<usize>,
    pub frames: &'a [Option<usize>],
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.access_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.access_sequence.is_empty()
    }

    pub fn fault_count(&self) -> usize {
        self.page_faults.iter().filter(|&&faulted| faulted).count()
    }

    pub fn hit_count(&self) -> usize {
        self.page_faults.iter().filter(|&&faulted| !faulted).count()
    }

    /// Passos do histórico. Se as sequências tiverem tamanhos diferentes, para
    /// na mais curta.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_>> + '_ {
        self.access_sequence
            .iter()
            .zip(&self.page_faults)
            .zip(&self.replaced_pages)
            .zip(&self.frame_history)
            .enumerate()
            .map(|(index, (((&page_number, &faulted), &replaced_page), frames))| Step {
                index,
                page_number,
                faulted,
                replaced_page,
                frames: frames.as_slice(),
            })
    }
}

/// Executa sequências de acesso sob uma configuração fixa. Cada chamada a
/// [`SimulationRunner::run`] cria um estado novo; nada é compartilhado entre
/// execuções.
#[derive(Clone, Debug, Default)]
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        Ok(SimulationRunner { config })
    }

    pub fn run(&self, access_sequence: &[usize]) -> Result<SimulationResult> {
        let config = &self.config;

        // Toda a entrada é validada antes de qualquer passo.
        if let Some((position, page)) = access_sequence
            .iter()
            .enumerate()
            .find(|&(_, &page)| page >= config.address_space_size)
        {
            return Err(Error::InvalidSequenceToken {
                position,
                token: page.to_string(),
            });
        }

        info!(
            "simulation: {} acessos, {} frames, política {}, {} páginas",
            access_sequence.len(),
            config.frame_count,
            config.policy,
            config.address_space_size
        );

        let mut mmu = Mmu::new(config.address_space_size, config.frame_count, config.policy);

        let mut page_faults = Vec::with_capacity(access_sequence.len());
        let mut replaced_pages = Vec::with_capacity(access_sequence.len());
        let mut frame_history = Vec::with_capacity(access_sequence.len());

        for &page_number in access_sequence {
            let outcome = mmu.access(page_number)?;

            page_faults.push(outcome.faulted);
            replaced_pages.push(outcome.replaced_page);
            frame_history.push(mmu.frames().snapshot());
        }

        let (page_table, frames) = mmu.into_parts();

        let result = SimulationResult {
            policy: config.policy,
            access_sequence: access_sequence.to_vec(),
            page_faults,
            replaced_pages,
            frame_history,
            page_table,
            frames,
        };

        info!(
            "simulation: concluída com {} faltas de página em {} acessos",
            result.fault_count(),
            result.len()
        );

        Ok(result)
    }
}

pub fn run_simulation(
    access_sequence: &[usize],
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    SimulationRunner::new(*config)?.run(access_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENCE: [usize; 7] = [1, 2, 3, 1, 2, 4, 5];

    fn three_frames(policy: ReplacementPolicy) -> SimulationConfig {
        SimulationConfig::default()
            .with_frame_count(3)
            .with_policy(policy)
    }

    #[test]
    fn test_lru_eviction() {
        let result = run_simulation(&SEQUENCE, &three_frames(ReplacementPolicy::Lru)).unwrap();

        assert_eq!(
            result.page_faults,
            vec![true, true, true, false, false, true, true]
        );
        assert_eq!(
            result.replaced_pages,
            vec![None, None, None, None, None, Some(3), Some(1)]
        );
        assert_eq!(
            result.frame_history.last().unwrap(),
            &vec![Some(5), Some(2), Some(4)]
        );
    }

    #[test]
    fn test_fifo_eviction() {
        let result = run_simulation(&SEQUENCE, &three_frames(ReplacementPolicy::Fifo)).unwrap();

        assert_eq!(
            result.page_faults,
            vec![true, true, true, false, false, true, true]
        );
        assert_eq!(
            result.replaced_pages,
            vec![None, None, None, None, None, Some(1), Some(2)]
        );
        assert_eq!(
            result.frame_history.last().unwrap(),
            &vec![Some(4), Some(5), Some(3)]
        );
    }

    #[test]
    fn test_history_is_per_step() {
        let config = SimulationConfig::default();
        let result = run_simulation(&[0, 1, 2], &config).unwrap();

        assert_eq!(
            result.frame_history,
            vec![
                vec![Some(0), None],
                vec![Some(0), Some(1)],
                vec![Some(2), Some(1)],
            ]
        );
        assert_eq!(result.fault_count(), 3);
        assert_eq!(result.hit_count(), 0);
    }

    #[test]
    fn test_final_state_matches_last_snapshot() {
        let result = run_simulation(&SEQUENCE, &three_frames(ReplacementPolicy::Lru)).unwrap();

        assert_eq!(&result.frames.snapshot(), result.frame_history.last().unwrap());
        assert_eq!(
            result.page_table.resident_pages().collect::<Vec<_>>(),
            vec![2, 4, 5]
        );
    }

    #[test]
    fn test_rerun_is_isolated() {
        let runner = SimulationRunner::new(three_frames(ReplacementPolicy::Lru)).unwrap();

        let first = runner.run(&SEQUENCE).unwrap();
        let second = runner.run(&SEQUENCE).unwrap();
        assert_eq!(first, second);

        // Uma execução nova começa sem páginas residentes.
        let fresh = runner.run(&[5]).unwrap();
        assert_eq!(fresh.page_faults, vec![true]);
    }

    #[test]
    fn test_empty_sequence() {
        let result = run_simulation(&[], &SimulationConfig::default()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.frames.snapshot(), vec![None, None]);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let config = SimulationConfig::default().with_frame_count(0);

        assert_eq!(
            run_simulation(&SEQUENCE, &config),
            Err(Error::InvalidFrameCount("0".to_string()))
        );
    }

    #[test]
    fn test_huge_frame_count_rejected() {
        let config = SimulationConfig::default().with_frame_count(usize::MAX);

        assert_eq!(
            run_simulation(&[1], &config),
            Err(Error::InvalidFrameCount(usize::MAX.to_string()))
        );

        let config = SimulationConfig::default().with_frame_count(MAX_FRAME_COUNT + 1);
        assert!(SimulationRunner::new(config).is_err());

        let config = SimulationConfig::default().with_frame_count(MAX_FRAME_COUNT);
        assert!(SimulationRunner::new(config).is_ok());
    }

    #[test]
    fn test_huge_address_space_rejected() {
        let config = SimulationConfig::default().with_address_space_size(usize::MAX);

        assert_eq!(run_simulation(&[1], &config), Err(Error::InvalidAddressSpace));

        let config = SimulationConfig::default().with_address_space_size(MAX_ADDRESS_SPACE_SIZE + 1);
        assert_eq!(SimulationRunner::new(config).unwrap_err(), Error::InvalidAddressSpace);
    }

    #[test]
    fn test_misaligned_result_does_not_panic() {
        let mut result = run_simulation(&SEQUENCE, &three_frames(ReplacementPolicy::Lru)).unwrap();
        result.page_faults.truncate(3);
        result.frame_history.pop();

        assert_eq!(result.steps().count(), 3);
        assert_eq!(result.fault_count(), 3);
        assert_eq!(result.hit_count(), 0);
    }

    #[test]
    fn test_zero_address_space_rejected() {
        let config = SimulationConfig::default().with_address_space_size(0);

        assert_eq!(SimulationRunner::new(config).unwrap_err(), Error::InvalidAddressSpace);
    }

    #[test]
    fn test_out_of_domain_page_rejected() {
        let result = run_simulation(&[1, 2, 10, 3], &SimulationConfig::default());

        assert_eq!(
            result,
            Err(Error::InvalidSequenceToken {
                position: 2,
                token: "10".to_string()
            })
        );
    }

    #[test]
    fn test_steps_view() {
        let result = run_simulation(&SEQUENCE, &three_frames(ReplacementPolicy::Fifo)).unwrap();
        let step = result.steps().nth(5).unwrap();

        assert_eq!(step.index, 5);
        assert_eq!(step.page_number, 4);
        assert!(step.faulted);
        assert_eq!(step.replaced_page, Some(1));
        assert_eq!(step.frames.to_vec(), vec![Some(4), Some(2), Some(3)]);
    }
}
