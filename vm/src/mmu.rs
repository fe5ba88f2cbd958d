use log::debug;

use crate::{
    error::{Error, Result},
    frame::FrameTable,
    page_replacer::{PageEvent, ReplacementPolicy, ReplacementQueue},
    page_table::PageTable,
};

/// Resultado de um acesso a uma página.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessOutcome {
    pub faulted: bool,
    pub replaced_page: Option<usize>,
}

impl AccessOutcome {
    const HIT: AccessOutcome = AccessOutcome {
        faulted: false,
        replaced_page: None,
    };
}

/// Trata o acesso a `page_number`, alterando a tabela de páginas, os frames e
/// a fila de substituição no lugar.
///
/// Em caso de falta de página, a página vai para o primeiro frame livre (menor
/// índice). Sem frames livres, a vítima é retirada da frente da fila.
///
/// # Panics
///
/// Entra em pânico se for preciso despejar uma página e a fila estiver vazia,
/// ou se a vítima não estiver em nenhum frame. As duas situações indicam que a
/// fila e os frames divergiram.
pub fn handle_request(
    page_number: usize,
    page_table: &mut PageTable,
    frames: &mut FrameTable,
    queue: &mut ReplacementQueue,
) -> Result<AccessOutcome> {
    let entry = page_table.get(page_number).ok_or(Error::PageOutOfRange {
        page: page_number,
        size: page_table.len(),
    })?;

    if let Some(frame_idx) = entry.frame_number() {
        debug!("mmu: page hit, página {} no frame {}", page_number, frame_idx);

        queue.page_event(PageEvent::Touched(page_number));

        return Ok(AccessOutcome::HIT);
    }

    let (frame_idx, replaced_page) = match frames.first_free() {
        Some(free_idx) => {
            debug!("mmu: page fault! página {} -> frame livre {}", page_number, free_idx);

            (free_idx, None)
        }
        None => {
            let victim = queue.pop_victim().unwrap_or_else(|| {
                panic!(
                    "mmu: fila de substituição vazia ao tratar página {} sem frames livres",
                    page_number
                )
            });

            let victim_frame = frames.find_page(victim).unwrap_or_else(|| {
                panic!("mmu: vítima {} não está em nenhum frame", victim)
            });

            debug!(
                "mmu: page fault! página {} substitui página {} no frame {}",
                page_number, victim, victim_frame
            );

            page_table.invalidate(victim);

            (victim_frame, Some(victim))
        }
    };

    frames.load(frame_idx, page_number);
    page_table.set(page_number, frame_idx);

    queue.page_event(PageEvent::Loaded(page_number));

    Ok(AccessOutcome {
        faulted: true,
        replaced_page,
    })
}

/// Estado de trabalho de uma única execução: tabela de páginas, frames e
/// fila de substituição.
#[derive(Clone, Debug)]
pub struct Mmu {
    page_table: PageTable,
    frames: FrameTable,
    replacer: ReplacementQueue,
}

impl Mmu {
    pub fn new(page_count: usize, frame_count: usize, policy: ReplacementPolicy) -> Self {
        Mmu {
            page_table: PageTable::new(page_count),
            frames: FrameTable::new(frame_count),
            replacer: ReplacementQueue::new(policy),
        }
    }

    pub fn access(&mut self, page_number: usize) -> Result<AccessOutcome> {
        handle_request(
            page_number,
            &mut self.page_table,
            &mut self.frames,
            &mut self.replacer,
        )
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    pub fn replacer(&self) -> &ReplacementQueue {
        &self.replacer
    }

    pub fn into_parts(self) -> (PageTable, FrameTable) {
        (self.page_table, self.frames)
    }
}
