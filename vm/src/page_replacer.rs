use std::{collections::VecDeque, fmt, str::FromStr};

use log::trace;
use serde::Serialize;

use crate::error::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ReplacementPolicy {
    /// Least-Recently-Used: a vítima é a página acessada há mais tempo.
    #[default]
    Lru,
    /// First-In-First-Out: a vítima é a página carregada há mais tempo.
    Fifo,
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Lru => write!(f, "LRU"),
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(ReplacementPolicy::Lru),
            "fifo" => Ok(ReplacementPolicy::Fifo),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// A página já residente foi acessada.
    Touched(usize),
    /// A página acabou de se tornar residente.
    Loaded(usize),
}

/// Fila de prioridade de despejo. A frente da fila é a próxima vítima.
///
/// O conjunto de páginas na fila é sempre igual ao conjunto de páginas
/// residentes, sem repetições.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplacementQueue {
    policy: ReplacementPolicy,
    queue: VecDeque<usize>,
}

impl ReplacementQueue {
    pub fn new(policy: ReplacementPolicy) -> Self {
        ReplacementQueue {
            policy,
            queue: VecDeque::new(),
        }
    }

    pub fn page_event(&mut self, event: PageEvent) {
        match (self.policy, event) {
            (ReplacementPolicy::Lru, PageEvent::Touched(page))
            | (ReplacementPolicy::Lru, PageEvent::Loaded(page)) => self.access_page(page),
            (ReplacementPolicy::Fifo, PageEvent::Loaded(page)) => self.add_page(page),
            // FIFO ignora acessos a páginas já residentes.
            (ReplacementPolicy::Fifo, PageEvent::Touched(_)) => {}
        }
    }

    /// Move `page_number` para o fim da fila, removendo a posição antiga.
    pub fn access_page(&mut self, page_number: usize) {
        if let Some(idx) = self.queue.iter().position(|&p| p == page_number) {
            self.queue.remove(idx);
        }

        self.queue.push_back(page_number);

        trace!("queue: {} usou página {} -> {:?}", self.policy, page_number, self.queue);
    }

    /// Enfileira uma página recém-carregada. Só deve ser chamada quando a
    /// página passa a ser residente.
    pub fn add_page(&mut self, page_number: usize) {
        debug_assert!(
            !self.queue.contains(&page_number),
            "página {} já está na fila",
            page_number
        );

        self.queue.push_back(page_number);

        trace!("queue: {} carregou página {} -> {:?}", self.policy, page_number, self.queue);
    }

    /// Remove e retorna a próxima vítima.
    pub fn pop_victim(&mut self) -> Option<usize> {
        let victim = self.queue.pop_front();

        trace!("queue: {} vítima {:?} -> {:?}", self.policy, victim, self.queue);

        victim
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Páginas na ordem de despejo.
    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.queue.iter()
    }
}
