use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    frame_number: usize,
    page_number: Option<usize>,
}

impl Frame {
    pub fn new(frame_number: usize) -> Self {
        Frame {
            frame_number,
            page_number: None,
        }
    }

    pub fn frame_number(&self) -> usize {
        self.frame_number
    }

    pub fn page_number(&self) -> Option<usize> {
        self.page_number
    }

    pub fn is_free(&self) -> bool {
        self.page_number.is_none()
    }
}

/// Ocupantes de cada frame, indexados pelo número do frame.
pub type FrameSnapshot = Vec<Option<usize>>;

/// O conjunto de frames físicos de uma execução.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new(frame_count: usize) -> Self {
        FrameTable {
            frames: (0..frame_count).map(Frame::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Primeiro frame livre, buscando em ordem crescente de índice.
    pub fn first_free(&self) -> Option<usize> {
        self.frames
            .iter()
            .find(|frame| frame.is_free())
            .map(|frame| frame.frame_number)
    }

    /// Frame que contém `page_number`, se a página estiver residente.
    pub fn find_page(&self, page_number: usize) -> Option<usize> {
        self.frames
            .iter()
            .find(|frame| frame.page_number == Some(page_number))
            .map(|frame| frame.frame_number)
    }

    pub fn load(&mut self, frame_number: usize, page_number: usize) {
        self.frames[frame_number].page_number = Some(page_number);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Cópia por valor do conteúdo atual, usada no histórico.
    pub fn snapshot(&self) -> FrameSnapshot {
        self.frames.iter().map(|frame| frame.page_number).collect()
    }
}
