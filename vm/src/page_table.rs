use serde::Serialize;

/// Registro de residência de uma página. A página é válida exatamente quando
/// possui um frame associado.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageTableEntry {
    page_number: usize,
    frame_number: Option<usize>,
}

impl PageTableEntry {
    pub fn new(page_number: usize) -> Self {
        PageTableEntry {
            page_number,
            frame_number: None,
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn frame_number(&self) -> Option<usize> {
        self.frame_number
    }

    pub fn is_valid(&self) -> bool {
        self.frame_number.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageTable {
    table: Vec<PageTableEntry>,
}

impl PageTable {
    pub fn new(page_count: usize) -> Self {
        PageTable {
            table: (0..page_count).map(PageTableEntry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, page_number: usize) -> Option<&PageTableEntry> {
        self.table.get(page_number)
    }

    pub fn set(&mut self, page_number: usize, frame_number: usize) {
        self.table[page_number].frame_number = Some(frame_number);
    }

    pub fn invalidate(&mut self, page_number: usize) {
        self.table[page_number].frame_number = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageTableEntry> {
        self.table.iter()
    }

    /// Páginas atualmente residentes, em ordem crescente.
    pub fn resident_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.table
            .iter()
            .filter(|entry| entry.is_valid())
            .map(|entry| entry.page_number)
    }
}
