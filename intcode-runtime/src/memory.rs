//! Memory subsystem
//!
//! Sparse word-addressed memory split into fixed-size pages. Pages are held
//! behind `Arc`, so cloning a `Memory` only copies the page table; a page is
//! duplicated the first time one of the clones writes to it.

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use intcode_spec::{Address, Word};
use crate::error::{Result, RuntimeError};

/// Words per page
pub const PAGE_SIZE: usize = 256;

type Page = [Word; PAGE_SIZE];

#[derive(Debug, Clone, Default)]
pub struct Memory {
    pages: HashMap<u64, Arc<Page>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Memory holding `words` at addresses `0..words.len()`
    pub fn from_words(words: &[Word]) -> Self {
        let mut memory = Self::new();
        memory.load(words);
        memory
    }

    /// Copy `words` into memory starting at address 0
    pub fn load(&mut self, words: &[Word]) {
        for (chunk_index, chunk) in words.chunks(PAGE_SIZE).enumerate() {
            let page = Arc::make_mut(
                self.pages
                    .entry(chunk_index as u64)
                    .or_insert_with(|| Arc::new([0; PAGE_SIZE])),
            );
            page[..chunk.len()].copy_from_slice(chunk);
        }
    }

    /// Read a word; addresses never written read as 0
    pub fn read(&self, address: Address) -> Result<Word> {
        let (page, offset) = split(address)?;
        Ok(self
            .pages
            .get(&page)
            .map(|page| page[offset])
            .unwrap_or(0))
    }

    /// Write a word, materializing its page if needed
    pub fn write(&mut self, address: Address, value: Word) -> Result<()> {
        let (page, offset) = split(address)?;
        let page = self
            .pages
            .entry(page)
            .or_insert_with(|| Arc::new([0; PAGE_SIZE]));
        Arc::make_mut(page)[offset] = value;
        Ok(())
    }

    /// Copy out a range of words
    pub fn dump(&self, range: Range<Address>) -> Result<Vec<Word>> {
        range.map(|address| self.read(address)).collect()
    }

    /// Number of materialized pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of pages shared with another `Memory`
    pub fn shared_page_count(&self) -> usize {
        self.pages
            .values()
            .filter(|page| Arc::strong_count(page) > 1)
            .count()
    }
}

#[inline]
fn split(address: Address) -> Result<(u64, usize)> {
    if address < 0 {
        return Err(RuntimeError::NegativeAddress { address });
    }
    let address = address as u64;
    Ok((address / PAGE_SIZE as u64, (address % PAGE_SIZE as u64) as usize))
}
