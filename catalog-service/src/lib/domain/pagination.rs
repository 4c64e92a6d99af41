//! Page windows over a store's natural order.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

/// Zero-based page index plus a non-zero page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u32,
    page_size: u32,
}

impl PageRequest {
    /// # Errors
    /// * `ZeroPageSize` - `page_size` is 0
    pub fn new(page_index: u32, page_size: u32) -> Result<Self, PageRequestError> {
        if page_size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }

        Ok(Self {
            page_index,
            page_size,
        })
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records skipped before this page starts
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// One page of records with the totals of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_index: request.page_index(),
            page_size: request.page_size(),
            total_elements,
            total_pages: total_elements.div_ceil(request.limit()),
        }
    }

    pub fn is_first(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_index) + 1 >= self.total_pages
    }
}
