pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Requested slice of a paginated review list (1-based page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const fn first(size: u32) -> Self {
        Self { page: 1, size }
    }

    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl PageInfo {
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_start_at_one() {
        assert_eq!(1, PageRequest::default().with_page(0).page);
        assert_eq!(3, PageRequest::default().with_page(3).page);
    }

    #[test]
    fn navigation_hints() {
        let info = PageInfo {
            page: 2,
            size: 15,
            total_elements: 40,
            total_pages: 3,
        };
        assert!(info.has_next());
        assert!(info.has_previous());
        assert!(!PageInfo::default().has_next());
        assert!(!PageInfo::default().has_previous());
    }
}
