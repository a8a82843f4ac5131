use crate::model::api::PaginationDto;

/// Zero based page index for a 1-based page number, treating 0 as the first page.
pub fn page_index(page: Option<u64>) -> u64 {
    page.unwrap_or(1).max(1) - 1
}

pub fn pagination(page_index: u64, per_page: u64, total_items: u64) -> PaginationDto {
    PaginationDto {
        page: page_index + 1,
        per_page,
        total_items,
        total_pages: total_items.div_ceil(per_page.max(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_page_numbers() {
        assert_eq!(page_index(None), 0);
        assert_eq!(page_index(Some(0)), 0);
        assert_eq!(page_index(Some(3)), 2);
    }

    #[test]
    fn counts_partial_last_page() {
        let page = pagination(0, 50, 101);

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
    }
}
