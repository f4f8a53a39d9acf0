pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PaginationRequest {
    /// Builds a window with `limit` clamped to `1..=MAX_PAGE_SIZE` and a non-negative offset.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }

    /// `None` when the window already reaches `total` or the offset would overflow.
    pub fn next(&self, total: i64) -> Option<Self> {
        let offset = self.offset.checked_add(self.limit)?;
        (offset < total).then_some(Self {
            limit: self.limit,
            offset,
        })
    }

    pub fn previous(&self) -> Option<Self> {
        (self.offset > 0).then(|| Self {
            limit: self.limit,
            offset: (self.offset - self.limit).max(0),
        })
    }
}
