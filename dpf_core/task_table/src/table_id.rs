use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

pub const TABLE_ID_PREFIX: &str = "etl-tasks-";

/// Element id of one rendered task table, unique within a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId(String);

impl TableId {
    pub fn explicit(suffix: impl Display) -> Self {
        Self(format!("{}{}", TABLE_ID_PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out sequential table ids, starting at 0.
///
/// The counter belongs to the context: build one per page (or per process)
/// and pass it to whoever creates tables.
#[derive(Debug, Default)]
pub struct TableIdContext {
    next: AtomicU64,
}

impl TableIdContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> TableId {
        TableId::explicit(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_id_is_prefixed() {
        assert_eq!(TableId::explicit("main").as_str(), "etl-tasks-main");
    }

    #[test]
    fn context_ids_are_sequential() {
        let ctx = TableIdContext::new();

        assert_eq!(ctx.next_id().to_string(), "etl-tasks-0");
        assert_eq!(ctx.next_id().to_string(), "etl-tasks-1");
        assert_eq!(ctx.next_id().to_string(), "etl-tasks-2");
    }

    #[test]
    fn separate_contexts_do_not_share_counters() {
        let first = TableIdContext::new();
        let second = TableIdContext::new();
        first.next_id();

        assert_eq!(second.next_id().as_str(), "etl-tasks-0");
    }
}
