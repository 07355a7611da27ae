//! Query identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier of a joint-posterior query within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub u32);

impl QueryId {
    /// First query of a session.
    pub const FIRST: QueryId = QueryId(1);

    /// The identifier that follows this one.
    pub fn next(self) -> Self {
        QueryId(self.0.saturating_add(1))
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QueryId {
    fn from(id: u32) -> Self {
        QueryId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_id_display() {
        assert_eq!(QueryId(3).to_string(), "q3");
    }

    #[test]
    fn query_id_next_increments() {
        assert_eq!(QueryId::FIRST.next(), QueryId(2));
        assert_eq!(QueryId(u32::MAX).next(), QueryId(u32::MAX));
    }

    #[test]
    fn query_id_serializes_transparently() {
        let json = serde_json::to_string(&QueryId(5)).unwrap();
        assert_eq!(json, "5");
    }
}
