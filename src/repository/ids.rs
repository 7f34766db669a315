//! Id allocation for new records.

use chrono::Utc;

/// Hands out millisecond-timestamp ids that never repeat.
///
/// Each id is the current wall-clock millisecond, bumped past the previous id
/// when two records are created within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start after `floor`, normally the largest id already persisted.
    pub fn starting_after(floor: i64) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = IdGenerator::default();
        let mut previous = ids.next_id();
        for _ in 0..1_000 {
            let id = ids.next_id();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_floor_beyond_clock_is_respected() {
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        let mut ids = IdGenerator::starting_after(far_future);
        assert_eq!(ids.next_id(), far_future + 1);
        assert_eq!(ids.next_id(), far_future + 2);
    }
}
