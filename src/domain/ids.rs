use chrono::Utc;
use rand::{Rng, rng};

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self, prefix: &str) -> String;
}

/// `<prefix>_<epochMillis>_<random base36>` identifiers.
///
/// Collisions need two ids minted in the same millisecond with the same
/// 9-character suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn new_id(&self, prefix: &str) -> String {
        let millis = Utc::now().timestamp_millis();
        let mut rng = rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        format!("{prefix}_{millis}_{suffix}")
    }
}
