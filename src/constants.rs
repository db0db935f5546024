//! # System Constants
//!
//! Cache key format, TTL, and pagination defaults shared between the service
//! layer and its tests.

/// Prefix for fast-path cache keys; the full key is `task:<id>`.
pub const CACHE_KEY_PREFIX: &str = "task:";

/// Default expiration for cached task snapshots (one hour).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// First page when no page parameter is supplied.
pub const DEFAULT_PAGE: u32 = 1;

/// Rows per page when no size parameter is supplied.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Build the fast-path cache key for a task id.
pub fn task_cache_key(task_id: i64) -> String {
    format!("{CACHE_KEY_PREFIX}{task_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_uses_decimal_id_with_prefix() {
        assert_eq!(task_cache_key(1), "task:1");
        assert_eq!(task_cache_key(42), "task:42");
    }
}
