/// Get environment variable with WEIR_ prefix, falling back to unprefixed version
///
/// This helper function checks for `WEIR_{key}` first, then falls back to `{key}`
/// for compatibility with standard environment variable naming.
///
/// # Examples
///
/// ```rust,ignore
/// use weir::utils::get_env_with_prefix;
///
/// // Checks WEIR_LIMIT_MAX_CALLS first, then LIMIT_MAX_CALLS
/// let max_calls = get_env_with_prefix("LIMIT_MAX_CALLS");
///
/// // Checks WEIR_LOG_LEVEL first, then LOG_LEVEL
/// let level = get_env_with_prefix("LOG_LEVEL");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("WEIR_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}
