/// Config for a producer registration
/// ## Fields
/// - `cache_provides`:
///   If `true`, the producer is a lazy singleton: it runs on the first resolution
///   and its result is cached and reused for every later one.
///   If `false`, the producer is a factory and runs on every resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub cache_provides: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { cache_provides: true }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn singleton() -> Self {
        Self { cache_provides: true }
    }

    #[inline]
    #[must_use]
    pub const fn factory() -> Self {
        Self { cache_provides: false }
    }
}
