//! Manager configuration parameters.

/// When [`RegionManager::defragment`](crate::RegionManager::defragment)
/// checks its free list against the region before compacting.
///
/// A failed check means the caller mutated the region after the scan
/// (or handed in a list that never matched it). Compacting from such a
/// list would shuffle occupied data into the wrong places, so the check
/// panics with the underlying [`RegionError`](silt_core::RegionError).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifyMode {
    /// Never check. The free list is trusted as built.
    Never,
    /// Check only when `debug_assertions` are enabled.
    #[default]
    DebugOnly,
    /// Always check, in every build profile.
    Always,
}

impl VerifyMode {
    /// Whether the check runs in the current build.
    pub fn enabled(self) -> bool {
        match self {
            Self::Never => false,
            Self::DebugOnly => cfg!(debug_assertions),
            Self::Always => true,
        }
    }
}

/// Configuration for a [`RegionManager`](crate::RegionManager).
///
/// All values are fixed at construction.
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Pre-compaction free-list check policy. Default: [`VerifyMode::DebugOnly`].
    pub verify: VerifyMode,

    /// Number of free-block nodes to reserve up front.
    ///
    /// Default: 16. The list grows past this on demand; the hint only
    /// avoids reallocation while scanning lightly fragmented regions.
    pub capacity_hint: usize,
}

impl ManagerConfig {
    /// Default free-list node reservation.
    pub const DEFAULT_CAPACITY_HINT: usize = 16;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            verify: VerifyMode::default(),
            capacity_hint: Self::DEFAULT_CAPACITY_HINT,
        }
    }

    /// Set the verification policy.
    pub fn with_verify(mut self, verify: VerifyMode) -> Self {
        self.verify = verify;
        self
    }

    /// Set the free-list capacity hint.
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new()
    }
}
