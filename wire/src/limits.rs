//! Configurable limits for bounded decoding.

/// Limits enforced while decoding course data.
///
/// Records come from untrusted uploads, so every count that drives an
/// allocation is checked before iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of a whole record in bytes.
    pub max_record_bytes: usize,

    /// Maximum number of commands in one layer field.
    pub max_commands_per_field: usize,

    /// Maximum number of points in one polyline.
    pub max_polyline_points: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Large art-heavy courses run to a few megabytes
            max_record_bytes: 16 * 1024 * 1024,
            max_commands_per_field: 1 << 20,
            max_polyline_points: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_record_bytes: 64 * 1024,
            max_commands_per_field: 256,
            max_polyline_points: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_record_bytes: usize::MAX,
            max_commands_per_field: usize::MAX,
            max_polyline_points: usize::MAX,
        }
    }
}
