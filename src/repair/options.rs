//! Repair options and configuration.

/// Options controlling which repairs run.
///
/// The defaults apply every repair and leave text otherwise untouched.
#[derive(Debug, Clone)]
pub struct RepairOptions {
    /// Promote the first non-empty line to a `#` title
    pub promote_title: bool,

    /// Turn `N.M text` lines into `##`/`###` headings
    pub reconstruct_headings: bool,

    /// Split collapsed table lines into rows
    pub split_tables: bool,

    /// Normalize input to Unicode NFC before repairing
    pub normalize_unicode: bool,

    /// Collect repair statistics
    pub collect_stats: bool,
}

impl RepairOptions {
    /// Create new repair options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with every repair switched off (plain trimming only).
    pub fn none() -> Self {
        Self {
            promote_title: false,
            reconstruct_headings: false,
            split_tables: false,
            ..Self::default()
        }
    }

    /// Enable or disable title promotion.
    pub fn with_title(mut self, promote: bool) -> Self {
        self.promote_title = promote;
        self
    }

    /// Enable or disable numbered heading reconstruction.
    pub fn with_headings(mut self, reconstruct: bool) -> Self {
        self.reconstruct_headings = reconstruct;
        self
    }

    /// Enable or disable table splitting.
    pub fn with_tables(mut self, split: bool) -> Self {
        self.split_tables = split;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            promote_title: true,
            reconstruct_headings: true,
            split_tables: true,
            normalize_unicode: false,
            collect_stats: false,
        }
    }
}
