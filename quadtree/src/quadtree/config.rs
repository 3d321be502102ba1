#[derive(Debug, Clone)]
pub struct Config {
    /// Leaf capacity that triggers a split; ignored once `max_depth` is reached.
    pub max_objects: usize,
    /// Hard ceiling on subdivision depth. The root sits at depth 0.
    pub max_depth: usize,
    /// Node slots reserved up front. 0 reserves the full node budget a tree
    /// of `max_depth` can ever allocate.
    pub pool_size: usize,
    /// Print `qt_profile` rebuild summaries to stderr for the first
    /// `profile_limit` frames.
    pub profile_summary: bool,
    pub profile_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 25,
            max_depth: 3,
            pool_size: 0,
            profile_summary: false,
            profile_limit: 60,
        }
    }
}
