/// How the external engine is asked to search (pure Rust, no config files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed search depth in plies.
    pub depth: u32,

    /// Search for this many milliseconds instead of to a fixed depth.
    pub move_time_ms: Option<u64>,
}

impl EngineConfig {
    pub const DEFAULT_DEPTH: u32 = 12;

    pub fn new() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            move_time_ms: None,
        }
    }

    /// Set the search depth. A depth of 0 is raised to 1: `go depth 0` asks the
    /// engine for no search at all.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(1);
        self
    }

    pub fn with_move_time_ms(mut self, ms: Option<u64>) -> Self {
        self.move_time_ms = ms;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
