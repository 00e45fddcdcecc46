/// Bounding-box draws tried before switching to triangulation. A city that fills at least a
/// tenth of its bounding box misses this many times with probability below `1e-457`.
pub const DEFAULT_MAX_REJECTION_ATTEMPTS: u32 = 10_000;

/// Triangle draws tried before giving up on an area whose triangles all fall outside it.
pub const MAX_TRIANGULATION_DRAWS: u32 = 1_000;
