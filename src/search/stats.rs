//! Per-call search counters.

/// Counters describing one `find` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vehicles in the expanded request.
    pub vehicles: usize,
    /// Set partitions walked.
    pub partitions: usize,
    /// Partitions left after collapsing equal-length permutations.
    pub distinct_partitions: usize,
    /// Locations evaluated.
    pub locations: usize,
    /// Locations that produced a result.
    pub matched_locations: usize,
    /// Feasibility answers served from the cache during this call.
    pub cache_hits: u64,
    /// Feasibility answers computed during this call.
    pub cache_misses: u64,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Vehicles: {}", self.vehicles)?;
        writeln!(
            f,
            "  Partitions: {} ({} distinct)",
            self.partitions, self.distinct_partitions
        )?;
        writeln!(
            f,
            "  Locations: {} ({} matched)",
            self.locations, self.matched_locations
        )?;
        writeln!(
            f,
            "  Feasibility Cache: {} hits, {} misses",
            self.cache_hits, self.cache_misses
        )
    }
}
