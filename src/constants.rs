/// Closed vocabularies used by the identity extractor.
///
/// Each list is ordered: when two tokens match at the same string position,
/// the earlier entry wins. Matching is plain substring search, so a token can
/// fire inside a longer word (see the known-limitation notes in `identity`).
pub mod vocab {
    /// Manufacturer tokens recognized in normalized descriptions.
    pub const COMPANIES: [&str; 3] = ["intel", "amd", "arm"];
    /// Product-line tokens recognized in normalized descriptions.
    pub const BRANDS: [&str; 6] = ["opteron", "epyc", "core", "pentium", "xeon", "cortex"];
    /// Tier/qualifier tokens recognized in normalized descriptions.
    pub const MAKES: [&str; 5] = ["gold", "silver", "platinum", "six-core", "quad-core"];
}

/// Canonical column names used across tables produced by the pipeline.
pub mod columns {
    /// Free-text processor description column.
    pub const PROCESSOR: &str = "processor";

    /// Node count per benchmark record.
    pub const NODES: &str = "nodes";
    /// Chip count per benchmark record.
    pub const CHIPS: &str = "chips";
    /// Core count per benchmark record.
    pub const CORES: &str = "cores";
    /// Thread count per benchmark record.
    pub const THREADS: &str = "threads";
    /// Clock speed in MHz.
    pub const MHZ: &str = "mhz";
    /// Total memory in gigabytes.
    pub const MEMORY_GB: &str = "memory_gb";
    /// Average watts drawn at active idle.
    pub const IDLE_WATTS: &str = "idle_watts";
    /// Average watts drawn at 100% load.
    pub const MAX_WATTS: &str = "max_watts";
    /// Launch year of the benchmarked system.
    pub const LAUNCH_YEAR: &str = "launch_year";

    /// Parsed manufacturer column (diagnostic; not part of the join key).
    pub const COMPANY: &str = "company";
    /// Parsed product-line column.
    pub const BRAND: &str = "brand";
    /// Parsed tier/qualifier column.
    pub const MAKE: &str = "make";
    /// Parsed bare model code column.
    pub const MODEL: &str = "model";
    /// Parsed letter-suffix column.
    pub const MONIKER: &str = "moniker";
    /// Parsed version-suffix column.
    pub const VERSION: &str = "version";

    /// Identity columns attached by the key assigner, in attachment order.
    pub const IDENTITY_FIELDS: [&str; 6] = [COMPANY, BRAND, MAKE, MODEL, MONIKER, VERSION];
    /// Join-key columns. Company is excluded: it is frequently absent or
    /// unreliable in source data, so the join tolerates cross-manufacturer
    /// collisions on identical model numbers.
    pub const KEY_FIELDS: [&str; 5] = [BRAND, MAKE, MODEL, MONIKER, VERSION];

    /// Derived watts-per-thread at active idle.
    pub const WATTS_PER_THREAD_IDLE: &str = "watts_per_thread_idle";
    /// Derived watts-per-thread at 100% load.
    pub const WATTS_PER_THREAD_MAX: &str = "watts_per_thread_max";
    /// Derived watts-per-core at active idle.
    pub const WATTS_PER_CORE_IDLE: &str = "watts_per_core_idle";
    /// Derived watts-per-core at 100% load.
    pub const WATTS_PER_CORE_MAX: &str = "watts_per_core_max";
    /// Derived threads-per-core ratio (almost always 1 or 2).
    pub const THREADS_PER_CORE: &str = "threads_per_core";

    /// Columns averaged by `stats::summarize`, in report order.
    pub const MEAN_FIELDS: [&str; 13] = [
        NODES,
        CHIPS,
        MHZ,
        MEMORY_GB,
        CORES,
        THREADS,
        IDLE_WATTS,
        MAX_WATTS,
        WATTS_PER_THREAD_IDLE,
        WATTS_PER_THREAD_MAX,
        WATTS_PER_CORE_IDLE,
        WATTS_PER_CORE_MAX,
        THREADS_PER_CORE,
    ];

    /// Suffix applied to right-side columns whose name collides in a join.
    pub const JOIN_RIGHT_SUFFIX: &str = "_right";
}

/// Default configuration values for the pipeline entry points.
pub mod defaults {
    /// Average fleet utilization used for the blended power estimate.
    pub const UTILIZATION: f64 = 0.4;
    /// Label attached to the whole-benchmark-table summary row.
    pub const OVERALL_LABEL: &str = "all";
    /// Machine-family labels summarized by default (subject to change each
    /// year as the fleet evolves).
    pub const MACHINE_FAMILIES: [&str; 9] = [
        "AMD EPYC Milan",
        "AMD EPYC Rome",
        "Haswell",
        "Broadwell",
        "Cascade Lake",
        "Ice Lake",
        "Skylake",
        "Ivy Bridge",
        "Sandy Bridge",
    ];
}
