/// Raw free-text processor description as it arrives from a data source.
/// Example: `Intel(R) Xeon(R) Silver 4210 CPU @ 2.20GHz`
pub type Description = String;
/// Name of a column in a named-column row.
/// Examples: `processor`, `idle_watts`, `brand`
pub type ColumnName = String;
/// Machine-family label used to group benchmark rows.
/// Examples: `Skylake`, `AMD EPYC Rome`
pub type FamilyLabel = String;
/// Machine-series label cleaned of marketing suffixes.
/// Examples: `E2`, `N1`
pub type SeriesLabel = String;
/// Normalized identity field value (lowercase, empty when absent).
/// Examples: `xeon`, `8280`, `v2`
pub type IdentityValue = String;
