use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start node does not belong to the graph's node set.
    /// Reported at engine construction time.
    #[error("start node is not a member of the graph")]
    InvalidStart,
    /// The queried node has no discoverable cost after the candidate pool has
    /// been exhausted. A normal query outcome, not a crash.
    #[error("no path connects the start node to the queried node")]
    Unreachable,
    /// A cost value's textual form cannot be parsed as an exact decimal by
    /// the default arithmetic policy.
    #[error("cost value is not a valid decimal number: {0:?}")]
    MalformedCost(String),
}
