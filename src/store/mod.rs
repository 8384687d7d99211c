/// The four in-memory stores at the heart of the tracker
///
/// Each store owns its collection and the derived state that goes with it
/// (streaks, read counts, retention). Mutations are synchronous and
/// immediately visible to subsequent reads from the same store instance;
/// callers that share a store across threads wrap it in a mutex (see the
/// metrics facade).

pub mod counters;
pub mod habits;
pub mod moods;
pub mod notifications;

// Re-export the store types
pub use counters::*;
pub use habits::*;
pub use moods::*;
pub use notifications::*;
