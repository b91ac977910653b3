//! Deck partition: three disjoint zones and their edit operations.
//!
//! ## Key Types
//!
//! - `DeckZone`: Main, Extra or Side
//! - `DeckPartition`: Caller-owned deck value with edit operations
//! - `SortOrder`: Zone orderings offered by the editor

pub mod partition;
pub mod sort;
pub mod zone;

pub use partition::DeckPartition;
pub use sort::SortOrder;
pub use zone::DeckZone;
