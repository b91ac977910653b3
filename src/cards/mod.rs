//! Card system: definitions and deck instances.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Static catalog data (name, type line, banlist status)
//! - `BanStatus`: Restriction level controlling copy limits
//! - `InstanceId`: Identity of one copy inside a deck
//! - `RoleTag`: Closed set of strategic roles
//! - `DeckCard`: A tagged copy of a card

pub mod definition;
pub mod instance;

pub use definition::{BanStatus, Card, CardCategory, CardId};
pub use instance::{DeckCard, InstanceId, RoleTag};
