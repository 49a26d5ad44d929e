//! JSON-backed stores: a single [`Collection`] and the time-partitioned
//! [`GroupedCollection`] built on top of it.

pub mod backup;
pub mod collection;
pub mod dedup;
pub mod grouped;

pub use collection::{Collection, load_collection};
pub use dedup::Dedup;
pub use grouped::{GroupedCollection, KeyFuncs};
