//! Immutable lookup tables consulted by the decoders.
//!
//! Every keyed lookup resolves to *some* entry: values without a defined
//! meaning return a sentinel describing them as unknown, so that each input
//! has a description and a statistics bucket.

pub mod attributes;
pub mod rop;
pub mod sequences;
pub mod symbol_sets;
pub mod tags;

pub use attributes::{Attribute, attribute};
pub use rop::{LogicalOperation, logical_operation};
pub use sequences::{Action, Sequence, sequence};
pub use symbol_sets::{SymbolSet, SymbolSetId, symbol_set};
pub use tags::{BaseType, Binding, Group, GroupRole, Shape, Tag, TagKind, tag};
