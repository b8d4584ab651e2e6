//! Convenient imports for typical `dfutils` usage.
//!
//! ```ignore
//! use dfutils::prelude::*;
//! ```

pub use crate::{
    Deduplicate, DfError, DfResult, Relations, SqlFragment, SurrogateKey, UnionRelations,
    deduplicate, generate_surrogate_key, generate_surrogate_key_with_null, union_relations,
};
