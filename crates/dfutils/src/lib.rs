//! # dfutils
//!
//! SQL fragment generators for Dataform-style (BigQuery) transformation
//! projects.
//!
//! ## Fragments
//!
//! - **Deduplication**: keep one row per partition with `QUALIFY ROW_NUMBER()`
//! - **Surrogate keys**: `to_hex(md5(...))` over NULL-safe, dash-delimited columns
//! - **Union-all blending**: `UNION ALL` several relations, tagging each row
//!   with its alias and source relation
//!
//! Every generator is a pure function of its inputs. The plain entry points
//! never validate: whatever they are given ends up in the SQL, and the engine
//! rejects what is malformed. Builders also offer `try_to_sql()`, which checks
//! inputs first and returns [`DfError`] instead.
//!
//! ```ignore
//! use dfutils::prelude::*;
//!
//! let latest = deduplicate("raw.customers", "customer_id", "updated_at DESC");
//! let key = generate_surrogate_key(["order_id", "line_no"]);
//! let all = UnionRelations::new([("eu", "raw.orders_eu"), ("us", "raw.orders_us")])
//!     .fields(["order_id", "amount"])
//!     .try_to_sql()?;
//! # Ok::<(), dfutils::DfError>(())
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod fragment;
pub mod ident;
pub mod prelude;
pub mod relations;
pub mod surrogate_key;
pub mod trace;
pub mod union_all;

pub use config::{FragmentDefaults, SurrogateKeyDefaults, UnionDefaults};
pub use dedup::{Deduplicate, deduplicate};
pub use error::{DfError, DfResult};
pub use fragment::SqlFragment;
pub use relations::Relations;
pub use surrogate_key::{
    SURROGATE_KEY_NULL, SurrogateKey, generate_surrogate_key, generate_surrogate_key_with_null,
};
pub use union_all::{DEFAULT_KEY_COLUMN, DEFAULT_VALUE_COLUMN, UnionRelations, union_relations};
