//! Graph-aware JSON serialization for GEMD records.
//!
//! Record graphs are arbitrary and may be cyclic: a material run points at the
//! process that made it, whose ingredients point at other material runs. This
//! crate turns such a graph into flat, de-duplicated JSON and back:
//!
//! - [`flatten`] collects every distinct entity reachable from a root,
//!   assigning uids where missing
//! - [`substitute_links`] replaces nested entities with [`LinkByUid`] tokens
//! - [`encode`] writes a [`Wire`] tree as deterministic JSON
//! - [`Decoder`] rebuilds records through a [`TypeRegistry`] and re-hydrates
//!   links into shared instances
//! - [`GemdJson`] ties it together: `dumps`, `loads`, `thin_dumps`,
//!   `raw_dumps`, `raw_loads`, `copy`
//!
//! Wire format:
//!
//! ```json
//! {"context": [{"name": "anneal", "type": "process_run", "uids": {"auto": "..."}, ...}],
//!  "object": {"id": "...", "scope": "auto", "type": "link_by_uid"}}
//! ```

mod config;
mod decode;
mod encode;
mod flatten;
mod registry;
mod serializer;
mod substitute;
mod wire;

pub use config::{DEFAULT_AUTO_SCOPE, GemdJsonConfig};
pub use decode::{DecodeIndex, Decoded, Decoder};
pub use encode::{TYPE_FIELD, encode, to_json};
pub use flatten::{flatten, set_uuids};
pub use registry::{Dispatch, TypeRegistry};
pub use serializer::{CONTEXT_KEY, GemdJson, OBJECT_KEY};
pub use substitute::{expand, substitute_links, substitute_nested};
pub use wire::Wire;

pub use gemd_types::{
    Constructor, Error, LINK_TYPE_TAG, LinkByUid, Obj, Reference, Result, Uids, Value, constructor,
};
