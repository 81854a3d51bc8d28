pub mod errors;
pub mod trace;
pub mod value;
pub mod weight;
pub use crate::data::errors::TraceError::*;
pub use crate::data::errors::*;
pub use crate::data::trace::*;
pub use crate::data::value::*;
pub use crate::data::weight::*;

// reexports and aliases
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type HashSet<V> = rustc_hash::FxHashSet<V>;
