#![allow(clippy::type_complexity)]
#![allow(clippy::new_without_default)]

// core types
pub mod data;
pub use data::*;

pub mod dist;
pub use dist::Dist;

pub mod artifact;
pub use artifact::{Artifact, Proposal};

// execution context, address resolution, recording
#[macro_use]
pub mod state;
pub use state::address::{Position, Site, Target, ANONYMOUS_PREFIX};
pub use state::{Mode, State};

// interface
pub mod pipeline;
pub use pipeline::*;

pub mod inference;

// extras
pub mod utils;

#[cfg(test)]
mod tests;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
