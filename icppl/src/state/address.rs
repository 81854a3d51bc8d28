//! Address resolution. An address is the call path from the trace's root
//! frame down to the choice site, the assigned target when one is known, and
//! a position marker for the site within its innermost frame.
//!
//! Positions come from the site itself when it carries one (`site!` injects
//! line and column, `sample_tagged` a caller-chosen tag). Untagged sites fall
//! back to the innermost frame's running count of untagged choices, which is
//! stable as long as control flow through that frame is unchanged.

use super::State;
use crate::data::Address;
use itertools::*;
use std::fmt;
use tracing::*;

/// frame names starting with this mark stop the walk towards the root
pub const ANONYMOUS_PREFIX: char = '<';
pub(crate) const ANONYMOUS_FRAME: &str = "<anonymous>";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    Static { line: u32, column: u32 },
    Tag(String),
    Counter(u64),
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Static { line, column } => write!(f, "{}:{}", line, column),
            Position::Tag(t) => write!(f, "{}", t),
            Position::Counter(n) => write!(f, "#{}", n),
        }
    }
}

/// what the sampled value is assigned into
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Var(String),
    /// container and the rendered index
    Indexed(String, String),
}
impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Var(v) => write!(f, "{}", v),
            Target::Indexed(v, ix) => write!(f, "{}[{}]", v, ix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Site {
    pub position: Option<Position>,
    pub target: Option<Target>,
}
impl Site {
    /// no position; the innermost frame's counter supplies one
    pub fn counted() -> Self {
        Default::default()
    }
    pub fn at(line: u32, column: u32) -> Self {
        Site {
            position: Some(Position::Static { line, column }),
            target: None,
        }
    }
    pub fn tagged(tag: &str) -> Self {
        Site {
            position: Some(Position::Tag(tag.to_string())),
            target: None,
        }
    }
    pub fn assign(self, var: &str) -> Self {
        Site {
            target: Some(Target::Var(var.to_string())),
            ..self
        }
    }
    pub fn assign_index(self, container: &str, ix: impl fmt::Display) -> Self {
        Site {
            target: Some(Target::Indexed(container.to_string(), ix.to_string())),
            ..self
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub name: String,
    /// untagged sites seen so far in this activation
    pub sites: u64,
}
impl Frame {
    pub fn new(name: &str) -> Self {
        Frame {
            name: name.to_string(),
            sites: 0,
        }
    }
}

/// Names from `root` (inclusive) down to the innermost frame.
///
/// The walk goes outward from the innermost frame and stops at the root or at
/// an anonymous frame, which is dropped with everything outside it. The flag
/// is false when the stack ran out before either was found; the names
/// collected so far are still returned.
pub(crate) fn call_path(frames: &[Frame], root: Option<&str>) -> (Vec<String>, bool) {
    let mut names = vec![];
    for frame in frames.iter().rev() {
        if frame.name.starts_with(ANONYMOUS_PREFIX) {
            names.reverse();
            return (names, true);
        }
        names.push(frame.name.clone());
        if Some(frame.name.as_str()) == root {
            names.reverse();
            return (names, true);
        }
    }
    names.reverse();
    (names, false)
}

impl<'a> State<'a> {
    fn next_position(&mut self) -> Position {
        let counter = match self.frames.last_mut() {
            Some(frame) => &mut frame.sites,
            None => &mut self.toplevel_sites,
        };
        let n = *counter;
        *counter += 1;
        Position::Counter(n)
    }

    /// Resolve the address of the choice at `site`. Never fails: a walk that
    /// misses the root yields a partial address and is counted as degraded.
    pub(crate) fn resolve(&mut self, site: Site) -> Address {
        let position = match site.position {
            Some(p) => p,
            None => self.next_position(),
        };
        let (mut path, complete) = call_path(&self.frames, self.root.as_deref());
        if let Some(target) = site.target {
            path.push(target.to_string());
        }
        let address = Address::new(position, path);
        if !complete {
            self.degraded += 1;
            warn!(
                "call stack exhausted before reaching root `{}`; using partial address {} (frames: [{}])",
                self.root.as_deref().unwrap_or_default(),
                address,
                self.frames.iter().map(|f| f.name.as_str()).join(", ")
            );
        }
        address
    }
}
