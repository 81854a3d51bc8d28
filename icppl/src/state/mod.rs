//! The per-execution context. A `State` owns the active trace slot, the mode
//! and the call-frame stack that addresses are resolved against. Program code
//! threads `&mut State` through every function that makes a random choice.

/// Build a [`Site`](crate::Site) carrying the invocation's line and column.
///
/// `site!()` names no target, `site!(x)` attributes the choice to `x` and
/// `site!(xs[i])` to the element `xs[i]`.
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::at(line!(), column!())
    };
    ($var:ident) => {
        $crate::Site::at(line!(), column!()).assign(stringify!($var))
    };
    ($var:ident [ $ix:expr ]) => {
        $crate::Site::at(line!(), column!()).assign_index(stringify!($var), $ix)
    };
}

/// Record a random choice at a statically addressed site.
///
/// ```ignore
/// let x = sample!(st, x = Dist::Normal(0.0, 1.0))?;
/// xs[i] = sample!(st, xs[i] = Dist::Bern(0.5))?;
/// let coin = sample!(st, Dist::Bern(0.5))?;
/// ```
#[macro_export]
macro_rules! sample {
    ($st:expr, $var:ident = $dist:expr) => {
        $st.sample_at($crate::site!($var), &$dist)
    };
    ($st:expr, $var:ident [ $ix:expr ] = $dist:expr) => {
        $st.sample_at($crate::site!($var[$ix]), &$dist)
    };
    ($st:expr, $dist:expr) => {
        $st.sample_at($crate::site!(), &$dist)
    };
}

pub mod address;
pub mod record;

use crate::artifact::Artifact;
use crate::data::errors;
use crate::data::{Result, Trace};
use crate::pipeline::Options;
use address::Frame;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;
use tracing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// record choices drawn from the prior
    Inference,
    /// generate self-consistent training traces; observations are resampled
    Compilation,
    /// draw choices from an artifact's proposals and importance-correct
    CompiledInference,
}
impl Default for Mode {
    fn default() -> Self {
        Mode::Inference
    }
}
impl FromStr for Mode {
    type Err = errors::TraceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "inference" => Ok(Mode::Inference),
            "compilation" => Ok(Mode::Compilation),
            "compiled_inference" => Ok(Mode::CompiledInference),
            _ => errors::invalid_mode(s),
        }
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Inference => write!(f, "inference"),
            Mode::Compilation => write!(f, "compilation"),
            Mode::CompiledInference => write!(f, "compiled_inference"),
        }
    }
}

pub struct State<'a> {
    mode: Mode,
    rng: StdRng,
    artifact: Option<&'a mut dyn Artifact>,
    trace: Option<Trace>,
    root: Option<String>,
    frames: Vec<Frame>,
    toplevel_sites: u64,
    degraded: usize,
}

impl<'a> State<'a> {
    pub fn new(opts: &Options) -> State<'a> {
        State {
            mode: opts.mode,
            rng: opts.rng(),
            artifact: None,
            trace: None,
            root: None,
            frames: vec![],
            toplevel_sites: 0,
            degraded: 0,
        }
    }
    pub fn seeded(seed: u64) -> State<'a> {
        Self::new(&Options::seed(seed))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("mode: {} -> {}", self.mode, mode);
        self.mode = mode;
    }
    /// set the mode by name, rejecting anything that is not a known mode
    pub fn set_mode_named(&mut self, name: &str) -> Result<()> {
        let mode = name.parse::<Mode>()?;
        self.set_mode(mode);
        Ok(())
    }
    pub fn set_artifact(&mut self, artifact: &'a mut dyn Artifact) {
        self.artifact = Some(artifact);
    }
    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }
    /// name of the function addresses are resolved against, while a trace is active
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }
    /// how many addresses were resolved without reaching the root frame
    pub fn degraded_addresses(&self) -> usize {
        self.degraded
    }

    pub fn begin_trace(&mut self, root: &str) -> Result<()> {
        if self.trace.is_some() {
            let active = self.root.clone().unwrap_or_default();
            return errors::already_active(&active);
        }
        debug!("begin trace at `{}` ({})", root, self.mode);
        self.trace = Some(Trace::new());
        self.root = Some(root.to_string());
        self.toplevel_sites = 0;
        Ok(())
    }

    pub fn end_trace(&mut self) -> Result<Trace> {
        match self.trace.take() {
            None => errors::no_active_trace(),
            Some(mut trace) => {
                trace.pack_observes();
                let root = self.root.take();
                debug!(
                    "end trace at `{}`: {} samples, {} observes, {}",
                    root.unwrap_or_default(),
                    trace.len(),
                    trace.observes().len(),
                    trace.log_weight().log_render()
                );
                Ok(trace)
            }
        }
    }

    /// Run `f` inside a frame called `name`. Every function on the path from
    /// the root to a random choice should enter its frame this way.
    pub fn call<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.frames.push(Frame::new(name));
        let r = f(self);
        self.frames.pop();
        r
    }
    /// a frame that cuts address resolution off at this point
    pub fn call_anonymous<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.call(address::ANONYMOUS_FRAME, f)
    }

    /// Trace one full run of a program: begin a trace rooted at `root`, run
    /// `f` in the root frame, and finalize. The trace slot is released even
    /// when `f` fails, and `f`'s error is the one returned.
    pub fn trace_program<R>(
        &mut self,
        root: &str,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<(R, Trace)> {
        let span = tracing::span!(tracing::Level::DEBUG, "trace", root);
        let _enter = span.enter();
        self.begin_trace(root)?;
        match self.call(root, f) {
            Ok(r) => Ok((r, self.end_trace()?)),
            Err(e) => {
                warn!("program `{}` failed: {}", root, e);
                if self.is_tracing() {
                    self.end_trace()?;
                }
                Err(e)
            }
        }
    }
}
