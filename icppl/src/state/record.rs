use super::{Mode, State};
use crate::data::errors;
use crate::data::{Address, Result, Sample, Val};
use crate::dist::Dist;
use crate::state::address::Site;
use tracing::*;

impl<'a> State<'a> {
    /// Draw from `dist`, recording the choice when a trace is active. The
    /// site is addressed by the innermost frame's counter; prefer `sample!`.
    pub fn sample(&mut self, dist: &Dist) -> Result<Val> {
        self.sample_at(Site::counted(), dist)
    }

    /// like `sample`, positioned by a caller-chosen tag
    pub fn sample_tagged(&mut self, tag: &str, dist: &Dist) -> Result<Val> {
        self.sample_at(Site::tagged(tag), dist)
    }

    pub fn sample_at(&mut self, site: Site, dist: &Dist) -> Result<Val> {
        let value = dist.sample(&mut self.rng)?;
        if self.trace.is_none() {
            return Ok(value);
        }
        let address = self.resolve(site);
        let sample = match self.mode {
            Mode::CompiledInference => self.propose(address, dist, value)?,
            Mode::Inference | Mode::Compilation => Sample::new(address, dist.clone(), value),
        };
        trace!("sample {} ~ {} = {}", sample.address, sample.dist, sample.value);
        let value = sample.value.clone();
        match self.trace.as_mut() {
            Some(trace) => trace.add_sample(sample),
            None => return errors::no_active_trace(),
        }
        Ok(value)
    }

    /// Replace the prior draw with one from the artifact's proposal and add
    /// the importance correction log p(v) - log q(v) to the trace.
    fn propose(&mut self, address: Address, dist: &Dist, value: Val) -> Result<Sample> {
        let artifact = match self.artifact.as_mut() {
            Some(artifact) => artifact,
            None => return errors::missing_artifact(),
        };
        let trace = match self.trace.as_mut() {
            Some(trace) => trace,
            None => return errors::no_active_trace(),
        };
        let provisional = Sample::new(address, dist.clone(), value);
        let proposal = artifact.forward(trace.last_sample(), &provisional);
        let q = proposal.dist();
        let value = q.sample(&mut self.rng)?;
        let lw = dist.log_pdf(&value)? - q.log_pdf(&value)?;
        trace!("    proposal {} at {}: log weight {:.6}", q, provisional.address, lw);
        trace.add_log_p(lw);
        Ok(Sample::new(provisional.address, provisional.dist, value))
    }

    /// Condition on `value` under `dist`. In compilation mode the supplied
    /// value is ignored and a fresh draw from `dist` is recorded instead.
    pub fn observe(&mut self, dist: &Dist, value: impl Into<Val>) -> Result<()> {
        let trace = match self.trace.as_mut() {
            Some(trace) => trace,
            None => return Ok(()),
        };
        let recorded = match self.mode {
            Mode::Compilation => dist.sample(&mut self.rng)?,
            Mode::Inference | Mode::CompiledInference => value.into(),
        };
        let lp = dist.log_pdf(&recorded)?;
        trace!("observe {} from {}: log p {:.6}", recorded, dist, lp);
        trace.add_observe(recorded);
        trace.add_log_p(lp);
        Ok(())
    }
}
