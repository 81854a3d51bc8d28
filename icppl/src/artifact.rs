use crate::data::Sample;
use crate::dist::Dist;

/// Location and spread of a proposal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub mean: f64,
    pub std: f64,
}
impl Proposal {
    pub fn new(mean: f64, std: f64) -> Self {
        Proposal { mean, std }
    }
    pub fn dist(&self) -> Dist {
        Dist::Normal(self.mean, self.std)
    }
}

/// A trained proposal model. Given the previously recorded sample (if any)
/// and a provisional sample drawn from the prior at the current address, it
/// proposes where the value should come from instead.
pub trait Artifact {
    fn forward(&mut self, previous: Option<&Sample>, current: &Sample) -> Proposal;
}

impl<F> Artifact for F
where
    F: FnMut(Option<&Sample>, &Sample) -> Proposal,
{
    fn forward(&mut self, previous: Option<&Sample>, current: &Sample) -> Proposal {
        self(previous, current)
    }
}
