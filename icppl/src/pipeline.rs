use crate::state::Mode;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default, Debug, Clone)]
pub struct Options {
    pub seed: Option<u64>, // None draws from entropy
    pub mode: Mode,
}
impl Options {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            None => StdRng::from_entropy(),
            Some(s) => StdRng::seed_from_u64(s),
        }
    }
    pub fn seed(s: u64) -> Self {
        Self {
            seed: Some(s),
            ..Default::default()
        }
    }
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}
