use crate::data::{HashMap, Val, LW};
use crate::dist::Dist;
use crate::state::address::Position;
use itertools::*;
use std::fmt;

/// Identifies a random-choice site: where the site sits in its function and
/// the call path (root first, assigned target last) that reached it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    pub position: Position,
    pub path: Vec<String>,
}
impl Address {
    pub fn new(position: Position, path: Vec<String>) -> Self {
        Address { position, path }
    }
    /// the joined path, without the position marker
    pub fn path_str(&self) -> String {
        self.path.iter().join(".")
    }
}
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.position, self.path_str())
    }
}

/// one recorded random choice
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub address: Address,
    pub dist: Dist,
    pub value: Val,
}
impl Sample {
    pub fn new(address: Address, dist: Dist, value: Val) -> Self {
        Sample {
            address,
            dist,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    samples: Vec<Sample>,
    observes: Vec<Val>,
    packed: Vec<f64>,
    log_p: LW,
    /// first sample index per address
    index: HashMap<Address, usize>,
}
impl Trace {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn observes(&self) -> &[Val] {
        &self.observes
    }
    /// observations in their packed numeric form. Empty until the trace is finalized.
    pub fn packed_observes(&self) -> &[f64] {
        &self.packed
    }
    pub fn log_p(&self) -> f64 {
        self.log_p.val()
    }
    pub fn log_weight(&self) -> LW {
        self.log_p
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn last_sample(&self) -> Option<&Sample> {
        self.samples.last()
    }
    pub fn addresses(&self) -> Vec<&Address> {
        self.samples.iter().map(|s| &s.address).collect_vec()
    }
    /// first sample recorded at `addr`
    pub fn get(&self, addr: &Address) -> Option<&Sample> {
        self.index.get(addr).and_then(|ix| self.samples.get(*ix))
    }

    pub(crate) fn add_sample(&mut self, s: Sample) {
        self.index.entry(s.address.clone()).or_insert(self.samples.len());
        self.samples.push(s);
    }
    pub(crate) fn add_observe(&mut self, v: Val) {
        self.observes.push(v);
    }
    pub(crate) fn add_log_p(&mut self, lp: f64) {
        self.log_p = self.log_p.add(LW(lp));
    }
    pub(crate) fn pack_observes(&mut self) {
        self.packed = self.observes.iter().map(Val::as_f64).collect_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(path: &[&str]) -> Address {
        Address::new(
            Position::Counter(0),
            path.iter().map(|s| s.to_string()).collect_vec(),
        )
    }

    #[test]
    fn renders_position_then_path() {
        let a = Address::new(
            Position::Static { line: 12, column: 5 },
            vec!["model".to_string(), "x".to_string()],
        );
        assert_eq!(a.to_string(), "12:5/model.x");
        assert_eq!(addr(&["model", "f"]).to_string(), "#0/model.f");
        assert_eq!(addr(&[]).to_string(), "#0/");
    }

    #[test]
    fn log_p_accumulates() {
        let mut t = Trace::new();
        t.add_log_p(-1.5);
        t.add_log_p(-0.25);
        assert_eq!(t.log_p(), -1.75);
    }

    #[test]
    fn packing_flattens_observations_in_order() {
        let mut t = Trace::new();
        t.add_observe(Val::Float(2.0));
        t.add_observe(Val::Bool(true));
        t.add_observe(Val::Int(3));
        assert!(t.packed_observes().is_empty());
        t.pack_observes();
        assert_eq!(t.packed_observes(), &[2.0, 1.0, 3.0]);
    }

    #[test]
    fn samples_keep_temporal_order() {
        let mut t = Trace::new();
        t.add_sample(Sample::new(addr(&["m", "a"]), Dist::Bern(0.5), Val::Bool(true)));
        t.add_sample(Sample::new(addr(&["m", "b"]), Dist::Bern(0.5), Val::Bool(false)));
        assert_eq!(t.len(), 2);
        assert_eq!(t.last_sample().map(|s| s.address.path_str()), Some("m.b".to_string()));
        assert_eq!(t.get(&addr(&["m", "a"])).map(|s| s.value.clone()), Some(Val::Bool(true)));
        assert_eq!(t.get(&addr(&["m", "c"])), None);
    }

    #[test]
    fn get_returns_the_first_visit() {
        let mut t = Trace::new();
        t.add_sample(Sample::new(addr(&["m", "x"]), Dist::Bern(0.5), Val::Bool(true)));
        t.add_sample(Sample::new(addr(&["m", "x"]), Dist::Bern(0.5), Val::Bool(false)));
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(&addr(&["m", "x"])).map(|s| s.value.clone()), Some(Val::Bool(true)));
    }
}
