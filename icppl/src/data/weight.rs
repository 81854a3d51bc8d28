use itertools::*;

/// a weight in log space
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct LW(pub f64);
impl LW {
    pub fn val(&self) -> f64 {
        self.0
    }
    pub fn exp(&self) -> f64 {
        self.val().exp()
    }
    pub fn new(p: f64) -> Self {
        Self(p.ln())
    }
    pub fn add(&self, o: Self) -> Self {
        Self(self.0 + o.0)
    }
    pub fn sub(&self, o: Self) -> Self {
        Self(self.0 - o.0)
    }
    pub fn is_impossible(&self) -> bool {
        self.0 == f64::NEG_INFINITY
    }
    pub fn log_render(&self) -> String {
        format!("LW(log_weight={:.6})", self.val())
    }
}
impl Default for LW {
    fn default() -> Self {
        Self(0.0)
    }
}

/// log(∑ exp(w)), stable against overflow. Empty or all-impossible inputs are impossible.
pub fn log_sum_exp(ws: &[LW]) -> LW {
    let mx = ws
        .iter()
        .map(LW::val)
        .fold(f64::NEG_INFINITY, f64::max);
    if mx == f64::NEG_INFINITY {
        return LW(f64::NEG_INFINITY);
    }
    let s: f64 = ws.iter().map(|w| (w.val() - mx).exp()).sum();
    LW(mx + s.ln())
}

/// normalize log weights into probabilities that sum to one
pub fn normalize(ws: &[LW]) -> Vec<f64> {
    let total = log_sum_exp(ws);
    if total.is_impossible() {
        return ws.iter().map(|_| 0.0).collect_vec();
    }
    ws.iter().map(|w| w.sub(total).exp()).collect_vec()
}
