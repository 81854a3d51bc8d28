use crate::data::{log_sum_exp, normalize, LW};
use crate::utils::render::*;
use itertools::*;

/// Weighted results of repeated program runs.
#[derive(Debug, Clone)]
pub struct Empirical<T> {
    pub values: Vec<T>,
    pub log_weights: Vec<LW>,
}
impl<T> Empirical<T> {
    pub fn empty() -> Self {
        Self {
            values: vec![],
            log_weights: vec![],
        }
    }
    pub fn push(&mut self, value: T, lw: LW) {
        self.values.push(value);
        self.log_weights.push(lw);
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn normalized_weights(&self) -> Vec<f64> {
        normalize(&self.log_weights)
    }
    /// self-normalized estimate of E[f]
    pub fn expectation(&self, f: impl Fn(&T) -> f64) -> f64 {
        izip!(&self.values, self.normalized_weights())
            .map(|(v, w)| if w == 0.0 { 0.0 } else { w * f(v) })
            .sum()
    }
    pub fn effective_sample_size(&self) -> f64 {
        let sq: f64 = self.normalized_weights().iter().map(|w| w * w).sum();
        if sq == 0.0 {
            0.0
        } else {
            1.0 / sq
        }
    }
    /// log of the mean importance weight
    pub fn log_evidence(&self) -> LW {
        if self.is_empty() {
            return LW(f64::NEG_INFINITY);
        }
        log_sum_exp(&self.log_weights).sub(LW::new(self.len() as f64))
    }
    pub fn to_str(&self) -> String {
        let lws = self.log_weights.iter().map(LW::val).collect_vec();
        format!(
            "n: {}, ess: {:.2}, log weights: {}",
            self.len(),
            self.effective_sample_size(),
            renderfloats(&lws, false)
        )
    }
}
impl Empirical<f64> {
    pub fn mean(&self) -> f64 {
        self.expectation(|x| *x)
    }
    pub fn variance(&self) -> f64 {
        let mn = self.mean();
        self.expectation(|x| (x - mn) * (x - mn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_weights_give_plain_mean() {
        let mut e = Empirical::empty();
        for x in [1.0, 2.0, 3.0, 6.0] {
            e.push(x, LW(-3.0));
        }
        assert!((e.mean() - 3.0).abs() < 1e-12);
        assert!((e.effective_sample_size() - 4.0).abs() < 1e-9);
        assert!((e.log_evidence().val() + 3.0).abs() < 1e-12);
    }

    #[test]
    fn impossible_runs_do_not_contribute() {
        let mut e = Empirical::empty();
        e.push(10.0, LW(f64::NEG_INFINITY));
        e.push(2.0, LW::new(0.5));
        assert!((e.mean() - 2.0).abs() < 1e-12);
        assert!((e.effective_sample_size() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weights_tilt_the_estimate() {
        let mut e = Empirical::empty();
        e.push(0.0, LW::new(1.0));
        e.push(1.0, LW::new(3.0));
        assert!((e.mean() - 0.75).abs() < 1e-12);
        assert!((e.variance() - 0.1875).abs() < 1e-12);
    }
}
