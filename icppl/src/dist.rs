use crate::data::errors;
use crate::data::{Result, Val};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::{Continuous, Discrete};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Dist {
    Bern(f64),
    Discrete(Vec<f64>),
    Uniform(f64, f64),
    Normal(f64, f64),
    Poisson(f64),
    Beta(f64, f64),
}

fn ln_pmf_at<D: Discrete<u64, f64>>(dist: &D, v: &Val) -> f64 {
    match v.as_index() {
        Some(k) => dist.ln_pmf(k),
        None => f64::NEG_INFINITY,
    }
}

impl Dist {
    pub fn sample(&self, rng: &mut StdRng) -> Result<Val> {
        use statrs::distribution as sd;
        let v = match self {
            Dist::Bern(p) => {
                let d = sd::Bernoulli::new(*p)?;
                Val::Bool(d.sample(rng) == 1.0)
            }
            Dist::Discrete(ps) => {
                let d = sd::Categorical::new(ps)?;
                Val::Int(d.sample(rng) as u64)
            }
            Dist::Uniform(lo, hi) => Val::Float(sd::Uniform::new(*lo, *hi)?.sample(rng)),
            Dist::Normal(mn, std_dev) => Val::Float(sd::Normal::new(*mn, *std_dev)?.sample(rng)),
            Dist::Poisson(l) => {
                let d = sd::Poisson::new(*l)?;
                Val::Int(d.sample(rng) as u64)
            }
            Dist::Beta(a, b) => Val::Float(sd::Beta::new(*a, *b)?.sample(rng)),
        };
        Ok(v)
    }

    /// Log density (or mass) of `v`. Values outside a discrete support score -inf.
    pub fn log_pdf(&self, v: &Val) -> Result<f64> {
        use statrs::distribution as sd;
        let lp = match self {
            Dist::Bern(p) => match v.as_bool() {
                Some(b) => sd::Bernoulli::new(*p)?.ln_pmf(b as u64),
                None => ln_pmf_at(&sd::Bernoulli::new(*p)?, v),
            },
            Dist::Discrete(ps) => ln_pmf_at(&sd::Categorical::new(ps)?, v),
            Dist::Poisson(l) => ln_pmf_at(&sd::Poisson::new(*l)?, v),
            Dist::Uniform(lo, hi) => sd::Uniform::new(*lo, *hi)?.ln_pdf(Self::continuous(v)?),
            Dist::Normal(mn, std_dev) => sd::Normal::new(*mn, *std_dev)?.ln_pdf(Self::continuous(v)?),
            Dist::Beta(a, b) => sd::Beta::new(*a, *b)?.ln_pdf(Self::continuous(v)?),
        };
        Ok(lp)
    }

    fn continuous(v: &Val) -> Result<f64> {
        match v {
            Val::Float(f) => Ok(*f),
            Val::Int(i) => Ok(*i as f64),
            Val::Bool(_) => errors::invalid_dist("boolean value scored against a continuous density"),
        }
    }
}

impl fmt::Display for Dist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dist::Bern(p) => write!(f, "bern({})", p),
            Dist::Discrete(ps) => write!(f, "discrete({:?})", ps),
            Dist::Uniform(lo, hi) => write!(f, "uniform({}, {})", lo, hi),
            Dist::Normal(mn, sd) => write!(f, "normal({}, {})", mn, sd),
            Dist::Poisson(l) => write!(f, "poisson({})", l),
            Dist::Beta(a, b) => write!(f, "beta({}, {})", a, b),
        }
    }
}
