use std::fmt;

/// a value produced by a random choice or supplied as evidence
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Bool(bool),
    Int(u64),
    Float(f64),
}
impl Val {
    /// numeric view, used when packing observations
    pub fn as_f64(&self) -> f64 {
        match self {
            Val::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Val::Int(i) => *i as f64,
            Val::Float(f) => *f,
        }
    }
    /// view as a point in a discrete support, if it is one
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Val::Bool(b) => Some(*b as u64),
            Val::Int(i) => Some(*i),
            Val::Float(f) if *f >= 0.0 && f.fract() == 0.0 => Some(*f as u64),
            Val::Float(_) => None,
        }
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Val::Bool(b) => Some(*b),
            Val::Int(0) => Some(false),
            Val::Int(1) => Some(true),
            _ => None,
        }
    }
}
impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Bool(x) => write!(f, "{}", x),
            Val::Int(x) => write!(f, "{}", x),
            Val::Float(x) => write!(f, "{}", x),
        }
    }
}
impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::Bool(b)
    }
}
impl From<u64> for Val {
    fn from(i: u64) -> Self {
        Val::Int(i)
    }
}
impl From<f64> for Val {
    fn from(f: f64) -> Self {
        Val::Float(f)
    }
}
impl From<&Val> for f64 {
    fn from(v: &Val) -> f64 {
        v.as_f64()
    }
}
