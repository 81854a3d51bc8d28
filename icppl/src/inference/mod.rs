pub mod empirical;
pub mod importance_weighting;
pub use crate::inference::empirical::*;
pub use crate::inference::importance_weighting::*;
