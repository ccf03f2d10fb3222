use crate::transition::TransitionRelation;

/// A configuration object for attractor detection algorithms.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttractorConfig {
    /// The relation used for attractor computation.
    pub relation: TransitionRelation,
    /// Cancel the procedure if it tests more than the given number of origin states
    /// (default: `usize::MAX`).
    pub max_iterations: usize,
}

impl From<TransitionRelation> for AttractorConfig {
    fn from(value: TransitionRelation) -> Self {
        AttractorConfig::new(value)
    }
}

impl From<&TransitionRelation> for AttractorConfig {
    fn from(value: &TransitionRelation) -> Self {
        AttractorConfig::new(value.clone())
    }
}

impl AttractorConfig {
    /// Create a new instance of [`AttractorConfig`] from a [`TransitionRelation`].
    pub fn new(relation: TransitionRelation) -> AttractorConfig {
        AttractorConfig {
            relation,
            max_iterations: usize::MAX,
        }
    }
}
