use serde::{Deserialize, Serialize};

/// Implementation used to scan the open bins while placing an item.
/// Both backends produce identical solutions, including tie-breaking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Sequential scan over the bins
    #[default]
    Scalar,
    /// Parallel reduction over the bins (requires the `parallel` feature, otherwise falls back to [`Backend::Scalar`])
    Parallel,
}

impl Backend {
    /// Returns the backend which will effectively be used given the enabled features.
    pub fn effective(self) -> Self {
        match self {
            Backend::Scalar => Backend::Scalar,
            #[cfg(feature = "parallel")]
            Backend::Parallel => Backend::Parallel,
            #[cfg(not(feature = "parallel"))]
            Backend::Parallel => {
                log::warn!("parallel backend requested, but the `parallel` feature is disabled");
                Backend::Scalar
            }
        }
    }
}
