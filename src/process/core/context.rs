//! Generation context — the strategy and source data handed to a process.
//!
//! Processes hold no strategy of their own. Every call that needs parameters
//! or a fresh level receives a [`GenerationContext`] borrowing the active
//! strategy and the optional per-series source vector.
use crate::parameters::{linspace::LinspaceInfo, methods::ParametersGenerationMethod};

/// GenerationContext — borrowed strategy plus optional source data.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub method: &'a dyn ParametersGenerationMethod,
    pub source_data: Option<&'a [f64]>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(method: &'a dyn ParametersGenerationMethod, source_data: Option<&'a [f64]>) -> Self {
        GenerationContext { method, source_data }
    }

    /// Range descriptor of the active strategy.
    pub fn linspace(&self) -> &'a LinspaceInfo {
        self.method.linspace()
    }
}

impl std::fmt::Debug for GenerationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationContext")
            .field("method", &self.method.name())
            .field("source_data", &self.source_data)
            .finish()
    }
}
