//! Application state and dependency injection.

use examforge_core::ExerciseGenerationService;
use examforge_core::exercise::DEFAULT_REQUIREMENTS;
use examforge_core::service::DEFAULT_TOPIC;

/// Values used when an upload omits a generation option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationDefaults {
    /// Topic used when the form has no `topic`.
    pub topic: String,
    /// Writing requirements used when the form has no `requirements`.
    pub requirements: String,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_owned(),
            requirements: DEFAULT_REQUIREMENTS.to_owned(),
        }
    }
}

impl GenerationDefaults {
    /// Replaces the default writing requirements.
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }
}

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). Built once at
/// startup and never mutated.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub generation: ExerciseGenerationService,
    pub defaults: GenerationDefaults,
}

impl ServiceState {
    /// Creates the state with default generation options.
    pub fn new(generation: ExerciseGenerationService) -> Self {
        Self {
            generation,
            defaults: GenerationDefaults::default(),
        }
    }

    /// Replaces the generation defaults.
    pub fn with_defaults(mut self, defaults: GenerationDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(generation: ExerciseGenerationService);
impl_di!(defaults: GenerationDefaults);
