//! SA configuration.

/// Configuration for the Simulated Annealing loop.
///
/// There are no hidden defaults: [`SaConfig::new`] takes every search
/// parameter explicitly. [`SaConfig::presets`] lists a ladder of
/// parameter sets, from fast to thorough.
///
/// # Examples
///
/// ```
/// use u_binpack::sa::SaConfig;
///
/// let config = SaConfig::new(1000.0, 0.8, 100, 5).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature `T0`. Higher values allow more uphill moves.
    pub initial_temperature: f64,

    /// Geometric cooling ratio `r` in (0, 1): `T_{k+1} = r * T_k`.
    pub cooling_ratio: f64,

    /// Number of neighbor evaluations `L` at each temperature.
    pub steps_per_temperature: usize,

    /// Number `E` of consecutive temperature phases that leave the
    /// solution unchanged before the search stops.
    pub stall_limit: usize,

    /// Maximum total neighbor evaluations (hard budget). 0 = no limit.
    ///
    /// Neutral moves are always accepted, so a chain that keeps finding
    /// equal-cost rearrangements may stall only after a long time.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SaConfig {
    pub fn new(
        initial_temperature: f64,
        cooling_ratio: f64,
        steps_per_temperature: usize,
        stall_limit: usize,
    ) -> Self {
        Self {
            initial_temperature,
            cooling_ratio,
            steps_per_temperature,
            stall_limit,
            max_iterations: 0,
            seed: None,
        }
    }

    /// Five parameter sets of increasing effort.
    pub fn presets() -> [SaConfig; 5] {
        [
            SaConfig::new(1000.0, 0.8, 100, 5),
            SaConfig::new(2000.0, 0.83, 200, 10),
            SaConfig::new(3000.0, 0.87, 300, 15),
            SaConfig::new(4000.0, 0.92, 400, 20),
            SaConfig::new(5000.0, 0.99, 500, 25),
        ]
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_ratio(mut self, r: f64) -> Self {
        self.cooling_ratio = r;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_stall_limit(mut self, n: usize) -> Self {
        self.stall_limit = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if !(self.cooling_ratio > 0.0 && self.cooling_ratio < 1.0) {
            return Err(format!(
                "cooling_ratio must be in (0, 1), got {}",
                self.cooling_ratio
            ));
        }
        if self.steps_per_temperature == 0 {
            return Err("steps_per_temperature must be at least 1".into());
        }
        if self.stall_limit == 0 {
            return Err("stall_limit must be at least 1".into());
        }
        Ok(())
    }
}
