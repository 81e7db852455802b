use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{parameter}': {value} ({reason})")]
    InvalidValue {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Tunables of the damped spring relaxation.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxationConfig {
    /// Fixed number of sweeps over all bonds; there is no convergence check.
    pub iterations: usize,
    pub spring_constant: f64,
    pub single_bond_length: f64,
    pub double_bond_length: f64,
}

impl Default for RelaxationConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            spring_constant: 0.1,
            single_bond_length: 1.54,
            double_bond_length: 1.34,
        }
    }
}

/// Tunables of the geometric interaction analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Pairs farther apart than this (Å) are never considered.
    pub contact_cutoff: f64,
    pub max_interactions: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            contact_cutoff: 5.0,
            max_interactions: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelingConfig {
    pub relaxation: RelaxationConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Default)]
pub struct ModelingConfigBuilder {
    iterations: Option<usize>,
    spring_constant: Option<f64>,
    single_bond_length: Option<f64>,
    double_bond_length: Option<f64>,
    contact_cutoff: Option<f64>,
    max_interactions: Option<usize>,
}

impl ModelingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn spring_constant(mut self, k: f64) -> Self {
        self.spring_constant = Some(k);
        self
    }
    pub fn single_bond_length(mut self, length: f64) -> Self {
        self.single_bond_length = Some(length);
        self
    }
    pub fn double_bond_length(mut self, length: f64) -> Self {
        self.double_bond_length = Some(length);
        self
    }
    pub fn contact_cutoff(mut self, cutoff: f64) -> Self {
        self.contact_cutoff = Some(cutoff);
        self
    }
    pub fn max_interactions(mut self, n: usize) -> Self {
        self.max_interactions = Some(n);
        self
    }

    /// Builds the configuration, filling unset values with the calibrated defaults.
    pub fn build(self) -> Result<ModelingConfig, ConfigError> {
        let relaxation_defaults = RelaxationConfig::default();
        let analysis_defaults = AnalysisConfig::default();

        let relaxation = RelaxationConfig {
            iterations: self.iterations.unwrap_or(relaxation_defaults.iterations),
            spring_constant: positive(
                "spring_constant",
                self.spring_constant
                    .unwrap_or(relaxation_defaults.spring_constant),
            )?,
            single_bond_length: positive(
                "single_bond_length",
                self.single_bond_length
                    .unwrap_or(relaxation_defaults.single_bond_length),
            )?,
            double_bond_length: positive(
                "double_bond_length",
                self.double_bond_length
                    .unwrap_or(relaxation_defaults.double_bond_length),
            )?,
        };
        if relaxation.spring_constant > 1.0 {
            return Err(ConfigError::InvalidValue {
                parameter: "spring_constant",
                value: relaxation.spring_constant,
                reason: "must not exceed 1.0",
            });
        }

        let analysis = AnalysisConfig {
            contact_cutoff: positive(
                "contact_cutoff",
                self.contact_cutoff
                    .unwrap_or(analysis_defaults.contact_cutoff),
            )?,
            max_interactions: self
                .max_interactions
                .unwrap_or(analysis_defaults.max_interactions),
        };

        Ok(ModelingConfig {
            relaxation,
            analysis,
        })
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            parameter,
            value,
            reason: "must be a positive finite number",
        })
    }
}
