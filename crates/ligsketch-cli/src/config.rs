use crate::error::{CliError, Result};
use ligsketch::core::io::format::StructureFormat;
use ligsketch::engine::config::{ModelingConfig, ModelingConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialRelaxationConfig {
    iterations: Option<usize>,
    spring_constant: Option<f64>,
    single_bond_length: Option<f64>,
    double_bond_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialAnalysisConfig {
    contact_cutoff: Option<f64>,
    max_interactions: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialScoringConfig {
    receptor: Option<String>,
    format: Option<String>,
}

/// Configuration as read from a TOML file; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    relaxation: Option<PartialRelaxationConfig>,
    analysis: Option<PartialAnalysisConfig>,
    scoring: Option<PartialScoringConfig>,
}

/// Per-command flags that take precedence over the file and `--set` values.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub contact_cutoff: Option<f64>,
    pub max_interactions: Option<usize>,
}

/// Fully merged settings handed to the commands.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub modeling: ModelingConfig,
    /// Receptor used when a command does not name one.
    pub default_receptor: Option<String>,
    pub default_format: StructureFormat,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the file when one is given, otherwise starts from built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, set_values: &[String], overrides: CliOverrides) -> Result<AppConfig> {
        self.apply_set_values(set_values)?;

        let relaxation = self.relaxation.take().unwrap_or_default();
        let analysis = self.analysis.take().unwrap_or_default();
        let scoring = self.scoring.take().unwrap_or_default();

        let mut builder = ModelingConfigBuilder::new();
        if let Some(v) = relaxation.iterations {
            builder = builder.iterations(v);
        }
        if let Some(v) = relaxation.spring_constant {
            builder = builder.spring_constant(v);
        }
        if let Some(v) = relaxation.single_bond_length {
            builder = builder.single_bond_length(v);
        }
        if let Some(v) = relaxation.double_bond_length {
            builder = builder.double_bond_length(v);
        }
        if let Some(v) = overrides.contact_cutoff.or(analysis.contact_cutoff) {
            builder = builder.contact_cutoff(v);
        }
        if let Some(v) = overrides.max_interactions.or(analysis.max_interactions) {
            builder = builder.max_interactions(v);
        }
        let modeling = builder.build().map_err(|e| CliError::Config(e.to_string()))?;

        let default_format = match scoring.format.as_deref() {
            Some(name) => StructureFormat::from_str(name).map_err(CliError::Config)?,
            None => StructureFormat::default(),
        };

        Ok(AppConfig {
            modeling,
            default_receptor: scoring.receptor,
            default_format,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "relaxation.iterations" => {
                    self.relaxation
                        .get_or_insert_with(Default::default)
                        .iterations = Some(parse_value(key, value_str)?);
                }
                "relaxation.spring-constant" => {
                    self.relaxation
                        .get_or_insert_with(Default::default)
                        .spring_constant = Some(parse_value(key, value_str)?);
                }
                "relaxation.single-bond-length" => {
                    self.relaxation
                        .get_or_insert_with(Default::default)
                        .single_bond_length = Some(parse_value(key, value_str)?);
                }
                "relaxation.double-bond-length" => {
                    self.relaxation
                        .get_or_insert_with(Default::default)
                        .double_bond_length = Some(parse_value(key, value_str)?);
                }
                "analysis.contact-cutoff" => {
                    self.analysis
                        .get_or_insert_with(Default::default)
                        .contact_cutoff = Some(parse_value(key, value_str)?);
                }
                "analysis.max-interactions" => {
                    self.analysis
                        .get_or_insert_with(Default::default)
                        .max_interactions = Some(parse_value(key, value_str)?);
                }
                "scoring.receptor" => {
                    self.scoring.get_or_insert_with(Default::default).receptor =
                        Some(value_str.to_string());
                }
                "scoring.format" => {
                    self.scoring.get_or_insert_with(Default::default).format =
                        Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value)))
}
