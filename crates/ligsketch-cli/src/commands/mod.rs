pub mod analyze;
pub mod build;
pub mod describe;
pub mod profile;
pub mod score;
pub mod screen;

use crate::cli::ReceptorArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use ligsketch::engine::affinity::ReceptorTarget;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Resolves the receptor from command flags, falling back to the configured default.
pub(crate) fn resolve_target(args: &ReceptorArgs, config: &AppConfig) -> Result<ReceptorTarget> {
    let key = args
        .receptor
        .as_deref()
        .or(config.default_receptor.as_deref());
    let sequence = args.sequence.as_deref().map(read_text).transpose()?;
    let target = ReceptorTarget::resolve(key, sequence.as_deref());
    info!("Scoring against {}.", target);
    Ok(target)
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliOverrides, PartialConfig};
    use ligsketch::engine::affinity::ReceptorKind;
    use std::fs;

    fn config_with_default(receptor: Option<&str>) -> AppConfig {
        let set: Vec<String> = receptor
            .map(|r| vec![format!("scoring.receptor={r}")])
            .unwrap_or_default();
        PartialConfig::default()
            .merge_with_cli(&set, CliOverrides::default())
            .unwrap()
    }

    #[test]
    fn flag_receptor_beats_configured_default() {
        let args = ReceptorArgs {
            receptor: Some("tnf-alpha".into()),
            sequence: None,
        };
        let target = resolve_target(&args, &config_with_default(Some("cox-2"))).unwrap();
        assert_eq!(target, ReceptorTarget::Known(ReceptorKind::TnfAlpha));
    }

    #[test]
    fn configured_default_is_used_without_flag() {
        let target = resolve_target(&ReceptorArgs::default(), &config_with_default(Some("cox-2"))).unwrap();
        assert_eq!(target, ReceptorTarget::Known(ReceptorKind::Cox2));
    }

    #[test]
    fn sequence_file_produces_custom_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("target.fasta");
        fs::write(&path, ">sp|P05231|IL6\nMNSFSTSAFG\nPVAFSLGLLL\n").unwrap();
        let args = ReceptorArgs {
            receptor: Some("my-target".into()),
            sequence: Some(path),
        };
        let target = resolve_target(&args, &config_with_default(None)).unwrap();
        assert_eq!(
            target,
            ReceptorTarget::Custom {
                sequence: "MNSFSTSAFGPVAFSLGLLL".into()
            }
        );
    }

    #[test]
    fn missing_sequence_file_is_a_parse_error() {
        let args = ReceptorArgs {
            receptor: None,
            sequence: Some("/nonexistent/ligsketch/seq.fasta".into()),
        };
        let result = resolve_target(&args, &config_with_default(None));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
