use std::fmt;
use std::path::Path;

use anyhow::Context;
use tokenweave::{generate as run_generation, ArtifactKind, ArtifactSet, GeneratorConfig, IndexManifest, TokenGraph};

use crate::GenerationArgs;

pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// What a command did, printed on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub style_sheets: usize,
    pub typed_lists: usize,
    pub plain_lists: usize,
    pub manifest: bool,
    /// Where files went; `None` for a dry run.
    pub written_to: Option<String>,
}

impl Summary {
    fn of(artifacts: &ArtifactSet, written_to: Option<&Path>) -> Self {
        Self {
            style_sheets: artifacts.count(ArtifactKind::VariableSheet) + artifacts.count(ArtifactKind::UtilitySheet),
            typed_lists: artifacts.count(ArtifactKind::TypedNames),
            plain_lists: artifacts.count(ArtifactKind::PlainNames),
            manifest: artifacts.count(ArtifactKind::Manifest) > 0,
            written_to: written_to.map(|p| p.display().to_string()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} style sheets, {} typed lists, {} name lists",
            self.style_sheets, self.typed_lists, self.plain_lists
        )?;
        if self.manifest {
            write!(f, ", index.css")?;
        }
        match &self.written_to {
            Some(dir) => write!(f, " written to {}", dir),
            None => write!(f, " (nothing written)"),
        }
    }
}

/// Loads the config file (if any) and applies command-line overrides on top.
pub fn load_config(args: &GenerationArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(policy) = args.policy()? {
        config = config.with_unresolved(policy);
    }
    if args.legacy_property_derivation {
        config = config.with_legacy_property_derivation(true);
    }
    if args.no_index {
        config = config.with_index_manifest(false);
    }
    if args.no_global_aggregates {
        config = config.with_global_aggregates(false);
    }

    Ok(config)
}

fn build(args: &GenerationArgs) -> anyhow::Result<ArtifactSet> {
    let config = load_config(args)?;
    let graph = TokenGraph::from_file(&args.input)?;
    if graph.is_empty() {
        log::warn!("{} defines no tokens", args.input.display());
    }
    run_generation(&graph, &config).with_context(|| format!("generation from {} aborted", args.input.display()))
}

pub fn generate(args: &GenerationArgs, output: &Path) -> anyhow::Result<Summary> {
    let artifacts = build(args)?;
    artifacts.write_to(output)?;
    Ok(Summary::of(&artifacts, Some(output)))
}

pub fn check(args: &GenerationArgs) -> anyhow::Result<Summary> {
    let artifacts = build(args)?;
    Ok(Summary::of(&artifacts, None))
}

pub fn index(dir: &Path) -> anyhow::Result<Summary> {
    let manifest = IndexManifest::scan(dir)?;
    manifest.write_to(dir)?;
    Ok(Summary {
        style_sheets: manifest.imports().len(),
        typed_lists: 0,
        plain_lists: 0,
        manifest: true,
        written_to: Some(dir.display().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const TOKENS: &str = r##"
primitives:
  core:
    colors:
      gray150: { light: "#e9e9eb", dark: "#2e2e2e" }
semanticTokens:
  core:
    background:
      secondary: "{core.colors.gray150}"
utilityClasses:
  core:
    background:
      prefix: background
      property: background-color
      tokens: "{semanticTokens.core.background}"
    ghost:
      prefix: ghost
      property: color
      tokens: "{semanticTokens.core.ghost}"
"##;

    fn args(input: PathBuf) -> GenerationArgs {
        GenerationArgs {
            input,
            config: None,
            on_unresolved: None,
            legacy_property_derivation: false,
            no_index: false,
            no_global_aggregates: false,
        }
    }

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("tokens.yaml");
        std::fs::write(&input, TOKENS).unwrap();
        (dir, input)
    }

    #[test]
    fn test_generate_writes_tree() {
        let (dir, input) = setup();
        let out = dir.path().join("dist");

        let summary = generate(&args(input), &out).unwrap();

        assert_eq!(summary.style_sheets, 3);
        assert!(summary.manifest);
        assert!(out.join("css/utils/core/background.css").exists());
        assert!(out.join("index.css").exists());
        assert!(!out.join("css/utils/core/ghost.css").exists());
    }

    #[test]
    fn test_check_writes_nothing() {
        let (dir, input) = setup();

        let summary = check(&args(input)).unwrap();

        assert_eq!(summary.written_to, None);
        assert_eq!(summary.typed_lists, 9);
        assert!(!dir.path().join("css").exists());
        assert!(summary.to_string().ends_with("(nothing written)"));
    }

    #[test]
    fn test_fail_policy_flag() {
        let (dir, input) = setup();
        let mut a = args(input);
        a.on_unresolved = Some("fail".into());

        let err = generate(&a, &dir.path().join("dist")).unwrap_err();

        assert!(format!("{:#}", err).contains("{semanticTokens.core.ghost}"));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_flags_override_config_file() {
        let (dir, input) = setup();
        let config = dir.path().join("tokenweave.yaml");
        std::fs::write(&config, "unresolved: fail\nindex_manifest: true\n").unwrap();

        let mut a = args(input);
        a.config = Some(config);
        a.on_unresolved = Some("emit-empty".into());
        a.no_index = true;
        a.no_global_aggregates = true;

        let loaded = load_config(&a).unwrap();
        assert_eq!(loaded.unresolved, tokenweave::UnresolvedPolicy::EmitEmpty);
        assert!(!loaded.index_manifest);
        assert!(!loaded.global_aggregates);

        let summary = check(&a).unwrap();
        assert_eq!(summary.style_sheets, 4);
        assert!(!summary.manifest);
    }

    #[test]
    fn test_index_rebuilds_manifest() {
        let (dir, input) = setup();
        let out = dir.path().join("dist");
        let mut a = args(input);
        a.no_index = true;
        generate(&a, &out).unwrap();
        assert!(!out.join("index.css").exists());

        let summary = index(&out).unwrap();

        assert_eq!(summary.style_sheets, 3);
        let manifest = std::fs::read_to_string(out.join("index.css")).unwrap();
        assert!(manifest.contains("@import './css/variables/core/colors.css';\n"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(check(&args(dir.path().join("nope.yaml"))).is_err());
    }
}
