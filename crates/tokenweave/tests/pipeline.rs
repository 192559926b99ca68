use std::path::PathBuf;

use tempfile::TempDir;
use tokenweave::{
    generate, ArtifactKind, ArtifactSet, GenerateError, GeneratorConfig, IndexManifest, Tier, TokenGraph,
    UnresolvedPolicy,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/design-tokens.yaml")
}

fn fixture_artifacts() -> ArtifactSet {
    let graph = TokenGraph::from_file(fixture()).unwrap();
    generate(&graph, &GeneratorConfig::default()).unwrap()
}

fn contents<'a>(set: &'a ArtifactSet, path: &str) -> &'a str {
    &set.get(path).unwrap_or_else(|| panic!("missing artifact {}", path)).contents
}

/// Extracts the JSON array literal of a names or types file.
fn literal(text: &str) -> Vec<String> {
    let start = text.find("= [").expect("no literal") + 2;
    let end = text[start..].find(']').expect("unterminated literal") + start + 1;
    serde_json::from_str(&text[start..end]).unwrap()
}

// =============================================================================
// Full fixture
// =============================================================================

#[test]
fn test_fixture_artifact_counts() {
    let set = fixture_artifacts();

    assert_eq!(set.count(ArtifactKind::VariableSheet), 10);
    assert_eq!(set.count(ArtifactKind::UtilitySheet), 7);
    assert_eq!(set.count(ArtifactKind::TypedNames), 29);
    assert_eq!(set.count(ArtifactKind::PlainNames), 29);
    assert_eq!(set.count(ArtifactKind::Manifest), 1);
    assert_eq!(set.len(), 76);
}

#[test]
fn test_fixture_primitive_pair() {
    let set = fixture_artifacts();
    let css = contents(&set, "css/variables/groww-primary/colors.css");

    assert_eq!(
        css,
        "html {\n  --black: #121212;\n  --white: #ffffff;\n  --gray150: #e9e9eb;\n}\n\n\
         html[data-theme=\"dark\"] {\n  --black: #121212;\n  --white: #ffffff;\n  --gray150: #2e2e2e;\n}\n"
    );
}

#[test]
fn test_fixture_semantic_references_are_shallow() {
    let set = fixture_artifacts();
    let css = contents(&set, "css/tokens/data-viz/background.css");

    assert_eq!(
        css,
        "html {\n  --background-data-viz-lilac: var(--data-viz-lilac);\n  \
         --background-data-viz-blue: var(--data-viz-blue);\n}\n\n\
         html[data-theme=\"dark\"] {\n  --background-data-viz-lilac: var(--data-viz-lilac);\n  \
         --background-data-viz-blue: var(--data-viz-blue);\n}\n"
    );
}

#[test]
fn test_fixture_hover_utilities_use_interaction_variables() {
    let set = fixture_artifacts();

    assert_eq!(
        contents(&set, "css/utils/groww-primary/interaction-hover.css"),
        ".backgroundBackgroundHover:hover { background-color: var(--interaction-background-hover); }\n\n"
    );
    assert_eq!(
        contents(&set, "css/utils/groww-primary/border.css"),
        ".borderPrimary { border: 1px solid var(--border-primary); }\n\n"
    );
}

#[test]
fn test_fixture_utility_names() {
    let set = fixture_artifacts();
    let typed = contents(&set, "ts/utils/groww-primary/interaction-hover-types.d.ts");

    assert!(typed.starts_with("// Auto-generated types for groww-primary utility classes (interactionHover)\n"));
    assert!(typed.contains("export const growwprimaryInteractionHoverUtilityClasses = ["));
    assert!(typed.contains(
        "export type growwprimaryInteractionHoverUtilityClass = typeof growwprimaryInteractionHoverUtilityClasses[number];"
    ));
    assert_eq!(literal(typed), ["backgroundBackgroundHover"]);
}

#[test]
fn test_fixture_global_aggregates() {
    let set = fixture_artifacts();

    assert_eq!(
        literal(contents(&set, "names/variables/primitives-names.js")),
        [
            "black",
            "data-viz-blue",
            "data-viz-lilac",
            "gray150",
            "temp-nbt-blue",
            "temp-nbt-pink",
            "white"
        ]
    );
    assert_eq!(
        literal(contents(&set, "ts/utils/utils-types.d.ts")),
        [
            "backgroundBackgroundHover",
            "backgroundDataVizBlue",
            "backgroundDataVizLilac",
            "backgroundPrimary",
            "backgroundSecondary",
            "backgroundTempNbtBlue",
            "backgroundTempNbtPink",
            "borderPrimary"
        ]
    );
}

#[test]
fn test_typed_and_plain_lists_agree_everywhere() {
    let set = fixture_artifacts();

    for typed in set.iter().filter(|a| a.kind == ArtifactKind::TypedNames) {
        let plain_path = typed
            .path
            .replacen("ts/", "names/", 1)
            .replace("-types.d.ts", "-names.js");
        let plain = contents(&set, &plain_path);
        assert_eq!(literal(&typed.contents), literal(plain), "{} vs {}", typed.path, plain_path);
    }
}

#[test]
fn test_group_aggregate_is_union_of_categories() {
    let set = fixture_artifacts();

    let mut expected: Vec<String> = ["background", "border", "interaction"]
        .iter()
        .flat_map(|c| literal(contents(&set, &format!("names/tokens/groww-primary/{}-names.js", c))))
        .collect();
    expected.sort();
    expected.dedup();

    assert_eq!(literal(contents(&set, "names/tokens/groww-primary/tokens-names.js")), expected);
}

#[test]
fn test_every_artifact_is_tagged_with_its_tier() {
    let set = fixture_artifacts();

    for artifact in &set {
        match artifact.tier {
            Some(Tier::Primitives) => assert!(artifact.path.contains("/variables/")),
            Some(Tier::SemanticTokens) => assert!(artifact.path.contains("/tokens/")),
            Some(Tier::UtilityClasses) => assert!(artifact.path.contains("/utils/")),
            None => assert_eq!(artifact.path, "index.css"),
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    assert_eq!(fixture_artifacts(), fixture_artifacts());
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_write_and_rescan_manifest() {
    let dir = TempDir::new().unwrap();
    let set = fixture_artifacts();
    let written = set.write_to(dir.path()).unwrap();
    assert_eq!(written.len(), set.len());

    let index = std::fs::read_to_string(dir.path().join("index.css")).unwrap();
    assert_eq!(index, contents(&set, "index.css"));

    let mut scanned = IndexManifest::scan(dir.path()).unwrap().imports().to_vec();
    let mut emitted = IndexManifest::from_artifacts(&set).imports().to_vec();
    scanned.sort();
    emitted.sort();
    assert_eq!(scanned, emitted);
}

#[test]
fn test_second_write_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let set = fixture_artifacts();
    let target = dir.path().join("css/variables/data-viz/colors.css");

    set.write_to(dir.path()).unwrap();
    let first = std::fs::read(&target).unwrap();
    fixture_artifacts().write_to(dir.path()).unwrap();
    let second = std::fs::read(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_fatal_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let graph = TokenGraph::from_yaml(
        r##"
primitives:
  core:
    colors:
      white: "#fff"
utilityClasses:
  core:
    text:
      prefix: text
      tokens: "{primitives.core.colors}"
"##,
    )
    .unwrap();

    let result = generate(&graph, &GeneratorConfig::default()).and_then(|set| {
        set.write_to(dir.path()).unwrap();
        Ok(set)
    });

    assert!(matches!(result, Err(GenerateError::MissingProperty { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_fail_policy_aborts_whole_run() {
    let graph = TokenGraph::from_yaml(
        r##"
primitives:
  core:
    colors:
      white: "#fff"
utilityClasses:
  core:
    background:
      prefix: background
      property: background-color
      tokens: "{semanticTokens.core.background}"
"##,
    )
    .unwrap();

    let config = GeneratorConfig::default().with_unresolved(UnresolvedPolicy::Fail);
    assert!(matches!(
        generate(&graph, &config),
        Err(GenerateError::UnresolvedReference { .. })
    ));

    let skipped = generate(&graph, &GeneratorConfig::default()).unwrap();
    assert_eq!(skipped.count(ArtifactKind::UtilitySheet), 0);
    assert_eq!(skipped.count(ArtifactKind::VariableSheet), 1);
}

#[test]
fn test_config_file_drives_generation() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("tokenweave.yaml");
    std::fs::write(
        &config_path,
        "theme:\n  default_selector: ':root'\nindex_manifest: false\nglobal_aggregates: false\n",
    )
    .unwrap();

    let config = GeneratorConfig::from_file(&config_path).unwrap();
    let graph = TokenGraph::from_file(fixture()).unwrap();
    let set = generate(&graph, &config).unwrap();

    assert!(set.get("index.css").is_none());
    assert!(set.get("ts/variables/primitives-types.d.ts").is_none());
    assert!(contents(&set, "css/variables/temporary/colors.css").starts_with(":root {\n"));
}
