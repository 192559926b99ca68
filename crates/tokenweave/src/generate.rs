//! The generation pipeline: token graph in, artifact set out.
//!
//! Each tier is walked group by group. Every category produces a style sheet
//! plus a typed/plain name pair built from the identifiers the style sheet
//! declared. Categories are then unioned into a group aggregate, and groups
//! into a global aggregate.
//!
//! Nothing is written here. A fatal condition (missing `property`, or an
//! unresolved utility collection under [`UnresolvedPolicy::Fail`]) returns an
//! error before a single artifact exists.

use std::collections::HashSet;

use crate::config::{GeneratorConfig, UnresolvedPolicy};
use crate::emit::{
    derive_property, emit_utility_sheet, emit_variable_sheet, render_plain, render_typed, ExportNames, NameList,
    UtilityTarget,
};
use crate::error::GenerateError;
use crate::graph::{Category, TokenGraph, TokenGroups, UtilitySpec, UtilityTokens};
use crate::layout::{self, Tier};
use crate::manifest::IndexManifest;
use crate::naming::to_delimited;
use crate::output::{Artifact, ArtifactKind, ArtifactSet};
use crate::reference::{resolve_graph, Namespace, Resolution};

/// Runs the full pipeline with the given configuration.
///
/// ```rust
/// use tokenweave::{generate, GeneratorConfig, TokenGraph};
///
/// let graph = TokenGraph::from_yaml(r##"
/// primitives:
///   core:
///     colors:
///       gray150: { light: "#e9e9eb", dark: "#2e2e2e" }
/// "##).unwrap();
///
/// let artifacts = generate(&graph, &GeneratorConfig::default()).unwrap();
/// let css = &artifacts.get("css/variables/core/colors.css").unwrap().contents;
/// assert!(css.contains("--gray150: #e9e9eb;"));
/// assert!(css.contains("--gray150: #2e2e2e;"));
/// ```
pub fn generate(graph: &TokenGraph, config: &GeneratorConfig) -> Result<ArtifactSet, GenerateError> {
    Generator::new(graph, config).run()
}

/// One category's rendered style sheet and its identifiers.
#[derive(Debug, Clone)]
struct CategoryOutput {
    name: String,
    kind: ArtifactKind,
    css: String,
    names: NameList,
}

#[derive(Debug, Clone)]
struct GroupOutput {
    name: String,
    categories: Vec<CategoryOutput>,
}

impl GroupOutput {
    fn names(&self) -> NameList {
        NameList::union(self.categories.iter().map(|c| &c.names))
    }
}

/// Pipeline state shared across tiers.
pub struct Generator<'g> {
    graph: &'g TokenGraph,
    config: &'g GeneratorConfig,
    defined: HashSet<String>,
}

impl<'g> Generator<'g> {
    pub fn new(graph: &'g TokenGraph, config: &'g GeneratorConfig) -> Self {
        Self {
            graph,
            config,
            defined: graph.defined_variables(),
        }
    }

    /// Builds every artifact in memory.
    pub fn run(&self) -> Result<ArtifactSet, GenerateError> {
        let mut artifacts = ArtifactSet::new();

        for tier in Tier::ALL {
            let groups = self.tier(tier)?;
            self.push_tier(tier, &groups, &mut artifacts);
        }

        if self.config.index_manifest {
            artifacts.push(IndexManifest::from_artifacts(&artifacts).to_artifact());
        }

        Ok(artifacts)
    }

    fn tier(&self, tier: Tier) -> Result<Vec<GroupOutput>, GenerateError> {
        match tier {
            Tier::Primitives => Ok(self.variable_groups(self.graph.primitives(), false)),
            Tier::SemanticTokens => Ok(self.variable_groups(self.graph.semantic_tokens(), true)),
            Tier::UtilityClasses => self.utility_groups(),
        }
    }

    fn variable_groups(&self, groups: &TokenGroups, stem_by_category: bool) -> Vec<GroupOutput> {
        groups
            .iter()
            .map(|(group, categories)| GroupOutput {
                name: group.clone(),
                categories: categories
                    .iter()
                    .map(|(category, tokens)| {
                        let stem = stem_by_category.then_some(category.as_str());
                        let sheet = emit_variable_sheet(tokens, stem, &self.defined);
                        log::debug!("{} {}: {} variables", group, category, sheet.default_block().len());
                        CategoryOutput {
                            name: category.clone(),
                            kind: ArtifactKind::VariableSheet,
                            css: sheet.render(&self.config.theme),
                            names: NameList::new(sheet.identifiers()),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    fn utility_groups(&self) -> Result<Vec<GroupOutput>, GenerateError> {
        let mut out = Vec::with_capacity(self.graph.utility_classes().len());

        for (group, utilities) in self.graph.utility_classes() {
            let mut categories = Vec::with_capacity(utilities.len());
            for (utility, spec) in utilities {
                if let Some(category) = self.utility_category(group, utility, spec)? {
                    categories.push(category);
                }
            }
            out.push(GroupOutput {
                name: group.clone(),
                categories,
            });
        }

        Ok(out)
    }

    fn utility_category(
        &self,
        group: &str,
        utility: &str,
        spec: &UtilitySpec,
    ) -> Result<Option<CategoryOutput>, GenerateError> {
        let property = self.property_for(group, utility, spec)?;

        let source = match &spec.tokens {
            UtilityTokens::Inline(tokens) => Some((tokens, Some(to_delimited(&spec.prefix)))),
            UtilityTokens::Reference(reference) => match resolve_graph(reference, self.graph) {
                Resolution::Resolved(found) => {
                    let stem = match found.namespace {
                        Namespace::SemanticTokens => Some(to_delimited(found.category)),
                        Namespace::Primitives => None,
                    };
                    Some((found.tokens, stem))
                }
                Resolution::Unresolved => None,
            },
            UtilityTokens::Literal(_) => None,
        };

        let empty = Category::new();
        let (tokens, stem) = match source {
            Some(source) => source,
            None if self.on_unresolved(group, utility, spec)? => (&empty, None),
            None => return Ok(None),
        };

        let target = UtilityTarget {
            prefix: &spec.prefix,
            property: &property,
            pseudo: spec.pseudo.as_deref(),
            stem: stem.as_deref(),
        };
        let sheet = emit_utility_sheet(&target, tokens);
        log::debug!("{} {}: {} classes", group, utility, sheet.rules().len());

        // Inline tokens are declared nowhere else, so the sheet carries them.
        let inline = match &spec.tokens {
            UtilityTokens::Inline(tokens) => {
                Some(emit_variable_sheet(tokens, Some(spec.prefix.as_str()), &self.defined))
            }
            _ => None,
        };
        let declared_here: HashSet<&str> = inline.iter().flat_map(|v| v.identifiers()).collect();
        for variable in sheet
            .undefined_variables(&self.defined)
            .filter(|v| !declared_here.contains(v))
        {
            log::warn!(
                "utility '{}' in group '{}' uses --{} but no token defines it; the class will dangle",
                utility,
                group,
                variable
            );
        }

        let css = match &inline {
            Some(variables) => format!("{}\n{}", variables.render(&self.config.theme), sheet.render()),
            None => sheet.render(),
        };

        Ok(Some(CategoryOutput {
            name: utility.to_string(),
            kind: ArtifactKind::UtilitySheet,
            css,
            names: NameList::new(sheet.identifiers()),
        }))
    }

    fn property_for(&self, group: &str, utility: &str, spec: &UtilitySpec) -> Result<String, GenerateError> {
        match &spec.property {
            Some(property) => Ok(property.clone()),
            None if self.config.legacy_property_derivation => {
                let derived = derive_property(&spec.prefix);
                log::warn!(
                    "utility '{}' in group '{}' has no property; derived '{}' from prefix \"{}\"",
                    utility,
                    group,
                    derived,
                    spec.prefix
                );
                Ok(derived.to_string())
            }
            None => Err(GenerateError::MissingProperty {
                group: group.to_string(),
                utility: utility.to_string(),
                prefix: spec.prefix.clone(),
            }),
        }
    }

    /// Applies the unresolved policy. `Ok(true)` means emit empty artifacts,
    /// `Ok(false)` means skip the utility.
    fn on_unresolved(&self, group: &str, utility: &str, spec: &UtilitySpec) -> Result<bool, GenerateError> {
        let reference = match &spec.tokens {
            UtilityTokens::Reference(r) => r.to_string(),
            UtilityTokens::Literal(raw) => raw.clone(),
            UtilityTokens::Inline(_) => String::new(),
        };

        match self.config.unresolved {
            UnresolvedPolicy::Skip => {
                log::warn!(
                    "utility '{}' in group '{}': {} does not resolve to a token category; skipped",
                    utility,
                    group,
                    reference
                );
                Ok(false)
            }
            UnresolvedPolicy::EmitEmpty => {
                log::warn!(
                    "utility '{}' in group '{}': {} does not resolve to a token category; emitting empty artifacts",
                    utility,
                    group,
                    reference
                );
                Ok(true)
            }
            UnresolvedPolicy::Fail => Err(GenerateError::UnresolvedReference {
                group: group.to_string(),
                utility: utility.to_string(),
                reference,
            }),
        }
    }

    fn push_tier(&self, tier: Tier, groups: &[GroupOutput], artifacts: &mut ArtifactSet) {
        let mut group_lists = Vec::with_capacity(groups.len());

        for group in groups {
            for category in &group.categories {
                artifacts.push(Artifact {
                    path: layout::category_css_path(tier, &group.name, &category.name),
                    kind: category.kind,
                    tier: Some(tier),
                    contents: category.css.clone(),
                });

                let exports = ExportNames::new(
                    &layout::category_export_base(&group.name, &category.name),
                    tier.singular(),
                    tier.plural(),
                );
                let scope = format!("{} {} ({})", group.name, tier.label(), category.name);
                push_pair(
                    artifacts,
                    tier,
                    (
                        layout::category_types_path(tier, &group.name, &category.name),
                        layout::category_names_path(tier, &group.name, &category.name),
                    ),
                    &category.names,
                    &scope,
                    false,
                    &exports,
                );
            }

            let union = group.names();
            let exports = ExportNames::new(&layout::group_export_base(&group.name), tier.singular(), tier.plural());
            push_pair(
                artifacts,
                tier,
                (
                    layout::group_types_path(tier, &group.name),
                    layout::group_names_path(tier, &group.name),
                ),
                &union,
                &format!("{} {}", group.name, tier.label()),
                true,
                &exports,
            );
            group_lists.push(union);
        }

        if self.config.global_aggregates && !groups.is_empty() {
            let global = NameList::union(&group_lists);
            let exports = ExportNames::new("", tier.singular(), tier.plural());
            push_pair(
                artifacts,
                tier,
                (layout::global_types_path(tier), layout::global_names_path(tier)),
                &global,
                &format!("all {}", tier.label()),
                true,
                &exports,
            );
        }
    }
}

fn push_pair(
    artifacts: &mut ArtifactSet,
    tier: Tier,
    (types_path, names_path): (String, String),
    list: &NameList,
    scope: &str,
    aggregated: bool,
    exports: &ExportNames,
) {
    let qualifier = if aggregated { "aggregated " } else { "" };

    artifacts.push(Artifact {
        path: types_path,
        kind: ArtifactKind::TypedNames,
        tier: Some(tier),
        contents: render_typed(list, &format!("Auto-generated {}types for {}", qualifier, scope), exports),
    });
    artifacts.push(Artifact {
        path: names_path,
        kind: ArtifactKind::PlainNames,
        tier: Some(tier),
        contents: render_plain(list, &format!("Auto-generated {}names for {}", qualifier, scope), exports),
    });
}
