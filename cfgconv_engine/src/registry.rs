use std::sync::LazyLock;

use cfgconv_ir::{ConfigTree, DialectId, Representation, TemplateDocument};
use regex::Regex;

use crate::error::ConvertError;
use crate::rules::{DialectProfile, LineRule, MetadataRule, Scope, SectionScope};
use crate::{ConvertOptions, dialects, format, template, tree};

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::compile(&dialects::BUILTIN).expect("built-in dialect patterns are valid")
});

/// Line rule with its compiled pattern.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: &'static LineRule,
    pub regex: Regex,
}

/// Scope with compiled patterns.
#[derive(Debug, Clone)]
pub(crate) enum CompiledScope {
    Span { declaration: Regex, address: Regex },
    Path { declaration: Regex, address_path: &'static str },
    Section(SectionScope),
}

/// Tree rules with compiled patterns.
#[derive(Debug, Clone)]
pub(crate) struct CompiledTree {
    pub(crate) metadata: Option<(MetadataRule, Regex)>,
    pub(crate) scope: CompiledScope,
}

/// A dialect profile ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    pub profile: &'static DialectProfile,
    pub(crate) template: Option<Vec<CompiledRule>>,
    pub(crate) tree: Option<CompiledTree>,
}

impl CompiledProfile {
    fn compile(profile: &'static DialectProfile) -> Result<Self, regex::Error> {
        let template = profile
            .template
            .map(|rules| {
                rules
                    .iter()
                    .map(|rule| -> Result<CompiledRule, regex::Error> {
                        Ok(CompiledRule {
                            rule,
                            regex: Regex::new(rule.pattern)?,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let tree = profile
            .tree
            .map(|rules| -> Result<CompiledTree, regex::Error> {
                let metadata = rules
                    .metadata
                    .map(|meta| Ok::<_, regex::Error>((meta, Regex::new(meta.pattern)?)))
                    .transpose()?;
                let scope = match rules.scope {
                    Scope::Span {
                        declaration,
                        address,
                    } => CompiledScope::Span {
                        declaration: Regex::new(declaration)?,
                        address: Regex::new(address)?,
                    },
                    Scope::Path {
                        declaration,
                        address_path,
                    } => CompiledScope::Path {
                        declaration: Regex::new(declaration)?,
                        address_path,
                    },
                    Scope::Section(section) => CompiledScope::Section(section),
                };
                Ok(CompiledTree { metadata, scope })
            })
            .transpose()?;

        Ok(Self {
            profile,
            template,
            tree,
        })
    }

    pub fn id(&self) -> DialectId {
        self.profile.id
    }

    /// Compiled template rules in priority order, if the dialect has any.
    pub fn line_rules(&self) -> Option<&[CompiledRule]> {
        self.template.as_deref()
    }

    pub fn supports(&self, representation: Representation) -> bool {
        match representation {
            Representation::Template => self.template.is_some(),
            Representation::Tree => self.tree.is_some(),
            Representation::FlatRecord => true,
        }
    }

    pub(crate) fn template_rules(&self) -> Result<&[CompiledRule], ConvertError> {
        self.template
            .as_deref()
            .ok_or(ConvertError::UnsupportedCombination {
                dialect: self.id(),
                representation: Representation::Template,
            })
    }

    pub(crate) fn tree_rules(&self) -> Result<&CompiledTree, ConvertError> {
        self.tree.as_ref().ok_or(ConvertError::UnsupportedCombination {
            dialect: self.id(),
            representation: Representation::Tree,
        })
    }
}

/// Lookup table from dialect identifier to its compiled rules.
///
/// The built-in registry is compiled once and shared; custom registries can
/// add or replace profiles.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    profiles: Vec<CompiledProfile>,
}

impl Registry {
    /// Registry holding every built-in dialect.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Registry with no dialects.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a registry from profiles; later profiles replace earlier ones
    /// with the same id.
    pub fn compile(profiles: &[&'static DialectProfile]) -> Result<Self, regex::Error> {
        profiles
            .iter()
            .copied()
            .try_fold(Self::empty(), |registry, profile| registry.with_profile(profile))
    }

    /// Add a profile, replacing any existing profile for the same dialect.
    pub fn with_profile(mut self, profile: &'static DialectProfile) -> Result<Self, regex::Error> {
        let compiled = CompiledProfile::compile(profile)?;
        match self.profiles.iter_mut().find(|p| p.id() == profile.id) {
            Some(slot) => *slot = compiled,
            None => self.profiles.push(compiled),
        }
        Ok(self)
    }

    pub fn profile(&self, id: DialectId) -> Option<&CompiledProfile> {
        self.profiles.iter().find(|p| p.id() == id)
    }

    /// Registered dialects in registration order.
    pub fn dialects(&self) -> impl Iterator<Item = DialectId> + '_ {
        self.profiles.iter().map(CompiledProfile::id)
    }

    pub fn supports(&self, id: DialectId, representation: Representation) -> bool {
        match self.profile(id) {
            Some(profile) => profile.supports(representation),
            None => representation == Representation::FlatRecord,
        }
    }

    fn require(
        &self,
        id: DialectId,
        representation: Representation,
    ) -> Result<&CompiledProfile, ConvertError> {
        self.profile(id).ok_or(ConvertError::UnsupportedCombination {
            dialect: id,
            representation,
        })
    }

    /// Build the parameterized template for `input`.
    pub fn template(&self, input: &str, id: DialectId) -> Result<TemplateDocument, ConvertError> {
        let profile = self.require(id, Representation::Template)?;
        template::emit_template(input, profile)
    }

    /// Build the structured tree for `input`.
    pub fn tree(&self, input: &str, id: DialectId) -> Result<ConfigTree, ConvertError> {
        let profile = self.require(id, Representation::Tree)?;
        tree::build_tree(input, profile)
    }

    /// Convert `input` and serialize it according to `options`.
    ///
    /// The returned string is complete; nothing is produced on error.
    pub fn convert(
        &self,
        input: &str,
        id: DialectId,
        options: &ConvertOptions,
    ) -> Result<String, ConvertError> {
        let output = match options.representation {
            Representation::Template => self.template(input, id)?.render(),
            Representation::Tree => {
                format::serialize_tree(&self.tree(input, id)?, options.tree_format)?
            }
            Representation::FlatRecord => format::flat_record(input, id)?,
        };
        tracing::debug!(
            dialect = %id,
            representation = %options.representation,
            input_bytes = input.len(),
            output_bytes = output.len(),
            "conversion finished"
        );
        Ok(output)
    }
}
