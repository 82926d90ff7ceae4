//! Analysis facade: front-end, extractor and filter in one call.

use std::collections::HashMap;

use crate::concepts::{
    filter_concepts, ClassificationTable, ConceptExtractor, ExtractionResult, SourceBuffer,
    TableExtension,
};
use crate::config::{Config, DEFAULT_MAX_SOURCE_BYTES};
use crate::error::AnalysisError;
use crate::parser::GrammarRegistry;

/// Entry point used by the command line and the HTTP boundary.
///
/// Holds the grammar registry and one prebuilt extractor per grammar. It is
/// immutable after construction, so a single instance can be shared behind an
/// `Arc` by concurrent requests.
pub struct Analyzer {
    registry: GrammarRegistry,
    extractors: HashMap<&'static str, ConceptExtractor>,
    max_source_bytes: usize,
}

/// Builder for [`Analyzer`].
pub struct AnalyzerBuilder {
    registry: GrammarRegistry,
    language_profiles: bool,
    extra: TableExtension,
    max_source_bytes: usize,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            registry: GrammarRegistry::new(),
            language_profiles: true,
            extra: TableExtension::default(),
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }

    pub fn registry(mut self, registry: GrammarRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Layer grammar profiles over the reference table (default `true`).
    pub fn language_profiles(mut self, enabled: bool) -> Self {
        self.language_profiles = enabled;
        self
    }

    /// Extra tags applied to every language.
    pub fn extra(mut self, extra: TableExtension) -> Self {
        self.extra = extra;
        self
    }

    pub fn max_source_bytes(mut self, limit: usize) -> Self {
        self.max_source_bytes = limit;
        self
    }

    pub fn build(self) -> Analyzer {
        let extractors = self
            .registry
            .languages()
            .into_iter()
            .filter_map(|name| self.registry.grammar(name))
            .map(|grammar| {
                let mut table = ClassificationTable::reference();
                if self.language_profiles {
                    table.extend(grammar.profile());
                }
                table.extend(&self.extra);
                (grammar.name(), ConceptExtractor::new(table))
            })
            .collect();

        Analyzer {
            registry: self.registry,
            extractors,
            max_source_bytes: self.max_source_bytes,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with all built-in grammars and default settings.
    pub fn new() -> Self {
        AnalyzerBuilder::new().build()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Analyzer configured from the `analysis` and `extraction` sections.
    pub fn from_config(config: &Config) -> Self {
        AnalyzerBuilder::new()
            .language_profiles(config.extraction.language_profiles)
            .extra(config.extraction.extra.clone())
            .max_source_bytes(config.analysis.max_source_bytes)
            .build()
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Language identifiers the front-end supports, sorted.
    pub fn languages(&self) -> Vec<&'static str> {
        self.registry.languages()
    }

    /// Parse `code`, extract its concepts and apply the `targets` allow-list.
    ///
    /// Errors keep their kind so callers can map them to their own
    /// responses. No partial result is ever returned.
    pub fn analyze(
        &self,
        code: &str,
        language: &str,
        targets: Option<&[String]>,
    ) -> Result<ExtractionResult, AnalysisError> {
        if code.len() > self.max_source_bytes {
            return Err(AnalysisError::parse(
                language,
                format!(
                    "Source is {} bytes, limit is {}",
                    code.len(),
                    self.max_source_bytes
                ),
            ));
        }

        let parsed = self.registry.parse(language, code)?;
        let name = parsed.grammar.name();
        if parsed.has_error() {
            tracing::trace!(language = name, "Tree contains error nodes");
        }

        let extractor = self
            .extractors
            .get(name)
            .ok_or_else(|| AnalysisError::unsupported(language))?;

        let concepts = extractor
            .extract(parsed.root(), SourceBuffer::from(code))
            .map_err(|e| {
                tracing::warn!(language = name, error = %e, "Concept extraction failed");
                AnalysisError::from(e)
            })?;

        let result = filter_concepts(&concepts, targets);
        tracing::debug!(
            language = name,
            bytes = code.len(),
            extracted = concepts.total(),
            filtered = targets.is_some_and(|t| !t.is_empty()),
            "Analyzed source"
        );

        Ok(result)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
