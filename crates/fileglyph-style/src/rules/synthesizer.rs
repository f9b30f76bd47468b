//! Rule synthesis.
//!
//! Turns one successful resolution into one rule and routes it to the bucket
//! for its keyspace. Placement inside the extension bucket is what makes
//! composite extensions such as `babel.json` outrank the bare `json` rule:
//! bare extensions go to the front, dotted ones to the back.

use tracing::debug;

use crate::Result;
use crate::icon_theme::{IconDefinition, IconKey};
use crate::logging::targets;
use crate::rules::{IconRule, ResolutionCache, RuleBuckets, RuleTarget};

/// Generates at most one rule per lookup name for a loaded theme.
#[derive(Debug)]
pub struct RuleSynthesizer {
    root_url: Option<String>,
    cache: ResolutionCache,
    buckets: RuleBuckets,
}

impl RuleSynthesizer {
    /// Create a synthesizer writing into `buckets`, resolving image paths
    /// against `root_url`.
    pub fn new(root_url: Option<String>, buckets: RuleBuckets) -> Self {
        Self {
            root_url: root_url.filter(|r| !r.is_empty()),
            cache: ResolutionCache::new(),
            buckets,
        }
    }

    /// Emit the rule for `name`, unless one already exists.
    ///
    /// Returns `Ok(true)` when a rule was inserted and `Ok(false)` when the
    /// name was already cached. A rejected rule is returned as an error and
    /// leaves the cache untouched.
    pub fn synthesize(
        &mut self,
        name: &str,
        key: IconKey,
        file_type: &str,
        target: RuleTarget,
        definition: &IconDefinition,
    ) -> Result<bool> {
        if self.cache.contains(name) {
            return Ok(false);
        }

        let rule = IconRule::new(
            target,
            name,
            key,
            file_type,
            definition,
            self.root_url.as_deref(),
        );

        let mut bucket = self.buckets.bucket(target).write();
        let index = if rule.is_bare_extension() {
            bucket.insert_front(rule.css())?
        } else {
            bucket.insert_back(rule.css())?
        };
        drop(bucket);

        self.cache.record(name);
        debug!(
            target: targets::RULES,
            lookup = name,
            key = key.get(),
            kind = ?target,
            index,
            "synthesized icon rule"
        );
        Ok(true)
    }

    pub fn root_url(&self) -> Option<&str> {
        self.root_url.as_deref()
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn buckets(&self) -> &RuleBuckets {
        &self.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth() -> RuleSynthesizer {
        RuleSynthesizer::new(Some("/themes/seti".into()), RuleBuckets::new())
    }

    #[test]
    fn second_request_is_a_noop() {
        let mut s = synth();
        let def = IconDefinition::image("npm.svg");
        assert!(s.synthesize("package.json", IconKey(1), "npm", RuleTarget::FileName, &def).unwrap());
        assert!(!s.synthesize("package.json", IconKey(1), "npm", RuleTarget::FileName, &def).unwrap());

        assert_eq!(s.buckets().file_names.read().len(), 1);
        assert_eq!(s.cache().len(), 1);
    }

    #[test]
    fn bare_extensions_go_first() {
        let mut s = synth();
        let def = IconDefinition::glyph("\\E001");
        s.synthesize("babel.json", IconKey(2), "", RuleTarget::Extension, &def).unwrap();
        s.synthesize("json", IconKey(3), "json", RuleTarget::Extension, &def).unwrap();
        s.synthesize("eslint.json", IconKey(4), "", RuleTarget::Extension, &def).unwrap();

        let bucket = s.buckets().file_extensions.read();
        let rules = bucket.rules();
        assert!(rules[0].contains("$=\"json\"i"));
        assert!(rules[1].contains("babel.json"));
        assert!(rules[2].contains("eslint.json"));
    }

    #[test]
    fn routes_by_target() {
        let mut s = synth();
        let def = IconDefinition::glyph("\\E00F");
        s.synthesize("python", IconKey(7), "py", RuleTarget::LanguageId, &def).unwrap();

        assert_eq!(s.buckets().language_ids.read().len(), 1);
        assert!(s.buckets().file_names.read().is_empty());
        assert!(s.buckets().file_extensions.read().is_empty());
    }

    #[test]
    fn empty_root_is_no_root() {
        let s = RuleSynthesizer::new(Some(String::new()), RuleBuckets::new());
        assert_eq!(s.root_url(), None);
    }
}
