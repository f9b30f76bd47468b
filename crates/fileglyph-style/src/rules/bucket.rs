//! Ordered rule buckets.
//!
//! A bucket is the in-memory form of one attached stylesheet: an ordered list
//! of rule texts where later rules win ties. Buckets are shared between the
//! synthesizer, which appends to them, and the presentation surface, which
//! renders them.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::parser::check_rule;
use crate::rules::RuleTarget;
use crate::{Error, Result};

/// An ordered, validated list of rule texts.
#[derive(Debug, Clone, Default)]
pub struct RuleBucket {
    rules: Vec<String>,
}

impl RuleBucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `css` at `index`, shifting later rules back.
    ///
    /// Fails without modifying the bucket when `index` is past the end or the
    /// text is not exactly one well-formed rule.
    pub fn insert(&mut self, css: impl Into<String>, index: usize) -> Result<usize> {
        let css = css.into();
        if index > self.rules.len() {
            return Err(Error::index_out_of_range(index, self.rules.len()));
        }
        check_rule(&css)?;
        self.rules.insert(index, css);
        Ok(index)
    }

    /// Insert `css` before every existing rule.
    pub fn insert_front(&mut self, css: impl Into<String>) -> Result<usize> {
        self.insert(css, 0)
    }

    /// Insert `css` after every existing rule.
    pub fn insert_back(&mut self, css: impl Into<String>) -> Result<usize> {
        let end = self.rules.len();
        self.insert(css, end)
    }

    /// The rules in precedence order, lowest first.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Iterate over the rules.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Render the bucket as stylesheet text, one rule per line.
    pub fn to_css(&self) -> String {
        self.rules.join("\n")
    }
}

/// A bucket shared with a presentation surface.
pub type SharedBucket = Arc<RwLock<RuleBucket>>;

/// The three synthesized-rule buckets of one theme load.
#[derive(Debug, Clone, Default)]
pub struct RuleBuckets {
    pub file_names: SharedBucket,
    pub language_ids: SharedBucket,
    pub file_extensions: SharedBucket,
}

impl RuleBuckets {
    /// Create three fresh, empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bucket rules for `target` are routed to.
    pub fn bucket(&self, target: RuleTarget) -> &SharedBucket {
        match target {
            RuleTarget::FileName => &self.file_names,
            RuleTarget::LanguageId => &self.language_ids,
            RuleTarget::Extension => &self.file_extensions,
        }
    }

    /// Total number of rules across all buckets.
    pub fn total_rules(&self) -> usize {
        self.file_names.read().len() + self.language_ids.read().len() + self.file_extensions.read().len()
    }
}
