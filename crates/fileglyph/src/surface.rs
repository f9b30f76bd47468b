//! Presentation surface.
//!
//! The surface is where generated styling becomes visible: a link to the
//! theme's companion folder stylesheet plus three rule-bucket containers. A
//! browser host maps these to `<link>` and `<style>` elements in the document
//! head; [`InMemorySurface`] keeps them in memory for headless hosts.

use parking_lot::RwLock;

use fileglyph_style::rules::SharedBucket;

/// The four containers a loaded theme attaches, in attach order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Link to the theme's folder icon stylesheet.
    Folders,
    /// Language id rules.
    LanguageIds,
    /// Extension rules.
    FileExtensions,
    /// File name rules.
    FileNames,
}

impl ContainerKind {
    /// Every container, in attach order. Later containers win cascade ties.
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Folders,
        ContainerKind::LanguageIds,
        ContainerKind::FileExtensions,
        ContainerKind::FileNames,
    ];

    /// Element id of the container in the host document.
    pub fn element_id(self) -> &'static str {
        match self {
            ContainerKind::Folders => "vs-icontheme-folders",
            ContainerKind::LanguageIds => "vs-icontheme-langids",
            ContainerKind::FileExtensions => "vs-icontheme-file-exts",
            ContainerKind::FileNames => "vs-icontheme-file-names",
        }
    }
}

/// Host collaborator that displays the generated style containers.
///
/// Attaching a container that is already attached replaces it. Detaching a
/// container that is not attached does nothing.
pub trait PresentationSurface: Send + Sync {
    /// Attach the stylesheet link for `kind`.
    fn attach_link(&self, kind: ContainerKind, href: &str);

    /// Attach a rule bucket for `kind`. The surface keeps the shared handle,
    /// so rules inserted later are visible without re-attaching.
    fn attach_bucket(&self, kind: ContainerKind, bucket: SharedBucket);

    /// Detach the container for `kind`.
    fn detach(&self, kind: ContainerKind);
}

/// Content of an attached container.
#[derive(Debug, Clone)]
pub enum Container {
    Link(String),
    Bucket(SharedBucket),
}

/// A [`PresentationSurface`] that records containers in memory.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    containers: RwLock<Vec<(ContainerKind, Container)>>,
}

impl InMemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attached containers, in attach order.
    pub fn attached(&self) -> Vec<ContainerKind> {
        self.containers.read().iter().map(|(kind, _)| *kind).collect()
    }

    pub fn is_attached(&self, kind: ContainerKind) -> bool {
        self.containers.read().iter().any(|(k, _)| *k == kind)
    }

    /// The href of an attached link container.
    pub fn link(&self, kind: ContainerKind) -> Option<String> {
        self.containers.read().iter().find_map(|(k, c)| match c {
            Container::Link(href) if *k == kind => Some(href.clone()),
            _ => None,
        })
    }

    /// The shared bucket of an attached bucket container.
    pub fn bucket(&self, kind: ContainerKind) -> Option<SharedBucket> {
        self.containers.read().iter().find_map(|(k, c)| match c {
            Container::Bucket(bucket) if *k == kind => Some(bucket.clone()),
            _ => None,
        })
    }

    /// Number of rules in an attached bucket, or zero.
    pub fn rule_count(&self, kind: ContainerKind) -> usize {
        self.bucket(kind).map_or(0, |b| b.read().len())
    }

    /// Render every attached container as one stylesheet.
    ///
    /// Links become `@import` rules; buckets contribute their rules verbatim.
    pub fn stylesheet(&self) -> String {
        let containers = self.containers.read();
        let mut out = String::new();
        for (kind, container) in containers.iter() {
            out.push_str(&format!("/* #{} */\n", kind.element_id()));
            match container {
                Container::Link(href) => {
                    out.push_str(&format!(
                        "@import url({});\n",
                        fileglyph_style::parser::css_string(href)
                    ));
                }
                Container::Bucket(bucket) => {
                    for rule in bucket.read().iter() {
                        out.push_str(rule);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }

    fn attach(&self, kind: ContainerKind, container: Container) {
        let mut containers = self.containers.write();
        containers.retain(|(k, _)| *k != kind);
        containers.push((kind, container));
    }
}

impl PresentationSurface for InMemorySurface {
    fn attach_link(&self, kind: ContainerKind, href: &str) {
        self.attach(kind, Container::Link(href.to_string()));
    }

    fn attach_bucket(&self, kind: ContainerKind, bucket: SharedBucket) {
        self.attach(kind, Container::Bucket(bucket));
    }

    fn detach(&self, kind: ContainerKind) {
        self.containers.write().retain(|(k, _)| *k != kind);
    }
}
