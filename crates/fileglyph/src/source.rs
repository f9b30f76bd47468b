//! Lazy theme document sources.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::{Error, Result};

/// Future returned by [`ThemeSource::load`].
pub type ThemeFuture<'a> = BoxFuture<'a, Result<Option<Value>>>;

/// Lazily produces the JSON document of a theme.
///
/// `Ok(None)` means the source has no document; the theme then stays
/// unloaded, the same as on error.
pub trait ThemeSource: Send + Sync {
    fn load(&self) -> ThemeFuture<'_>;
}

/// Reads the theme document from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeSource for JsonFileSource {
    fn load(&self) -> ThemeFuture<'_> {
        Box::pin(async move {
            let text = match tokio::fs::read_to_string(&self.path).await {
                Ok(text) => text,
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(Error::io(&self.path, e)),
            };
            let value = serde_json::from_str(&text).map_err(|e| Error::json(&self.path, e))?;
            Ok(Some(value))
        })
    }
}

/// A theme document that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    document: Option<Value>,
}

impl InlineSource {
    pub fn new(document: Value) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// A source that never yields a document.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl ThemeSource for InlineSource {
    fn load(&self) -> ThemeFuture<'_> {
        let document = self.document.clone();
        Box::pin(async move { Ok(document) })
    }
}

/// Adapts an async closure into a [`ThemeSource`].
///
/// # Example
///
/// ```
/// use fileglyph::source::{FnSource, ThemeSource};
///
/// let source = FnSource::new(|| async { Ok::<_, fileglyph::Error>(Some(serde_json::json!({ "0": {} }))) });
/// # let _ = source.load();
/// ```
pub struct FnSource<F> {
    load: F,
}

impl<F, Fut> FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>>> + Send + 'static,
{
    pub fn new(load: F) -> Self {
        Self { load }
    }
}

impl<F, Fut> ThemeSource for FnSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>>> + Send + 'static,
{
    fn load(&self) -> ThemeFuture<'_> {
        Box::pin((self.load)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn json_file_source_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seti.json");
        tokio::fs::write(&path, r#"{"0":{"1":{"1":"\\E001"}}}"#).await.unwrap();

        let value = JsonFileSource::new(&path).load().await.unwrap();
        assert_eq!(value, Some(json!({ "0": { "1": { "1": "\\E001" } } })));
    }

    #[tokio::test]
    async fn missing_file_is_no_document() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        assert!(source.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = JsonFileSource::new(&path).load().await.unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[tokio::test]
    async fn inline_and_fn_sources() {
        assert_eq!(InlineSource::new(json!({})).load().await.unwrap(), Some(json!({})));
        assert_eq!(InlineSource::empty().load().await.unwrap(), None);

        let source = FnSource::new(|| async { Ok::<_, Error>(None) });
        assert_eq!(source.load().await.unwrap(), None);
    }
}
