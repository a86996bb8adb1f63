use std::path::Path as StdPath;
use std::sync::Arc;

use crate::Error;
use crate::WriterConfig;
use crate::build_listing;
use crate::html::render_html_with;
use crate::json::render_json;

/// Lists a directory and renders it in one call.
#[allow(async_fn_in_trait)]
pub trait DirectoryWriter {
    /// Renders `directory`, served at `request_url`, as an HTML page.
    async fn to_html(
        &self,
        directory: &StdPath,
        request_url: &str,
        include_parent: bool,
    ) -> Result<String, Error>;

    /// Renders `directory`, served at `request_url`, as JSON.
    async fn to_json(
        &self,
        directory: &StdPath,
        request_url: &str,
        include_parent: bool,
    ) -> Result<String, Error>;
}

/// A [`DirectoryWriter`] that titles HTML pages with the directory's own
/// name.
#[derive(Debug, Clone, Default)]
pub struct DefaultDirectoryWriter {
    // None means the process-wide default.
    config: Option<Arc<WriterConfig>>,
}

impl DefaultDirectoryWriter {
    /// Creates a writer that uses [`WriterConfig::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with its own configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config: Some(Arc::new(config)),
        }
    }

    /// The configuration used for HTML rendering.
    pub fn config(&self) -> &WriterConfig {
        match &self.config {
            Some(config) => config.as_ref(),
            None => WriterConfig::global(),
        }
    }
}

impl DirectoryWriter for DefaultDirectoryWriter {
    async fn to_html(
        &self,
        directory: &StdPath,
        request_url: &str,
        include_parent: bool,
    ) -> Result<String, Error> {
        let listing = build_listing(directory, request_url, include_parent).await?;
        Ok(render_html_with(&listing, &title_of(directory), self.config()))
    }

    async fn to_json(
        &self,
        directory: &StdPath,
        request_url: &str,
        include_parent: bool,
    ) -> Result<String, Error> {
        let listing = build_listing(directory, request_url, include_parent).await?;
        render_json(&listing)
    }
}

fn title_of(directory: &StdPath) -> String {
    match directory.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => directory.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Listing;
    use crate::TestRoot;

    const URL: &str = "http://host/files/served/";

    #[test]
    fn title_is_last_component() {
        assert_eq!(title_of(StdPath::new("/srv/jobs/42")), "42");
        assert_eq!(title_of(StdPath::new("/")), "/");
    }

    #[tokio::test]
    async fn html_page_for_directory() {
        let root = TestRoot::new().unwrap();
        let html = DefaultDirectoryWriter::new()
            .to_html(&root.dir(), URL, true)
            .await
            .unwrap();
        assert!(html.contains("<title>served</title>"));
        assert!(html.contains("<a href=\"http://host/files\"><tt>../</tt></a>"));
        assert!(html.contains("<a href=\"http://host/files/served/alpha/\"><tt>alpha/</tt></a>"));
        assert!(html.contains("<tt>1.4 kb</tt>"));
        assert!(!html.contains("nested.txt"));
    }

    #[tokio::test]
    async fn json_document_for_directory() {
        let root = TestRoot::new().unwrap();
        let json = DefaultDirectoryWriter::new()
            .to_json(&root.dir(), URL, false)
            .await
            .unwrap();
        let listing: Listing = serde_json::from_str(&json).unwrap();
        assert!(listing.parent.is_none());
        assert_eq!(listing.directories.len(), 2);
        root.match_entries(&listing);
    }

    #[tokio::test]
    async fn invalid_input_produces_no_output() {
        let root = TestRoot::new().unwrap();
        let writer = DefaultDirectoryWriter::new();
        let file = root.dir().join("b.txt");
        assert!(matches!(
            writer.to_html(&file, URL, false).await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            writer.to_json(&root.dir(), "", false).await,
            Err(Error::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn custom_config_is_used() {
        let root = TestRoot::new().unwrap();
        let writer = DefaultDirectoryWriter::with_config(WriterConfig {
            server_info: "files-api".into(),
            ..WriterConfig::default()
        });
        assert_eq!(writer.config().server_info, "files-api");
        let html = writer.to_html(&root.dir(), URL, false).await.unwrap();
        assert!(html.contains("<h3>files-api</h3>"));
    }
}
