use std::sync::LazyLock;

use serde::Deserialize;
use serde::Serialize;

/// Style sheet embedded into every HTML listing.
pub const DEFAULT_CSS: &str = concat!(
    "H1 {font-family:Tahoma,Arial,sans-serif;color:white;background-color:#525D76;font-size:22px;} ",
    "H2 {font-family:Tahoma,Arial,sans-serif;color:white;background-color:#525D76;font-size:16px;} ",
    "H3 {font-family:Tahoma,Arial,sans-serif;color:white;background-color:#525D76;font-size:14px;} ",
    "BODY {font-family:Tahoma,Arial,sans-serif;color:black;background-color:white;} ",
    "B {font-family:Tahoma,Arial,sans-serif;color:white;background-color:#525D76;} ",
    "P {font-family:Tahoma,Arial,sans-serif;background:white;color:black;font-size:12px;}",
    "A {color : black;}",
    "A.name {color : black;}",
    ".line {height: 1px; background-color: #525D76; border: none;}",
);

/// Server identification printed in the footer of every HTML listing.
pub const SERVER_INFO: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

static GLOBAL: LazyLock<WriterConfig> = LazyLock::new(WriterConfig::default);

/// Server-controlled settings for HTML rendering.
///
/// Missing fields take their defaults when deserialized, so a host service
/// can embed a partial table in its own config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WriterConfig {
    /// Contents of the embedded `<style>` block.
    pub css: String,
    /// Text of the footer heading.
    pub server_info: String,
    /// Escape the title, entry names and urls before embedding them.
    /// Turning this off reproduces the legacy output byte for byte but lets
    /// file names inject markup.
    pub escape_html: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            css: DEFAULT_CSS.to_owned(),
            server_info: SERVER_INFO.to_owned(),
            escape_html: true,
        }
    }
}

impl WriterConfig {
    /// The process-wide default configuration. Built on first use and never
    /// modified afterwards.
    pub fn global() -> &'static WriterConfig {
        &GLOBAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_default() {
        assert_eq!(WriterConfig::global(), &WriterConfig::default());
        assert!(std::ptr::eq(WriterConfig::global(), WriterConfig::global()));
    }

    #[test]
    fn server_info_names_crate() {
        assert!(SERVER_INFO.starts_with("dirlist/"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: WriterConfig = serde_json::from_str(r#"{"escape_html": false}"#).unwrap();
        assert!(!config.escape_html);
        assert_eq!(config.css, DEFAULT_CSS);
        assert_eq!(config.server_info, SERVER_INFO);
    }
}
