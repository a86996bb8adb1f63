use std::fs::Metadata;
use std::io;
use std::path::Path as StdPath;

use futures_lite::StreamExt;
use log::debug;
use log::warn;
use url::Url;

use crate::Entry;
use crate::Error;
use crate::Listing;
use crate::entry::PARENT_NAME;
use crate::entry::sort_by_name;
use crate::utils::system_time_millis;

// Resolves path-relative request urls such as "/files/logs/" during
// validation. Never appears in output.
const PLACEHOLDER_BASE: &str = "http://localhost/";

/// Builds the listing of `directory`, which is served at `request_url`.
///
/// Only immediate children are read. When `include_parent` is set and the
/// directory has a parent, the listing also carries a `../` entry that links
/// to `request_url` with its final path segment removed.
///
/// # Errors
/// * `Error::InvalidInput` if `directory` is not an existing directory or
///   `request_url` is blank or malformed.
/// * `Error::FilesystemAccess` if metadata of the directory, its parent or
///   any child cannot be read.
pub async fn build_listing<P: AsRef<StdPath>>(
    directory: P,
    request_url: &str,
    include_parent: bool,
) -> Result<Listing, Error> {
    let directory = directory.as_ref();
    check_directory(directory).await?;
    validate_request_url(request_url)?;

    let parent = if include_parent {
        parent_entry(directory, request_url).await?
    } else {
        None
    };

    let (mut directories, mut files) = read_children(directory, &base_url(request_url)).await?;
    sort_by_name(&mut directories);
    sort_by_name(&mut files);

    debug!(
        "listed {}: {} directories, {} files",
        directory.display(),
        directories.len(),
        files.len()
    );
    Ok(Listing {
        parent,
        directories,
        files,
    })
}

/// Rejects blank request urls and anything that is neither an absolute url
/// nor a path starting with `/`.
pub(crate) fn validate_request_url(request_url: &str) -> Result<(), Error> {
    if request_url.trim().is_empty() {
        return Err(Error::InvalidInput("No request url entered".into()));
    }
    let invalid = |e: url::ParseError| Error::InvalidInput(format!("{request_url}: {e}"));
    match Url::parse(request_url) {
        Ok(_) => Ok(()),
        Err(url::ParseError::RelativeUrlWithoutBase) if request_url.starts_with('/') => {
            Url::parse(PLACEHOLDER_BASE)
                .and_then(|base| base.join(request_url))
                .map(|_| ())
                .map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

/// Returns `request_url` with exactly one trailing `/`. Child urls are this
/// base followed by the child's name.
pub(crate) fn base_url(request_url: &str) -> String {
    if request_url.ends_with('/') {
        request_url.to_owned()
    } else {
        format!("{request_url}/")
    }
}

/// Removes the final path segment of `request_url`.
///
/// One trailing `/` is dropped first, then everything from the last
/// remaining `/` on. This is plain text surgery on the url, so
/// "http://host/a/b/" becomes "http://host/a". Returns "/" if nothing would
/// be left. A url with no path segment keeps the same rule, so
/// "http://host/" becomes "http:/".
pub(crate) fn parent_url(request_url: &str) -> String {
    let trimmed = request_url.strip_suffix('/').unwrap_or(request_url);
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_owned(),
        Some(end) => trimmed[..end].to_owned(),
    }
}

async fn check_directory(directory: &StdPath) -> Result<(), Error> {
    match tokio::fs::metadata(directory).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(Error::InvalidInput(format!(
            "{} is not a valid directory",
            directory.display()
        ))),
        Err(e)
            if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            Err(Error::InvalidInput(format!(
                "{} does not exist",
                directory.display()
            )))
        }
        Err(e) => Err(Error::fs_access(directory.display(), e)),
    }
}

async fn parent_entry(directory: &StdPath, request_url: &str) -> Result<Option<Entry>, Error> {
    let absolute =
        std::path::absolute(directory).map_err(|e| Error::fs_access(directory.display(), e))?;
    let Some(parent_dir) = absolute.parent() else {
        return Ok(None);
    };
    let metadata = read_metadata(parent_dir).await?;
    Entry::from_metadata(
        PARENT_NAME.to_owned(),
        parent_url(request_url),
        &metadata,
        parent_dir,
    )
    .map(Some)
}

async fn read_children(
    directory: &StdPath,
    base_url: &str,
) -> Result<(Vec<Entry>, Vec<Entry>), Error> {
    let mut directories = Vec::new();
    let mut files = Vec::new();

    let mut children = match async_fs::read_dir(directory).await {
        Ok(children) => children,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warn!("cannot enumerate {}: {e}", directory.display());
            return Ok((directories, files));
        }
        Err(e) => return Err(Error::fs_access(directory.display(), e)),
    };

    while let Some(child) = children.next().await {
        let child = child.map_err(|e| Error::fs_access(directory.display(), e))?;
        let path = child.path();
        let metadata = read_child_metadata(&path).await?;
        let name = child.file_name().to_string_lossy().into_owned();
        if metadata.is_dir() {
            let name = format!("{name}/");
            let url = format!("{base_url}{name}");
            directories.push(Entry::from_metadata(name, url, &metadata, &path)?);
        } else {
            let url = format!("{base_url}{name}");
            files.push(Entry::from_metadata(name, url, &metadata, &path)?);
        }
    }
    Ok((directories, files))
}

// Follows symlinks, so a link to a directory is listed as a directory. A
// dangling link falls back to the link's own metadata and lists as a file;
// only a child that is gone altogether fails the listing.
async fn read_child_metadata(path: &StdPath) -> Result<Metadata, Error> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => tokio::fs::symlink_metadata(path)
            .await
            .map_err(|_| Error::fs_access(path.display(), e)),
        Err(e) => Err(Error::fs_access(path.display(), e)),
    }
}

async fn read_metadata(path: &StdPath) -> Result<Metadata, Error> {
    tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::fs_access(path.display(), e))
}

impl Entry {
    fn from_metadata(
        name: String,
        url: String,
        metadata: &Metadata,
        path: &StdPath,
    ) -> Result<Self, Error> {
        let modified = metadata
            .modified()
            .map_err(|e| Error::fs_access(path.display(), e))?;
        Ok(Entry {
            name,
            url,
            size: metadata.len(),
            last_modified: system_time_millis(modified),
        })
    }
}
