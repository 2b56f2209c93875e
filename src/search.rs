use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ArticleServerError, Result};
use crate::models::RelatedFile;

const IMG_START_TAG: &str = "<img src=\"";
const HTML_EXTENSION: &str = ".html";

/// Depth-first walk over every non-directory entry under `root`.
///
/// Siblings are visited in file-name order. Symlinks are reported as entries
/// but never followed.
pub fn walk_files(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter(|entry| match entry {
            Ok(entry) => !entry.file_type().is_dir(),
            Err(_) => true,
        })
}

/// Finds the first `.html` file under `root`, used as the page served at `/`.
pub fn find_example_html(root: &Path) -> Result<PathBuf> {
    for entry in walk_files(root) {
        let entry = entry?;
        if entry.file_name().to_string_lossy().ends_with(HTML_EXTENSION) {
            info!("Using example page: {}", entry.path().display());
            return Ok(entry.into_path());
        }
    }
    Err(ArticleServerError::NoHtmlFound(root.to_path_buf()))
}

/// Collects every file under `root` whose name contains `title`, ignoring case.
///
/// A traversal error aborts the search. Files that cannot be read still show
/// up in the results, just without an image.
pub fn search_related_files(title: &str, root: &Path) -> Result<Vec<RelatedFile>> {
    let needle = title.to_lowercase();
    let mut related = Vec::new();

    for entry in walk_files(root) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.contains(&needle) {
            related.push(describe_related_file(entry.path()));
        }
    }

    debug!("Found {} files related to {:?} under {}", related.len(), title, root.display());
    Ok(related)
}

pub fn describe_related_file(path: &Path) -> RelatedFile {
    let img = match read_first_image(path) {
        Ok(img) => img,
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            None
        }
    };
    RelatedFile::new(path.to_string_lossy(), img)
}

pub fn read_first_image(path: &Path) -> std::io::Result<Option<String>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(extract_first_image(&content).map(str::to_string))
}

/// Returns the `src` of the first `<img src="...">` in `content`.
///
/// A marker with no closing quote counts as no image.
pub fn extract_first_image(content: &str) -> Option<&str> {
    let start = content.find(IMG_START_TAG)? + IMG_START_TAG.len();
    let rest = &content[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}
