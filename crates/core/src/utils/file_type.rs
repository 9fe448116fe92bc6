use std::path::Path;

use crate::types::SourceLanguage;

/// Extensions of files that are never built on their own
const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp", ".hh", ".hxx", ".h++", ".hp", ".ii", ".inl", ".idl", ""];

const CPP_EXTENSIONS: &[&str] = &[".cpp", ".cc", ".cxx", ".c++", ".cp", ".ino", ".ipp", ".tcc"];

/// Extension of `path` including the leading dot
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

pub fn is_header_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    HEADER_EXTENSIONS.contains(&lower.as_str())
}

/// Classify an extension; `.C` (upper case) counts as both languages.
pub fn classify_extension(extension: &str) -> Option<SourceLanguage> {
    if extension == ".C" {
        return Some(SourceLanguage::CAndCpp);
    }

    let lower = extension.to_lowercase();
    if CPP_EXTENSIONS.contains(&lower.as_str()) {
        Some(SourceLanguage::Cpp)
    } else if lower == ".c" {
        Some(SourceLanguage::C)
    } else {
        None
    }
}

/// Detect whether `path` is a buildable C or C++ source file
pub fn classify_source(path: &Path) -> Option<SourceLanguage> {
    tracing::trace!("Classifying source file: {:?}", path);

    let Some(extension) = extension_of(path) else {
        tracing::debug!("No extension on {:?}, nothing to build", path);
        return None;
    };

    if is_header_extension(&extension) {
        tracing::debug!("Header file {:?} is not built on its own", path);
        return None;
    }

    classify_extension(&extension)
}
