//! Filename and content heuristics for tests, docs and licenses

use crate::core::observer::ScanObserver;
use crate::models::{LicenseType, RecordBuilder};
use crate::utils::encoding::read_file_safely;
use std::path::Path;

const TEST_MARKERS: &[&str] = &["test", "spec"];
const DOC_MARKERS: &[&str] = &["readme", "doc", "docs"];
const LICENSE_MARKER: &str = "license";

// checked in order; first hit wins
const LICENSE_FAMILIES: &[(&str, LicenseType)] = &[
    ("mit", LicenseType::Mit),
    ("apache", LicenseType::Apache),
    ("gpl", LicenseType::Gpl),
    ("bsd", LicenseType::Bsd),
];

pub fn is_test_file(name: &str) -> bool {
    let name = name.to_lowercase();
    TEST_MARKERS.iter().any(|marker| name.contains(marker))
}

pub fn is_doc_file(name: &str) -> bool {
    let name = name.to_lowercase();
    DOC_MARKERS.iter().any(|marker| name.contains(marker))
}

pub fn is_license_file(name: &str) -> bool {
    name.to_lowercase().contains(LICENSE_MARKER)
}

/// Classify license text by plain substring search.
///
/// Case-insensitive substring match, so "mit" also hits words like "permitted".
pub fn classify_license(content: &str) -> LicenseType {
    let content = content.to_lowercase();
    LICENSE_FAMILIES
        .iter()
        .find(|(needle, _)| content.contains(needle))
        .map(|(_, license)| *license)
        .unwrap_or(LicenseType::Custom)
}

/// Read and classify a license file; unreadable files are `Unknown`
pub fn detect_license(path: &Path, observer: &dyn ScanObserver) -> LicenseType {
    match read_file_safely(path) {
        Ok(content) => classify_license(&content),
        Err(err) => {
            observer.on_warning(path, &err);
            LicenseType::Unknown
        }
    }
}

/// Apply every heuristic to one visited file.
///
/// Test and doc flags only ever turn on. Each license file overwrites the
/// previous classification.
pub fn apply(builder: &mut RecordBuilder, name: &str, path: &Path, observer: &dyn ScanObserver) {
    if is_test_file(name) {
        builder.mark_tests();
    }
    if is_doc_file(name) {
        builder.mark_docs();
    }
    if is_license_file(name) {
        builder.set_license(detect_license(path, observer));
    }
}
