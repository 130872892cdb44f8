//! Near-miss file name suggestions.
//!
//! When a must-exist lookup fails, the matcher walks the search roots and
//! ranks files by how closely their names resemble the requested one.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::FuzzySettings;
use crate::path::extension::ExtensionFilter;
use crate::path::roots::CandidateRoot;

/// A file offered in place of one that was not found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    path: PathBuf,
    score: f64,
}

impl Suggestion {
    /// Create a suggestion.
    #[must_use]
    pub fn new(path: PathBuf, score: f64) -> Self {
        Self { path, score }
    }

    /// Absolute path of the suggested file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Similarity to the requested name, in `[0.0, 1.0]`.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Ranking: higher score first, then shorter path, then lexicographic.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| {
                self.path
                    .as_os_str()
                    .len()
                    .cmp(&other.path.as_os_str().len())
            })
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Bounds on the suggestion walk. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Deepest level walked below each root; files directly inside a root
    /// are at depth 1.
    pub max_depth: Option<usize>,
    /// Total directory entries visited across all roots before giving up.
    pub max_entries: Option<usize>,
}

/// Similarity ratio of two strings: `2 * LCS / (len(a) + len(b))`.
///
/// LCS is the longest common subsequence over characters. The ratio is
/// symmetric, lies in `[0.0, 1.0]`, and is 1.0 for identical strings.
///
/// # Examples
///
/// ```
/// use modelpath::path::fuzzy::similarity;
///
/// assert_eq!(similarity("office.osm", "office.osm"), 1.0);
/// assert!(similarity("offic.osm", "office.osm") > similarity("offic.osm", "warehouse.osm"));
/// assert_eq!(similarity("abc", "xyz"), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    (2 * lcs_len(&a, &b)) as f64 / total as f64
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for lc in long {
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Ranks files under a set of roots by name similarity.
///
/// # Examples
///
/// ```no_run
/// use modelpath::path::{ExtensionFilter, FuzzyMatcher};
/// use modelpath::path::roots::{CandidateRoot, RootLabel};
/// use std::path::PathBuf;
///
/// let roots = vec![CandidateRoot::new(RootLabel::Workspace, PathBuf::from("/workspace"))];
/// let matcher = FuzzyMatcher::new().with_max_results(3);
/// for suggestion in matcher.suggest("offic.osm", &ExtensionFilter::new([".osm"]), &roots) {
///     println!("{} ({:.2})", suggestion.path().display(), suggestion.score());
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
    max_results: usize,
    budget: SearchBudget,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::from_settings(&FuzzySettings::default())
    }
}

impl FuzzyMatcher {
    /// Create a matcher with default threshold (0.3) and limit (10).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from configured settings.
    #[must_use]
    pub fn from_settings(settings: &FuzzySettings) -> Self {
        Self {
            threshold: settings.threshold,
            max_results: settings.max_results,
            budget: settings.budget,
        }
    }

    /// Set the minimum similarity ratio.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the maximum number of suggestions.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the walk bounds.
    #[must_use]
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Suggest files resembling `target`.
    ///
    /// Only the final component of `target` is compared, case-insensitively,
    /// against each file name. Files failing `filter` are skipped. Roots are
    /// walked in order and a file reachable from several roots is reported
    /// once. Unreadable entries are skipped.
    #[must_use]
    pub fn suggest(
        &self,
        target: &str,
        filter: &ExtensionFilter,
        roots: &[CandidateRoot],
    ) -> Vec<Suggestion> {
        let target_name = basename(target).to_lowercase();
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut visited = 0usize;

        'roots: for root in roots {
            let mut walker = WalkDir::new(root.path());
            if let Some(depth) = self.budget.max_depth {
                walker = walker.max_depth(depth);
            }

            for entry in walker {
                visited += 1;
                if self.budget.max_entries.is_some_and(|max| visited > max) {
                    log::debug!("Suggestion walk stopped after {} entries", visited - 1);
                    break 'roots;
                }

                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::debug!("Cannot access entry under {}: {e}", root.path().display());
                        continue;
                    }
                };

                if entry.file_type().is_dir() || !entry.path().is_file() {
                    continue;
                }

                let path = entry.path();
                if !filter.matches(path) {
                    continue;
                }

                let name = entry.file_name().to_string_lossy().to_lowercase();
                let score = similarity(&target_name, &name);
                if score >= self.threshold && seen.insert(path.to_path_buf()) {
                    kept.push(Suggestion::new(path.to_path_buf(), score));
                }
            }
        }

        kept.sort_by(Suggestion::rank);
        kept.truncate(self.max_results);
        kept
    }
}

/// Final `/`-separated component of a normalized path string.
fn basename(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}
