//! Pairwise Comparison UseCase Implementation
//!
//! Enumerates every cross-group pair in a fixed order:
//!
//! ```text
//! for i in 0..groups            (left group)
//!   for j in i+1..groups        (right group)
//!     for left in groups[i]     (list order)
//!       for right in groups[j]  (list order)
//! ```
//!
//! Files inside one group are never compared with each other. Each file is
//! parsed once per run.
//!
//! With [`TextualFallback::Either`] a pair whose structural score misses the
//! threshold gets a second chance through the character-sequence ratio and
//! is tagged [`MatchMethod::Textual`] when that reaches it.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::features::clone_detection::domain::{
    text_ratio, ComparisonOptions, MatchMethod, MatchRecord, SimilarityOutcome, TextualFallback,
};
use crate::features::clone_detection::infrastructure::TreeSimilarityScorer;
use crate::features::parsing::{ParsedTree, Parser, TreeSitterParser};
use crate::shared::models::{SourceFile, SubmissionGroup};

/// Input for pairwise comparison
pub struct ComparisonInput<'a> {
    pub groups: &'a [SubmissionGroup],
    /// Percentage; a pair is reported when its similarity is `>=` this
    pub threshold: f64,
}

/// Output from pairwise comparison
#[derive(Debug, Clone)]
pub struct ComparisonOutput {
    pub matches: Vec<MatchRecord>,
    pub stats: ComparisonStats,
}

/// Comparison statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    pub groups: usize,
    pub files: usize,
    pub pairs_compared: usize,
    pub pairs_skipped: usize,
    /// Files with usable content that did not parse
    pub parse_failures: usize,
    /// Pairs scored with the textual ratio
    pub textual_fallbacks: usize,
    pub execution_time_ms: u64,
}

/// Pairwise Comparison UseCase Trait
pub trait PlagiarismUseCase: Send + Sync {
    /// Compare all cross-group pairs, keeping those at or above the threshold
    fn compare(&self, input: ComparisonInput) -> ComparisonOutput;
}

/// Per-file state, computed once per run
enum Prepared<'a> {
    /// No usable content; every pair with this file is skipped
    Unavailable,
    Ready {
        file: &'a SourceFile,
        content: &'a str,
        tree: Option<ParsedTree>,
    },
}

/// One comparison to run: (left group, left file, right group, right file)
type PairTask = (usize, usize, usize, usize);

struct PairResult {
    record: Option<MatchRecord>,
    textual: bool,
}

/// Pairwise Comparison UseCase Implementation
#[derive(Debug, Default)]
pub struct PlagiarismUseCaseImpl<P: Parser = TreeSitterParser> {
    scorer: TreeSimilarityScorer<P>,
    options: ComparisonOptions,
}

impl PlagiarismUseCaseImpl<TreeSitterParser> {
    pub fn new(options: ComparisonOptions) -> Self {
        Self::with_parser(TreeSitterParser::python(), options)
    }
}

impl<P: Parser> PlagiarismUseCaseImpl<P> {
    pub fn with_parser(parser: P, options: ComparisonOptions) -> Self {
        Self {
            scorer: TreeSimilarityScorer::new(parser).with_strip_comments(options.strip_comments),
            options,
        }
    }

    pub fn options(&self) -> ComparisonOptions {
        self.options
    }

    fn fan_out(&self) -> bool {
        cfg!(feature = "parallel") && self.options.parallel
    }

    fn prepare_file<'a>(&self, file: &'a SourceFile) -> Prepared<'a> {
        match file.usable_content() {
            None => Prepared::Unavailable,
            Some(content) => Prepared::Ready {
                file,
                content,
                tree: self.scorer.prepare(content, &file.identifier()),
            },
        }
    }

    fn prepare_groups<'a>(&self, groups: &'a [SubmissionGroup]) -> Vec<Vec<Prepared<'a>>> {
        if self.fan_out() {
            return groups
                .par_iter()
                .map(|g| g.files.par_iter().map(|f| self.prepare_file(f)).collect())
                .collect();
        }

        groups
            .iter()
            .map(|g| g.files.iter().map(|f| self.prepare_file(f)).collect())
            .collect()
    }

    fn score_pair(
        &self,
        threshold: f64,
        left: (&SourceFile, &str, Option<&ParsedTree>),
        right: (&SourceFile, &str, Option<&ParsedTree>),
    ) -> PairResult {
        let (left_file, left_text, left_tree) = left;
        let (right_file, right_text, right_tree) = right;

        let outcome = TreeSimilarityScorer::<P>::score_trees(left_tree, right_tree);
        let (similarity, method) = match (self.options.textual_fallback, outcome) {
            (TextualFallback::Off, outcome) => (outcome.percentage(), MatchMethod::Structural),
            (_, SimilarityOutcome::ParseFailure { .. }) => {
                (text_ratio(left_text, right_text), MatchMethod::Textual)
            }
            (TextualFallback::Either, SimilarityOutcome::Scored(score)) if score < threshold => {
                (text_ratio(left_text, right_text), MatchMethod::Textual)
            }
            (_, outcome) => (outcome.percentage(), MatchMethod::Structural),
        };

        let record = (similarity >= threshold)
            .then(|| MatchRecord::from_pair(left_file, right_file, similarity, method));

        PairResult {
            record,
            textual: method == MatchMethod::Textual,
        }
    }

    fn run_task(&self, prepared: &[Vec<Prepared>], threshold: f64, task: PairTask) -> PairResult {
        let (gi, fi, gj, fj) = task;
        match (&prepared[gi][fi], &prepared[gj][fj]) {
            (
                Prepared::Ready {
                    file: lf,
                    content: lc,
                    tree: lt,
                },
                Prepared::Ready {
                    file: rf,
                    content: rc,
                    tree: rt,
                },
            ) => self.score_pair(threshold, (*lf, *lc, lt.as_ref()), (*rf, *rc, rt.as_ref())),
            _ => PairResult {
                record: None,
                textual: false,
            },
        }
    }

    fn run_tasks(
        &self,
        prepared: &[Vec<Prepared>],
        threshold: f64,
        tasks: &[PairTask],
    ) -> Vec<PairResult> {
        // Both paths keep task order, so the output is identical
        if self.fan_out() {
            return tasks
                .par_iter()
                .map(|&task| self.run_task(prepared, threshold, task))
                .collect();
        }

        tasks
            .iter()
            .map(|&task| self.run_task(prepared, threshold, task))
            .collect()
    }
}

/// Enumerate comparable pairs in report order, counting skipped ones
fn enumerate_tasks(prepared: &[Vec<Prepared>]) -> (Vec<PairTask>, usize) {
    let mut tasks = Vec::new();
    let mut skipped = 0;

    for gi in 0..prepared.len() {
        for gj in (gi + 1)..prepared.len() {
            for (fi, left) in prepared[gi].iter().enumerate() {
                for (fj, right) in prepared[gj].iter().enumerate() {
                    match (left, right) {
                        (Prepared::Ready { .. }, Prepared::Ready { .. }) => {
                            tasks.push((gi, fi, gj, fj))
                        }
                        _ => skipped += 1,
                    }
                }
            }
        }
    }

    (tasks, skipped)
}

impl<P: Parser> PlagiarismUseCase for PlagiarismUseCaseImpl<P> {
    fn compare(&self, input: ComparisonInput) -> ComparisonOutput {
        let start = std::time::Instant::now();

        let prepared = self.prepare_groups(input.groups);
        let parse_failures = prepared
            .iter()
            .flatten()
            .filter(|p| matches!(p, Prepared::Ready { tree: None, .. }))
            .count();

        let (tasks, pairs_skipped) = enumerate_tasks(&prepared);
        debug!(
            "comparing {} pairs across {} groups (parallel: {}, textual: {})",
            tasks.len(),
            input.groups.len(),
            self.options.parallel,
            self.options.textual_fallback.as_str()
        );

        let results = self.run_tasks(&prepared, input.threshold, &tasks);
        let textual_fallbacks = results.iter().filter(|r| r.textual).count();
        let matches: Vec<MatchRecord> = results.into_iter().filter_map(|r| r.record).collect();

        let stats = ComparisonStats {
            groups: input.groups.len(),
            files: input.groups.iter().map(SubmissionGroup::len).sum(),
            pairs_compared: tasks.len(),
            pairs_skipped,
            parse_failures,
            textual_fallbacks,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "plagiarism check: {} pairs compared, {} matches at >= {}%",
            stats.pairs_compared,
            matches.len(),
            input.threshold
        );

        ComparisonOutput { matches, stats }
    }
}
