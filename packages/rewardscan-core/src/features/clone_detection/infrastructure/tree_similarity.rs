//! Syntax-tree similarity scorer
//!
//! Both inputs are parsed, then walked in lockstep from the root:
//!
//! ```text
//! count_nodes(n)      = 1 + Σ count_nodes(child)
//! count_matches(a, b) = 0                                   if labels differ
//!                     = 1 + Σ count_matches(a[i], b[i])     i < min(|a|, |b|)
//! similarity          = 2 * count_matches / (nodes_a + nodes_b) * 100
//! ```
//!
//! A label mismatch prunes both subtrees, and children past the shorter
//! child list are ignored rather than penalized. Both quirks shape the
//! reported percentages and are kept as is.

use crate::features::clone_detection::domain::{dice_percentage, ParseSide, SimilarityOutcome};
use crate::features::normalization::strip_comments;
use crate::features::parsing::{ParseFileUseCase, ParsedTree, Parser, SyntaxNode, TreeSitterParser};

use super::SimilarityScorer;

/// Total number of nodes in a subtree
pub fn count_nodes(node: &SyntaxNode) -> usize {
    let mut pending = vec![node];
    let mut total = 0;
    while let Some(node) = pending.pop() {
        total += 1;
        pending.extend(node.children.iter());
    }
    total
}

/// Nodes matched by positional lockstep descent
pub fn count_matches(a: &SyntaxNode, b: &SyntaxNode) -> usize {
    let mut pending = vec![(a, b)];
    let mut matches = 0;
    while let Some((a, b)) = pending.pop() {
        // mismatched labels prune both subtrees
        if !a.same_label(b) {
            continue;
        }
        matches += 1;
        pending.extend(a.children.iter().zip(b.children.iter()));
    }
    matches
}

/// Structural scorer over a pluggable parser
#[derive(Debug, Clone, Default)]
pub struct TreeSimilarityScorer<P: Parser = TreeSitterParser> {
    parse: ParseFileUseCase<P>,
    strip_comments: bool,
}

impl TreeSimilarityScorer<TreeSitterParser> {
    pub fn python() -> Self {
        Self::new(TreeSitterParser::python())
    }
}

impl<P: Parser> TreeSimilarityScorer<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parse: ParseFileUseCase::new(parser),
            strip_comments: false,
        }
    }

    /// Strip comments and docstrings before parsing
    pub fn with_strip_comments(mut self, enabled: bool) -> Self {
        self.strip_comments = enabled;
        self
    }

    /// Parse one text, `None` if it is not valid source
    pub fn prepare(&self, source: &str, file_path: &str) -> Option<ParsedTree> {
        if self.strip_comments {
            self.parse.execute_clean(&strip_comments(source), file_path)
        } else {
            self.parse.execute_clean(source, file_path)
        }
    }

    /// Score two already-prepared trees
    pub fn score_trees(left: Option<&ParsedTree>, right: Option<&ParsedTree>) -> SimilarityOutcome {
        match (left, right) {
            (Some(l), Some(r)) => {
                let matches = count_matches(&l.root, &r.root);
                SimilarityOutcome::Scored(dice_percentage(
                    matches,
                    count_nodes(&l.root),
                    count_nodes(&r.root),
                ))
            }
            _ => {
                let side = ParseSide::from_failures(left.is_none(), right.is_none())
                    .unwrap_or(ParseSide::Both);
                SimilarityOutcome::ParseFailure { side }
            }
        }
    }
}

impl<P: Parser> SimilarityScorer for TreeSimilarityScorer<P> {
    fn name(&self) -> &'static str {
        "Syntax Tree Similarity Scorer"
    }

    fn similarity(&self, left: &str, right: &str) -> SimilarityOutcome {
        let l = self.prepare(left, "left");
        let r = self.prepare(right, "right");
        Self::score_trees(l.as_ref(), r.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Span;

    const REWARD: &str = r#"
def reward_function(params):
    all_wheels_on_track = params['all_wheels_on_track']
    speed = params['speed']
    SPEED_THRESHOLD = 1.5

    if not all_wheels_on_track:
        reward = 1e-3
    elif speed < SPEED_THRESHOLD:
        reward = 0.5
    else:
        reward = 1.0

    return float(reward)
"#;

    fn node(kind: &'static str, children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::new(kind, Span::zero()).with_children(children)
    }

    #[test]
    fn test_count_nodes() {
        let tree = node("module", vec![node("a", vec![SyntaxNode::leaf("x", "1")]), SyntaxNode::leaf("y", "2")]);
        assert_eq!(count_nodes(&tree), 4);
    }

    #[test]
    fn test_identical_text_is_100() {
        let scorer = TreeSimilarityScorer::python();
        assert_eq!(scorer.similarity(REWARD, REWARD), SimilarityOutcome::Scored(100.0));
    }

    #[test]
    fn test_single_literal_change_is_close_but_below_100() {
        let scorer = TreeSimilarityScorer::python();
        let changed = REWARD.replace("SPEED_THRESHOLD = 1.5", "SPEED_THRESHOLD = 2.5");

        let score = scorer.similarity(REWARD, &changed).percentage();
        assert!(score < 100.0, "got {}", score);
        assert!(score > 90.0, "got {}", score);
    }

    #[test]
    fn test_symmetric() {
        let scorer = TreeSimilarityScorer::python();
        let other = "def reward_function(params):\n    return 1.0 if params['speed'] > 2 else 0.1\n";
        assert_eq!(
            scorer.similarity(REWARD, other),
            scorer.similarity(other, REWARD)
        );
    }

    #[test]
    fn test_invalid_syntax_is_parse_failure() {
        let scorer = TreeSimilarityScorer::python();
        let outcome = scorer.similarity(REWARD, "def broken(:\n");
        assert_eq!(
            outcome,
            SimilarityOutcome::ParseFailure {
                side: ParseSide::Right
            }
        );
        assert_eq!(outcome.percentage(), 0.0);
    }

    #[test]
    fn test_comments_do_not_change_score() {
        let scorer = TreeSimilarityScorer::python();
        let commented = REWARD.replace("    speed = params['speed']", "    speed = params['speed']  # m/s");
        assert_eq!(scorer.similarity(REWARD, &commented).percentage(), 100.0);
    }

    #[test]
    fn test_label_mismatch_prunes_descendants() {
        let a = node("module", vec![node("expression_statement", vec![SyntaxNode::leaf("integer", "1")])]);
        let b = node("module", vec![node("return_statement", vec![SyntaxNode::leaf("integer", "1")])]);

        assert_eq!(count_matches(&a, &b), 1);
        let pa = ParsedTree::new(a, "a", "python");
        let pb = ParsedTree::new(b, "b", "python");
        let score = TreeSimilarityScorer::<TreeSitterParser>::score_trees(Some(&pa), Some(&pb));
        assert!((score.percentage() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_extra_children_are_ignored_not_penalized_in_matches() {
        let long = node(
            "module",
            vec![SyntaxNode::leaf("pass", "pass"), SyntaxNode::leaf("pass", "pass"), SyntaxNode::leaf("pass", "pass")],
        );
        let short = node("module", vec![SyntaxNode::leaf("pass", "pass")]);

        assert_eq!(count_matches(&long, &short), 2);
        assert_eq!(count_matches(&short, &long), 2);
        // 2 * 2 / (4 + 2)
        let pl = ParsedTree::new(long, "l", "python");
        let ps = ParsedTree::new(short, "s", "python");
        let score = TreeSimilarityScorer::<TreeSitterParser>::score_trees(Some(&pl), Some(&ps));
        assert!((score.percentage() - 200.0 / 3.0).abs() < 1e-9);
    }

    fn nested(depth: usize, innermost: &str) -> String {
        format!("x = {}{}{}\n", "(".repeat(depth), innermost, ")".repeat(depth))
    }

    #[test]
    fn test_deeply_nested_sources_score_without_recursion() {
        let scorer = TreeSimilarityScorer::python();
        let deep = nested(5_000, "1");

        assert_eq!(scorer.similarity(&deep, &deep), SimilarityOutcome::Scored(100.0));

        let changed = scorer.similarity(&deep, &nested(5_000, "2")).percentage();
        assert!(changed < 100.0 && changed > 99.0, "got {}", changed);
    }

    #[test]
    fn test_strip_comments_option_drops_docstrings() {
        let with_doc = "def f():\n    \"\"\"Doc.\"\"\"\n    return 1\n";
        let without = "def f():\n    \n    return 1\n";

        let plain = TreeSimilarityScorer::python();
        assert!(plain.similarity(with_doc, without).percentage() < 100.0);

        let stripping = TreeSimilarityScorer::python().with_strip_comments(true);
        assert_eq!(stripping.similarity(with_doc, without).percentage(), 100.0);
    }
}
