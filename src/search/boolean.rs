//! Boolean query engine over sorted posting lists.
//!
//! Set algebra (`intersect`, `union`, `complement`) via linear two-pointer
//! merges, plus an expression evaluator: `and`/`or`/`not` keywords
//! (case-insensitive) with parentheses, parsed by shunting-yard into RPN
//! and evaluated against the index. Operands are normalized through the
//! pipeline during conversion. Malformed expressions evaluate to an empty
//! result rather than an error.

use crate::index::{DocId, InvertedIndex};
use crate::text::Pipeline;

/// Sorted intersection of two sorted duplicate-free lists.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
        }
    }
    out
}

/// Sorted union of two sorted duplicate-free lists.
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// `[0, doc_count) \ a` in sorted order, for sorted duplicate-free `a`.
pub fn complement(a: &[DocId], doc_count: usize) -> Vec<DocId> {
    let mut out = Vec::with_capacity(doc_count.saturating_sub(a.len()));
    let mut i = 0;
    for doc in 0..doc_count as DocId {
        if i < a.len() && a[i] == doc {
            i += 1;
        } else {
            out.push(doc);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryToken {
    Term(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// RPN atom: an operand already normalized, or an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RpnToken {
    Term(String),
    And,
    Or,
    Not,
}

fn precedence(op: &QueryToken) -> u8 {
    match op {
        QueryToken::Not => 3,
        QueryToken::And => 2,
        QueryToken::Or => 1,
        _ => 0,
    }
}

fn is_left_associative(op: &QueryToken) -> bool {
    !matches!(op, QueryToken::Not)
}

fn is_operator(tok: &QueryToken) -> bool {
    matches!(tok, QueryToken::And | QueryToken::Or | QueryToken::Not)
}

fn classify(word: &str) -> QueryToken {
    if word.eq_ignore_ascii_case("and") {
        QueryToken::And
    } else if word.eq_ignore_ascii_case("or") {
        QueryToken::Or
    } else if word.eq_ignore_ascii_case("not") {
        QueryToken::Not
    } else {
        QueryToken::Term(word.to_string())
    }
}

/// Splits an expression into operand tokens, operator keywords, and
/// parentheses. Parentheses are self-delimiting; everything else is
/// whitespace-delimited.
fn lex(expression: &str) -> Vec<QueryToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in expression.chars() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(classify(&current));
                current.clear();
            }
        } else if c == '(' || c == ')' {
            if !current.is_empty() {
                tokens.push(classify(&current));
                current.clear();
            }
            tokens.push(if c == '(' {
                QueryToken::LParen
            } else {
                QueryToken::RParen
            });
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(classify(&current));
    }
    tokens
}

/// Shunting-yard conversion to RPN. Operands are normalized through the
/// pipeline on the way out. Mismatched parentheses are dropped silently.
fn to_rpn(tokens: Vec<QueryToken>, pipeline: &Pipeline) -> Vec<RpnToken> {
    let mut output = Vec::new();
    let mut operators: Vec<QueryToken> = Vec::new();

    for token in tokens {
        match token {
            QueryToken::LParen => operators.push(token),
            QueryToken::RParen => {
                while let Some(top) = operators.last() {
                    if *top == QueryToken::LParen {
                        break;
                    }
                    push_operator(&mut output, operators.pop().unwrap());
                }
                if operators.last() == Some(&QueryToken::LParen) {
                    operators.pop();
                }
            }
            QueryToken::And | QueryToken::Or | QueryToken::Not => {
                while let Some(top) = operators.last() {
                    if !is_operator(top) {
                        break;
                    }
                    let keep_popping = precedence(top) > precedence(&token)
                        || (precedence(top) == precedence(&token) && is_left_associative(&token));
                    if !keep_popping {
                        break;
                    }
                    push_operator(&mut output, operators.pop().unwrap());
                }
                operators.push(token);
            }
            QueryToken::Term(term) => {
                output.push(RpnToken::Term(pipeline.normalize_term(&term)));
            }
        }
    }

    while let Some(op) = operators.pop() {
        if is_operator(&op) {
            push_operator(&mut output, op);
        }
    }

    output
}

fn push_operator(output: &mut Vec<RpnToken>, op: QueryToken) {
    output.push(match op {
        QueryToken::And => RpnToken::And,
        QueryToken::Or => RpnToken::Or,
        QueryToken::Not => RpnToken::Not,
        _ => return,
    });
}

/// Evaluates an RPN stream against the index. Operand underflow (a
/// malformed expression) yields an empty result.
fn eval_rpn(rpn: &[RpnToken], index: &InvertedIndex) -> Vec<DocId> {
    let mut stack: Vec<Vec<DocId>> = Vec::new();
    for token in rpn {
        match token {
            RpnToken::Term(term) => stack.push(index.posting_list(term).to_vec()),
            RpnToken::Not => {
                let Some(a) = stack.pop() else {
                    return Vec::new();
                };
                stack.push(complement(&a, index.document_count()));
            }
            RpnToken::And | RpnToken::Or => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Vec::new();
                };
                stack.push(match token {
                    RpnToken::And => intersect(&a, &b),
                    _ => union(&a, &b),
                });
            }
        }
    }
    stack.pop().unwrap_or_default()
}

/// Evaluates a Boolean expression and returns the matching doc ids in
/// ascending order.
pub fn boolean_query(index: &InvertedIndex, pipeline: &Pipeline, expression: &str) -> Vec<DocId> {
    let rpn = to_rpn(lex(expression), pipeline);
    eval_rpn(&rpn, index)
}

/// Documents containing every one of the normalized terms. Empty input
/// yields an empty result.
pub fn search_and<S: AsRef<str>>(index: &InvertedIndex, terms: &[S]) -> Vec<DocId> {
    let Some((first, rest)) = terms.split_first() else {
        return Vec::new();
    };
    let mut result = index.posting_list(first.as_ref()).to_vec();
    for term in rest {
        if result.is_empty() {
            break;
        }
        result = intersect(&result, index.posting_list(term.as_ref()));
    }
    result
}

/// Documents containing at least one of the normalized terms.
pub fn search_or<S: AsRef<str>>(index: &InvertedIndex, terms: &[S]) -> Vec<DocId> {
    let mut result = Vec::new();
    for term in terms {
        result = union(&result, index.posting_list(term.as_ref()));
    }
    result
}

/// Documents containing every `include` term and none of the `exclude`
/// terms.
pub fn search_and_not<S: AsRef<str>>(
    index: &InvertedIndex,
    include: &[S],
    exclude: &[S],
) -> Vec<DocId> {
    let mut result = search_and(index, include);
    for term in exclude {
        if result.is_empty() {
            break;
        }
        let excluded = index.posting_list(term.as_ref());
        result.retain(|doc| excluded.binary_search(doc).is_err());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Pipeline;

    fn build_index(docs: &[&str]) -> (InvertedIndex, Pipeline) {
        let pipeline = Pipeline::new();
        let mut index = InvertedIndex::new();
        for doc in docs {
            let terms = pipeline.process(doc);
            index.append(&terms);
        }
        (index, pipeline)
    }

    #[test]
    fn test_intersect_basic() {
        assert_eq!(intersect(&[0, 1, 3, 5], &[1, 2, 3]), vec![1, 3]);
        assert_eq!(intersect(&[], &[1, 2]), Vec::<DocId>::new());
        assert_eq!(intersect(&[1, 2], &[]), Vec::<DocId>::new());
    }

    #[test]
    fn test_union_basic() {
        assert_eq!(union(&[0, 2], &[1, 2, 4]), vec![0, 1, 2, 4]);
        assert_eq!(union(&[], &[1, 2]), vec![1, 2]);
        assert_eq!(union(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn test_complement_exact() {
        assert_eq!(complement(&[1, 3], 5), vec![0, 2, 4]);
        assert_eq!(complement(&[], 3), vec![0, 1, 2]);
        assert_eq!(complement(&[0, 1, 2], 3), Vec::<DocId>::new());
        assert_eq!(complement(&[], 0), Vec::<DocId>::new());
    }

    #[test]
    fn test_merge_outputs_sorted_and_distinct() {
        let a = vec![0, 1, 4, 7];
        let b = vec![1, 2, 4, 9];
        for out in [intersect(&a, &b), union(&a, &b)] {
            for pair in out.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_single_term_query() {
        let (index, pipeline) = build_index(&["cat dog", "cat bird", "fish"]);
        assert_eq!(boolean_query(&index, &pipeline, "cat"), vec![0, 1]);
        assert_eq!(boolean_query(&index, &pipeline, "fish"), vec![2]);
    }

    #[test]
    fn test_and_query() {
        let (index, pipeline) = build_index(&["cat dog", "cat bird", "fish"]);
        assert_eq!(boolean_query(&index, &pipeline, "cat AND dog"), vec![0]);
    }

    #[test]
    fn test_or_not_query() {
        let (index, pipeline) = build_index(&["cat dog", "cat bird", "fish"]);
        assert_eq!(
            boolean_query(&index, &pipeline, "fish OR NOT fish"),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let (index, pipeline) = build_index(&["red apple", "green apple", "red banana"]);
        assert_eq!(
            boolean_query(&index, &pipeline, "(red OR green) AND NOT banana"),
            vec![0, 1]
        );
        // Without parentheses, AND binds tighter than OR.
        assert_eq!(
            boolean_query(&index, &pipeline, "red OR green AND NOT banana"),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_not_is_right_associative() {
        let (index, pipeline) = build_index(&["cat", "dog"]);
        assert_eq!(boolean_query(&index, &pipeline, "NOT NOT cat"), vec![0]);
    }

    #[test]
    fn test_operators_case_insensitive() {
        let (index, pipeline) = build_index(&["red apple", "green apple", "red banana"]);
        assert_eq!(
            boolean_query(&index, &pipeline, "red and not banana"),
            vec![0]
        );
        assert_eq!(
            boolean_query(&index, &pipeline, "Red And Not Banana"),
            vec![0]
        );
    }

    #[test]
    fn test_operands_are_normalized() {
        let (index, pipeline) = build_index(&["running dogs", "sleeping cats"]);
        assert_eq!(boolean_query(&index, &pipeline, "runs AND dog"), vec![0]);
    }

    #[test]
    fn test_unknown_term_yields_empty() {
        let (index, pipeline) = build_index(&["cat dog"]);
        assert!(boolean_query(&index, &pipeline, "unicorn").is_empty());
        assert!(boolean_query(&index, &pipeline, "cat AND unicorn").is_empty());
    }

    #[test]
    fn test_malformed_expressions_yield_empty() {
        let (index, pipeline) = build_index(&["cat dog", "cat bird"]);
        assert!(boolean_query(&index, &pipeline, "").is_empty());
        assert!(boolean_query(&index, &pipeline, "AND").is_empty());
        assert!(boolean_query(&index, &pipeline, "cat AND").is_empty());
        assert!(boolean_query(&index, &pipeline, "NOT").is_empty());
        assert!(boolean_query(&index, &pipeline, "AND cat").is_empty());
    }

    #[test]
    fn test_mismatched_parentheses_are_lenient() {
        let (index, pipeline) = build_index(&["cat dog", "cat bird"]);
        assert_eq!(boolean_query(&index, &pipeline, "(cat AND dog"), vec![0]);
        assert_eq!(boolean_query(&index, &pipeline, "cat AND dog)"), vec![0]);
    }

    #[test]
    fn test_search_and_multi_term() {
        let (index, _) = build_index(&["cat dog fish", "cat dog", "cat"]);
        assert_eq!(search_and(&index, &["cat", "dog"]), vec![0, 1]);
        assert_eq!(search_and(&index, &["cat", "dog", "fish"]), vec![0]);
        assert!(search_and::<&str>(&index, &[]).is_empty());
        assert!(search_and(&index, &["cat", "absent"]).is_empty());
    }

    #[test]
    fn test_search_or_multi_term() {
        let (index, _) = build_index(&["cat", "dog", "fish"]);
        assert_eq!(search_or(&index, &["cat", "fish"]), vec![0, 2]);
        assert!(search_or::<&str>(&index, &[]).is_empty());
    }

    #[test]
    fn test_search_and_not() {
        let (index, _) = build_index(&["cat dog", "cat bird", "cat"]);
        assert_eq!(search_and_not(&index, &["cat"], &["bird"]), vec![0, 2]);
        assert_eq!(
            search_and_not(&index, &["cat"], &["dog", "bird"]),
            vec![2]
        );
        assert_eq!(search_and_not(&index, &["cat"], &[]), vec![0, 1, 2]);
    }

    #[test]
    fn test_results_within_document_range() {
        let (index, pipeline) = build_index(&["cat", "dog", "cat dog"]);
        let result = boolean_query(&index, &pipeline, "NOT cat OR dog");
        for id in result {
            assert!((id as usize) < index.document_count());
        }
    }
}
