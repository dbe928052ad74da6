//! Feedback calculation for a submitted sequence
//!
//! Feedback has two categories:
//! - exact: the right symbol in the right slot
//! - misplaced: a symbol the code holds, but in another slot
//!
//! Duplicate symbols are rationed: every occurrence in the code can back at
//! most one piece of feedback, exact matches claim theirs first, and the
//! remaining occurrences are handed out to guesses from left to right.

use super::{SecretCode, Sequence, Symbol};
use rustc_hash::FxHashMap;
use std::fmt;

/// Exact and misplaced counts for one executed turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HintSummary {
    pub exact: usize,
    pub misplaced: usize,
}

impl HintSummary {
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// `true` when there is nothing to report
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.exact == 0 && self.misplaced == 0
    }
}

impl fmt::Display for HintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

/// Result of scoring a sequence against the code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Every slot matches; no hints are produced
    Solved,
    Unsolved(HintSummary),
}

impl Evaluation {
    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }

    /// Hints for this evaluation (empty when solved)
    #[must_use]
    pub const fn hints(self) -> HintSummary {
        match self {
            Self::Solved => HintSummary::new(0, 0),
            Self::Unsolved(hints) => hints,
        }
    }
}

/// Score `guess` against `code`
///
/// Empty slots in the guess never match and are never credited.
///
/// # Algorithm
/// 1. Full match: return `Solved` without computing hints
/// 2. First pass: flag exact slots and pool the code symbols they did not claim
/// 3. Second pass: walk the non-exact slots left to right, crediting a
///    misplaced hint while the pool still holds that symbol
///
/// # Panics
/// Panics if the sequences differ in length. That is a caller bug, not a
/// player mistake.
///
/// # Examples
/// ```
/// use panel_repair::core::{HintSummary, SecretCode, Sequence, Symbol, evaluate};
///
/// let sym = |s: &str| Symbol::new(s).unwrap();
/// let code = SecretCode::new(vec![sym("a"), sym("b"), sym("a"), sym("c")]);
/// let guess = Sequence::from_entries(
///     ["a", "a", "b", "b"].into_iter().map(|s| Some(sym(s))).collect(),
/// );
///
/// assert_eq!(evaluate(&code, &guess).hints(), HintSummary::new(1, 2));
/// ```
#[must_use]
pub fn evaluate(code: &SecretCode, guess: &Sequence) -> Evaluation {
    let code = code.symbols();
    let guess = guess.entries();
    assert_eq!(
        code.len(),
        guess.len(),
        "sequence length must match the code length"
    );

    let exact_flags: Vec<bool> = code
        .iter()
        .zip(guess)
        .map(|(wanted, placed)| placed.as_ref() == Some(wanted))
        .collect();

    if exact_flags.iter().all(|&flag| flag) {
        return Evaluation::Solved;
    }

    // Code symbols not already claimed by an exact match
    let mut available: FxHashMap<&Symbol, usize> = FxHashMap::default();
    for (symbol, &is_exact) in code.iter().zip(&exact_flags) {
        if !is_exact {
            *available.entry(symbol).or_insert(0) += 1;
        }
    }

    let mut misplaced = 0;
    for (placed, &is_exact) in guess.iter().zip(&exact_flags) {
        if is_exact {
            continue;
        }
        if let Some(symbol) = placed
            && let Some(count) = available.get_mut(symbol)
            && *count > 0
        {
            *count -= 1;
            misplaced += 1;
        }
    }

    let exact = exact_flags.iter().filter(|&&flag| flag).count();
    Evaluation::Unsolved(HintSummary::new(exact, misplaced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sym(text: &str) -> Symbol {
        Symbol::new(text).unwrap()
    }

    fn code(symbols: &[&str]) -> SecretCode {
        SecretCode::new(symbols.iter().map(|s| sym(s)).collect())
    }

    fn guess(entries: &[&str]) -> Sequence {
        Sequence::from_entries(
            entries
                .iter()
                .map(|&s| if s == "_" { None } else { Some(sym(s)) })
                .collect(),
        )
    }

    /// Brute-force reference: common multiset size minus exact matches
    fn reference(code: &[&str], guess: &[&str]) -> HintSummary {
        let exact = code.iter().zip(guess).filter(|(c, g)| c == g).count();
        let mut remaining: Vec<&str> = code.to_vec();
        let mut common = 0;
        for g in guess {
            if let Some(pos) = remaining.iter().position(|c| c == g) {
                remaining.swap_remove(pos);
                common += 1;
            }
        }
        HintSummary::new(exact, common - exact)
    }

    #[test]
    fn full_match_is_solved() {
        let evaluation = evaluate(&code(&["x", "y", "x"]), &guess(&["x", "y", "x"]));
        assert_eq!(evaluation, Evaluation::Solved);
        assert!(evaluation.hints().is_empty());
    }

    #[test]
    fn no_common_symbols() {
        let evaluation = evaluate(&code(&["a", "b", "c"]), &guess(&["d", "e", "f"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(0, 0)));
    }

    #[test]
    fn duplicate_symbols_are_rationed() {
        // A at slot 0 is exact; the second A in the code backs the A at slot 1.
        // The single B in the code backs only the first B guess.
        let evaluation = evaluate(&code(&["a", "b", "a", "c"]), &guess(&["a", "a", "b", "b"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(1, 2)));
    }

    #[test]
    fn exact_match_claims_occurrence_before_misplaced() {
        // The only B is consumed by the exact match at slot 1
        let evaluation = evaluate(&code(&["a", "b"]), &guess(&["b", "b"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(1, 0)));
    }

    #[test]
    fn repeated_guess_against_single_occurrence() {
        let evaluation = evaluate(&code(&["a", "b", "c", "d"]), &guess(&["d", "d", "d", "a"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(0, 2)));
    }

    #[test]
    fn all_misplaced_permutation() {
        let evaluation = evaluate(&code(&["a", "b", "c"]), &guess(&["c", "a", "b"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(0, 3)));
    }

    #[test]
    fn empty_slots_score_nothing() {
        let evaluation = evaluate(&code(&["x", "y"]), &guess(&["x", "_"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(1, 0)));

        let evaluation = evaluate(&code(&["x", "y"]), &guess(&["_", "_"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(0, 0)));
    }

    #[test]
    fn distinct_symbols_share_count() {
        // Without repeats, exact + misplaced equals the shared symbol count
        let evaluation = evaluate(&code(&["a", "b", "c", "d"]), &guess(&["a", "c", "e", "b"]));
        assert_eq!(evaluation, Evaluation::Unsolved(HintSummary::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "sequence length must match")]
    fn length_mismatch_panics() {
        let _ = evaluate(&code(&["a", "b"]), &guess(&["a"]));
    }

    #[test]
    fn matches_multiset_reference_on_random_pairs() {
        let alphabet = ["a", "b", "c", "d"];
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2000 {
            let len = rng.random_range(1..=6);
            let code_syms: Vec<&str> = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            let guess_syms: Vec<&str> = (0..len)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();

            let evaluation = evaluate(&code(&code_syms), &guess(&guess_syms));
            if code_syms == guess_syms {
                assert_eq!(evaluation, Evaluation::Solved);
            } else {
                assert_eq!(
                    evaluation,
                    Evaluation::Unsolved(reference(&code_syms, &guess_syms)),
                    "code {code_syms:?} guess {guess_syms:?}"
                );
            }
        }
    }

    #[test]
    fn distinct_symbols_match_reference_exhaustively() {
        // Every ordered pick of 3 from 5 distinct symbols against a fixed code
        let alphabet = ["a", "b", "c", "d", "e"];
        let fixed = ["b", "d", "a"];
        for &x in &alphabet {
            for &y in &alphabet {
                for &z in &alphabet {
                    if x == y || y == z || x == z {
                        continue;
                    }
                    let g = [x, y, z];
                    let hints = evaluate(&code(&fixed), &guess(&g)).hints();
                    let shared = g.iter().filter(|s| fixed.contains(*s)).count();
                    let agreeing = g.iter().zip(&fixed).filter(|(a, b)| a == b).count();
                    if g != fixed {
                        assert_eq!(hints.exact + hints.misplaced, shared);
                        assert_eq!(hints.exact, agreeing);
                    }
                }
            }
        }
    }
}
