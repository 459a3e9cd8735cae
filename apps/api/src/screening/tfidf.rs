//! Pairwise TF-IDF cosine scorer.
//!
//! The fitting corpus is the (reference, candidate) pair itself: IDF values
//! are relative to one comparison and scores are not comparable across
//! different reference texts. Scoring a batch means scoring each pair
//! independently.

use std::collections::{BTreeSet, HashMap};

/// Documents in the fitting corpus: always the pair being compared.
const CORPUS_SIZE: f64 = 2.0;

/// Scores a candidate pseudo-document against a reference pseudo-document.
///
/// Both inputs are space-separated keyword strings. Builds a smoothed TF-IDF
/// vector per document over the pair's joint vocabulary, takes their cosine
/// similarity, scales to [0, 100] and rounds to 2 decimals (half away from
/// zero, i.e. round-half-up for the non-negative values produced here).
///
/// An empty pair has no vocabulary and scores 0.0; a zero-magnitude vector
/// on either side also scores 0.0. Never returns NaN.
pub fn match_score(reference: &str, candidate: &str) -> f64 {
    let ref_counts = term_counts(reference);
    let cand_counts = term_counts(candidate);
    if ref_counts.is_empty() && cand_counts.is_empty() {
        return 0.0;
    }

    // Joint vocabulary in a stable order.
    let vocab: BTreeSet<&str> = ref_counts.keys().chain(cand_counts.keys()).copied().collect();

    let mut ref_vec = Vec::with_capacity(vocab.len());
    let mut cand_vec = Vec::with_capacity(vocab.len());
    for term in &vocab {
        let tf_ref = *ref_counts.get(term).unwrap_or(&0) as f64;
        let tf_cand = *cand_counts.get(term).unwrap_or(&0) as f64;
        let df = (tf_ref > 0.0) as u32 + (tf_cand > 0.0) as u32;
        let idf = inverse_document_frequency(df);
        ref_vec.push(tf_ref * idf);
        cand_vec.push(tf_cand * idf);
    }

    round2(cosine_similarity(&ref_vec, &cand_vec) * 100.0)
}

fn term_counts(doc: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for term in doc.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Smoothed IDF: `ln((1 + N) / (1 + df)) + 1` with N = 2. A term present in
/// both documents weighs 1.0; a term in only one weighs `ln(1.5) + 1`.
fn inverse_document_frequency(document_frequency: u32) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + f64::from(document_frequency))).ln() + 1.0
}

/// Dot product over the product of magnitudes; 0.0 when either magnitude is
/// zero rather than a division error.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_100() {
        assert_eq!(match_score("developer python", "developer python"), 100.0);
    }

    #[test]
    fn test_both_empty_score_0() {
        assert_eq!(match_score("", ""), 0.0);
    }

    #[test]
    fn test_one_empty_score_0() {
        assert_eq!(match_score("backend java", ""), 0.0);
        assert_eq!(match_score("", "backend java"), 0.0);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_0() {
        assert_eq!(match_score("backend engineer java", "designer frontend react"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = "developer needed python";
        let b = "developer experienced python";
        assert_eq!(match_score(a, b), match_score(b, a));
    }

    #[test]
    fn test_partial_overlap_is_strictly_between_0_and_100() {
        let score = match_score("developer needed python", "developer experienced python");
        assert!(score > 0.0 && score < 100.0, "score was {score}");
    }

    #[test]
    fn test_pinned_value_subset_pair() {
        // Vocabulary {developer, python}; "python" appears in both (idf 1.0),
        // "developer" only in the reference (idf ln(1.5) + 1 ≈ 1.405465).
        // cos = 1 / sqrt(1 + 1.405465^2) ≈ 0.579738 → 57.97.
        assert_eq!(match_score("developer python", "python"), 57.97);
    }

    #[test]
    fn test_score_in_range_for_assorted_inputs() {
        let docs = ["", "rust", "rust go", "java kotlin scala", "a b c d e f"];
        for reference in &docs {
            for candidate in &docs {
                let score = match_score(reference, candidate);
                assert!(
                    (0.0..=100.0).contains(&score),
                    "score({reference:?}, {candidate:?}) = {score}"
                );
            }
        }
    }

    #[test]
    fn test_rounding_is_half_up_to_2_decimals() {
        assert_eq!(round2(57.974), 57.97);
        assert_eq!(round2(57.976), 57.98);
        // 0.125 is exactly representable; the .5 case rounds away from zero
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.004), 0.0);
    }

    #[test]
    fn test_shared_term_idf_is_1() {
        assert!((inverse_document_frequency(2) - 1.0).abs() < f64::EPSILON);
    }
}
