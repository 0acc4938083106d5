/*!
 * Syllable estimation.
 *
 * Counts vowel-group starts rather than vowels, so diphthongs such as
 * "ue" in "fuego" count once. This is an approximation for syllable-timed
 * languages, not a phonetic syllabifier.
 */

/// Vowels that open a syllabic nucleus
const VOWELS: [char; 11] = ['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú', 'ü'];

/// Check whether a lowercase character belongs to the vowel set
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Estimate the number of syllables in a line.
///
/// Returns at least 1 for any line with visible content and 0 only for
/// blank input.
pub fn estimate(line: &str) -> usize {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;

    for c in trimmed.chars().flat_map(char::to_lowercase) {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    count.max(1)
}
