/// Score produced whenever a grade string cannot be read.
const FALLBACK_SCORE: f64 = 3.0;

/// Parses an Indonesian civil-service grade (`I/a` through `IV/e`) into a
/// continuous score: Roman tier 1-4 plus sub-rank letter as fifths, so
/// `III/c` becomes `3 + 3 * 0.2 = 3.6`.
///
/// Total over all inputs. A missing separator, extra segments, or an
/// unrecognized tier/letter resolve toward the mid-range default rather
/// than an error; the Roman part is case-sensitive, the letter is not.
pub fn parse_grade(raw: &str) -> f64 {
    let mut segments = raw.trim().split('/');
    let (Some(roman), Some(letter), None) = (segments.next(), segments.next(), segments.next())
    else {
        return FALLBACK_SCORE;
    };

    let tier = match roman.trim() {
        "I" => 1.0,
        "II" => 2.0,
        "III" => 3.0,
        "IV" => 4.0,
        _ => 3.0,
    };

    let sub_rank = match letter.trim().to_ascii_lowercase().as_str() {
        "a" => 1.0,
        "b" => 2.0,
        "c" => 3.0,
        "d" => 4.0,
        "e" => 5.0,
        _ => 3.0,
    };

    tier + sub_rank * 0.2
}
