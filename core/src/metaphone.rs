//! Double Metaphone phonetic encoder, plus the classic Soundex variant.
//!
//! A line-by-line port of Lawrence Philips' algorithm as implemented in
//! `original_source/metaphone.c`, including its two well-known quirks,
//! kept deliberately rather than "fixed" to keep
//! reproducing the standard algorithm's actual decisions:
//! - a leading silent `X` contributes `S` to the primary code only, never
//!   the secondary (the original only advances `pri_offset` there);
//! - two comparisons (`CHORE`, `JOSE`) test a byte-difference against the
//!   literal value `1` rather than inequality, a copy-paste slip from the
//!   source that effectively disables those branches. Preserved for
//!   fidelity to the reference behaviour.
//!
//! The original walks a single-byte-per-character C string; here the
//! padded working buffer is a `Vec<char>` (one Unicode scalar per slot)
//! instead, since the rest of this crate treats words as scalar sequences
//! throughout. The encoder is defined over the ASCII alphabet the
//! algorithm was designed for; non-ASCII input simply won't match any
//! branch and falls through unchanged.

/// Output of [`double_metaphone`]: always a primary code, and a secondary
/// code only when it differs from the primary (the source always builds
/// both arrays but in the common case they're byte-identical; suppressing
/// the redundant copy makes the `Option` meaningful).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleMetaphone {
    pub primary: String,
    pub secondary: Option<String>,
}

fn ch_at(buf: &[char], idx: isize) -> char {
    if idx < 0 {
        return '-';
    }
    buf.get(idx as usize).copied().unwrap_or('-')
}

fn starts_at(buf: &[char], idx: isize, pat: &str) -> bool {
    if idx < 0 {
        return false;
    }
    let start = idx as usize;
    let p: Vec<char> = pat.chars().collect();
    if start + p.len() > buf.len() {
        return false;
    }
    buf[start..start + p.len()] == p[..]
}

fn is_in_at(buf: &[char], idx: isize, opts: &[&str]) -> bool {
    opts.iter().any(|o| starts_at(buf, idx, o))
}

fn ncmp_at(buf: &[char], idx: isize, pat: &str) -> i32 {
    for (i, pc) in pat.chars().enumerate() {
        let b = ch_at(buf, idx + i as isize);
        if b != pc {
            return b as i32 - pc as i32;
        }
    }
    0
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Checks for `W`, `K`, or a `C` immediately followed by `Z` anywhere past
/// the first character. Faithfully operates on the *original-case* input,
/// the way `original_source/metaphone.c`'s `is_slavo_germanic` does — it
/// receives the pre-uppercase string, so in callers that lowercase words
/// before encoding (as this crate's tokeniser does) it is effectively
/// always `false`. Preserved rather than "corrected" to uppercase input.
fn is_slavo_germanic(original: &[char]) -> bool {
    if original.is_empty() {
        return false;
    }
    let mut prev = original[0];
    for &c in &original[1..] {
        if c == 'W' || c == 'K' {
            return true;
        }
        if prev == 'C' && c == 'Z' {
            return true;
        }
        prev = c;
    }
    false
}

struct Step {
    pri0: Option<char>,
    pri1: Option<char>,
    sec0: Option<char>,
    sec1: Option<char>,
    offset: usize,
}

impl Step {
    fn new() -> Self {
        Step {
            pri0: None,
            pri1: None,
            sec0: None,
            sec1: None,
            offset: 1,
        }
    }
}

/// Encode `word` per the Double Metaphone algorithm. Returns `None` only
/// for empty input.
pub fn double_metaphone(word: &str) -> Option<DoubleMetaphone> {
    if word.is_empty() {
        return None;
    }
    let original: Vec<char> = word.chars().collect();
    let slavo_germanic = is_slavo_germanic(&original);
    let upper: Vec<char> = original.iter().map(|c| c.to_ascii_uppercase()).collect();
    let len = upper.len();
    let first: usize = 2;
    let last = first + len - 1;

    let mut padded: Vec<char> = Vec::with_capacity(len + 8);
    padded.push('-');
    padded.push('-');
    padded.extend_from_slice(&upper);
    for _ in 0..6 {
        padded.push('-');
    }

    let mut pos = first;
    let mut primary: Vec<char> = Vec::new();
    let mut secondary: Vec<char> = Vec::new();

    if (ch_at(&padded, first as isize) == 'G' && ch_at(&padded, first as isize + 1) == 'N')
        || (ch_at(&padded, first as isize) == 'K' && ch_at(&padded, first as isize + 1) == 'N')
        || (ch_at(&padded, first as isize) == 'P' && ch_at(&padded, first as isize + 1) == 'N')
        || (ch_at(&padded, first as isize) == 'W' && ch_at(&padded, first as isize + 1) == 'R')
        || (ch_at(&padded, first as isize) == 'P' && ch_at(&padded, first as isize + 1) == 'S')
    {
        pos += 1;
    }

    if ch_at(&padded, first as isize) == 'X' {
        primary.push('S');
        pos += 1;
    }

    while pos <= last {
        let p = pos as isize;
        let ch = ch_at(&padded, p);
        let mut nxt = Step::new();

        if is_vowel(ch) {
            if pos == first {
                nxt.pri0 = Some('A');
            }
            nxt.offset = 1;
        } else {
            match ch {
                'B' => {
                    nxt.pri0 = Some('P');
                    nxt.offset = if ch_at(&padded, p + 1) == 'B' { 2 } else { 1 };
                }
                'C' => {
                    if pos > first + 1
                        && !is_vowel(ch_at(&padded, p - 2))
                        && !starts_at(&padded, p - 1, "ACH")
                        && ch_at(&padded, p + 2) != 'I'
                        && (ch_at(&padded, p + 2) != 'E' || is_in_at(&padded, p - 2, &["BACHER", "MACHER"]))
                    {
                        nxt.pri0 = Some('K');
                        nxt.offset = 2;
                    } else if pos == first && starts_at(&padded, first as isize, "CAESAR") {
                        nxt.pri0 = Some('S');
                        nxt.offset = 2;
                    } else if starts_at(&padded, p, "CHIA") {
                        nxt.pri0 = Some('K');
                        nxt.offset = 2;
                    } else if starts_at(&padded, p, "CH") {
                        if pos > first && starts_at(&padded, p, "CHAE") {
                            nxt.pri0 = Some('K');
                            nxt.sec0 = Some('X');
                            nxt.offset = 2;
                        } else if pos == first
                            && (is_in_at(&padded, p + 1, &["HARAC", "HARIS"])
                                || is_in_at(&padded, p + 1, &["HOR", "HYM", "HIA", "HEM"]))
                            && ncmp_at(&padded, first as isize, "CHORE") == 1
                        {
                            nxt.pri0 = Some('K');
                            nxt.offset = 2;
                        } else if is_in_at(&padded, first as isize, &["VAN ", "VON "])
                            || starts_at(&padded, first as isize, "SCH")
                            || is_in_at(&padded, p - 2, &["ORCHES", "ARCHIT", "ORCHID"])
                            || ch_at(&padded, p + 2) == 'T'
                            || ch_at(&padded, p + 2) == 'S'
                            || ((is_in_at(&padded, p - 1, &["A", "O", "U", "E"]) || pos == first)
                                && is_in_at(&padded, p + 2, &["L", "R", "N", "M", "B", "H", "F", "V", "W"]))
                        {
                            nxt.pri0 = Some('A');
                            nxt.offset = 2;
                        } else if pos > first {
                            if ch_at(&padded, first as isize) == 'M' && ch_at(&padded, first as isize + 1) == 'C' {
                                nxt.pri0 = Some('K');
                                nxt.offset = 2;
                            } else {
                                nxt.pri0 = Some('X');
                                nxt.sec0 = Some('K');
                                nxt.offset = 2;
                            }
                        } else {
                            nxt.pri0 = Some('X');
                            nxt.offset = 2;
                        }
                    } else if starts_at(&padded, p + 2, "CZ") && starts_at(&padded, p - 2, "WICZ") {
                        nxt.pri0 = Some('S');
                        nxt.sec0 = Some('X');
                        nxt.offset = 2;
                    } else if starts_at(&padded, p + 1, "CIA") {
                        nxt.pri0 = Some('X');
                        nxt.offset = 3;
                    } else if starts_at(&padded, p, "CC") && !(pos == first + 1 && ch_at(&padded, first as isize) == 'M') {
                        if is_in_at(&padded, p + 2, &["I", "E", "H"]) && !starts_at(&padded, p + 2, "HU") {
                            if (pos == first + 1 && ch_at(&padded, first as isize) == 'A')
                                || is_in_at(&padded, p - 1, &["UCCEE", "UCCES"])
                            {
                                nxt.pri0 = Some('K');
                                nxt.pri1 = Some('S');
                                nxt.offset = 3;
                            } else {
                                nxt.pri0 = Some('X');
                                nxt.offset = 3;
                            }
                        } else {
                            nxt.pri0 = Some('K');
                            nxt.offset = 2;
                        }
                    } else if is_in_at(&padded, p, &["CK", "CG", "CQ"]) {
                        nxt.pri0 = Some('K');
                        nxt.offset = 2;
                    } else if is_in_at(&padded, p, &["CI", "CE", "CY"]) {
                        if is_in_at(&padded, p, &["CIO", "CIE", "CIA"]) {
                            nxt.pri0 = Some('S');
                            nxt.sec0 = Some('X');
                            nxt.offset = 2;
                        } else {
                            nxt.pri0 = Some('S');
                            nxt.offset = 2;
                        }
                    } else if is_in_at(&padded, p + 1, &[" C", " Q", " G"]) {
                        nxt.pri0 = Some('K');
                        nxt.offset = 3;
                    } else if is_in_at(&padded, p + 1, &["C", "K", "Q"]) && !is_in_at(&padded, p + 1, &["CE", "CI"]) {
                        nxt.pri0 = Some('K');
                        nxt.offset = 2;
                    } else {
                        nxt.pri0 = Some('K');
                        nxt.offset = 1;
                    }
                }
                'D' => {
                    if starts_at(&padded, p, "DG") {
                        let after = ch_at(&padded, p + 2);
                        if after == 'I' || after == 'E' || after == 'Y' {
                            nxt.pri0 = Some('J');
                            nxt.offset = 3;
                        } else {
                            nxt.pri0 = Some('T');
                            nxt.pri1 = Some('K');
                            nxt.offset = 2;
                        }
                    } else if is_in_at(&padded, p, &["DT", "DD"]) {
                        nxt.pri0 = Some('T');
                        nxt.offset = 2;
                    } else {
                        nxt.pri0 = Some('T');
                        nxt.offset = 1;
                    }
                }
                'F' => {
                    nxt.pri0 = Some('F');
                    nxt.offset = if ch_at(&padded, p + 1) == 'F' { 2 } else { 1 };
                }
                'G' => {
                    if ch_at(&padded, p + 1) == 'H' {
                        if pos > first && !is_vowel(ch_at(&padded, p - 1)) {
                            nxt.pri0 = Some('K');
                            nxt.offset = 2;
                        } else if pos < first + 3 {
                            if pos == first {
                                nxt.offset = 2;
                                nxt.pri0 = if ch_at(&padded, p + 2) == 'I' { Some('J') } else { Some('K') };
                            }
                        } else if (pos > first + 1 && is_in_at(&padded, p - 2, &["B", "H", "D"]))
                            || (pos > first + 2 && is_in_at(&padded, p - 3, &["B", "H", "D"]))
                            || (pos > first + 3 && is_in_at(&padded, p - 3, &["B", "H"]))
                        {
                            nxt.offset = 2;
                        } else if pos > first + 2 && ch_at(&padded, p - 1) == 'U' && is_in_at(&padded, p - 3, &["C", "G", "L", "R", "T"]) {
                            nxt.pri0 = Some('F');
                            nxt.offset = 2;
                        } else if pos > first && ch_at(&padded, p - 1) != 'I' {
                            nxt.pri0 = Some('K');
                            nxt.offset = 2;
                        }
                    } else if ch_at(&padded, p + 1) == 'N' {
                        if pos == first + 1 && is_vowel(ch_at(&padded, first as isize)) && !slavo_germanic {
                            nxt.pri0 = Some('K');
                            nxt.pri1 = Some('N');
                            nxt.sec0 = Some('N');
                            nxt.offset = 2;
                        } else {
                            nxt.pri0 = Some('K');
                            nxt.pri1 = Some('N');
                            nxt.offset = 2;
                        }
                    } else if starts_at(&padded, p + 1, "LI") && !slavo_germanic {
                        nxt.pri0 = Some('K');
                        nxt.pri1 = Some('L');
                        nxt.sec0 = Some('L');
                        nxt.offset = 2;
                    } else if pos == first
                        && (ch_at(&padded, p + 1) == 'Y'
                            || is_in_at(&padded, p + 1, &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"]))
                    {
                        nxt.pri0 = Some('K');
                        nxt.sec0 = Some('J');
                        nxt.offset = 2;
                    } else if (starts_at(&padded, p + 1, "ER") || ch_at(&padded, p + 1) == 'Y')
                        && !is_in_at(&padded, first as isize, &["DANGER", "RANGER", "MANGER"])
                        && !is_in_at(&padded, p - 1, &["E", "I"])
                        && !is_in_at(&padded, p - 1, &["RGY", "OGY"])
                    {
                        nxt.pri0 = Some('K');
                        nxt.sec0 = Some('J');
                        nxt.offset = 2;
                    } else if is_in_at(&padded, p + 1, &["E", "I", "Y"]) || is_in_at(&padded, p - 1, &["AGGI", "OGGI"]) {
                        if is_in_at(&padded, first as isize, &["VON ", "VAN "]) || starts_at(&padded, first as isize, "SCH") || starts_at(&padded, p + 1, "ET") {
                            nxt.pri0 = Some('K');
                            nxt.offset = 2;
                        } else if starts_at(&padded, p + 1, "IER ") {
                            nxt.pri0 = Some('J');
                            nxt.offset = 2;
                        } else {
                            nxt.pri0 = Some('J');
                            nxt.sec0 = Some('K');
                            nxt.offset = 2;
                        }
                    } else if ch_at(&padded, p + 1) == 'G' {
                        nxt.pri0 = Some('K');
                        nxt.offset = 2;
                    } else {
                        nxt.pri0 = Some('K');
                        nxt.offset = 1;
                    }
                }
                'H' => {
                    if (pos == first || is_vowel(ch_at(&padded, p - 1))) && is_vowel(ch_at(&padded, p + 1)) {
                        nxt.pri0 = Some('H');
                        nxt.offset = 2;
                    } else {
                        nxt.offset = 2;
                    }
                }
                'J' => {
                    if starts_at(&padded, p, "JOSE") || starts_at(&padded, first as isize, "SAN ") {
                        if (pos == first && ch_at(&padded, p + 4) == ' ') || starts_at(&padded, first as isize, "SAN ") {
                            nxt.pri0 = Some('H');
                        } else {
                            nxt.pri0 = Some('J');
                            nxt.sec0 = Some('H');
                        }
                    } else if pos == first && ncmp_at(&padded, p, "JOSE") == 1 {
                        nxt.pri0 = Some('J');
                        nxt.sec0 = Some('A');
                    } else if is_vowel(ch_at(&padded, p - 1)) && !slavo_germanic && is_in_at(&padded, p + 1, &["A", "O"]) {
                        nxt.pri0 = Some('J');
                        nxt.sec0 = Some('H');
                    } else if pos == last {
                        nxt.pri0 = Some('J');
                        nxt.sec0 = Some(' ');
                    } else if !is_in_at(&padded, p + 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
                        && !is_in_at(&padded, p - 1, &["S", "K", "L"])
                    {
                        nxt.pri0 = Some('J');
                    }
                    nxt.offset = if ch_at(&padded, p + 1) == 'J' { 2 } else { 1 };
                }
                'K' => {
                    nxt.pri0 = Some('K');
                    nxt.offset = if ch_at(&padded, p + 1) == 'L' { 2 } else { 1 };
                }
                'L' => {
                    if ch_at(&padded, p + 1) == 'L' {
                        if (pos == last - 2 && is_in_at(&padded, p - 1, &["ILLO", "ILLA", "ALLE"]))
                            || ((is_in_at(&padded, last as isize - 1, &["AS", "OS"]) || ch_at(&padded, last as isize) == 'A' || ch_at(&padded, last as isize) == 'O')
                                && starts_at(&padded, p - 1, "ALLE"))
                        {
                            nxt.pri0 = Some('L');
                            nxt.sec0 = Some(' ');
                            nxt.offset = 2;
                        } else {
                            nxt.pri0 = Some('L');
                            nxt.offset = 2;
                        }
                    } else {
                        nxt.pri0 = Some('L');
                        nxt.offset = 1;
                    }
                }
                'M' => {
                    let umb_ending = starts_at(&padded, p + 1, "UMB")
                        && (pos + 1 == last || starts_at(&padded, p + 2, "ER"));
                    nxt.pri0 = Some('M');
                    nxt.offset = if umb_ending || ch_at(&padded, p + 1) == 'M' { 2 } else { 1 };
                }
                'N' => {
                    nxt.pri0 = Some('N');
                    nxt.offset = if ch_at(&padded, p + 1) == 'N' { 2 } else { 1 };
                }
                'P' => {
                    if ch_at(&padded, p + 1) == 'H' {
                        nxt.pri0 = Some('F');
                        nxt.offset = 2;
                    } else if ch_at(&padded, p + 1) == 'P' || ch_at(&padded, p + 1) == 'B' {
                        nxt.pri0 = Some('P');
                        nxt.offset = 2;
                    } else {
                        nxt.pri0 = Some('P');
                        nxt.offset = 1;
                    }
                }
                'Q' => {
                    nxt.pri0 = Some('Q');
                    nxt.offset = if ch_at(&padded, p + 1) == 'Q' { 2 } else { 1 };
                }
                'R' => {
                    if pos == last
                        && !slavo_germanic
                        && starts_at(&padded, p - 2, "IE")
                        && !is_in_at(&padded, p - 4, &["ME", "MA"])
                    {
                        nxt.sec0 = Some('R');
                    } else {
                        nxt.pri0 = Some('R');
                    }
                    nxt.offset = if ch_at(&padded, p + 1) == 'R' { 2 } else { 1 };
                }
                'S' => {
                    if is_in_at(&padded, p - 1, &["ISL", "YSL"]) {
                        nxt.offset = 1;
                    } else if pos == first && starts_at(&padded, first as isize, "SUGAR") {
                        nxt.pri0 = Some('X');
                        nxt.sec0 = Some('S');
                        nxt.offset = 1;
                    } else if starts_at(&padded, p, "SH") {
                        if is_in_at(&padded, p + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                            nxt.pri0 = Some('S');
                            nxt.offset = 2;
                        } else {
                            nxt.pri0 = Some('X');
                            nxt.offset = 2;
                        }
                    } else if is_in_at(&padded, p, &["SIO", "SIA"]) || starts_at(&padded, p, "SIAN") {
                        if !slavo_germanic {
                            nxt.pri0 = Some('S');
                            nxt.sec0 = Some('X');
                        } else {
                            nxt.pri0 = Some('S');
                        }
                        nxt.offset = 3;
                    } else if (pos == first && is_in_at(&padded, p + 1, &["M", "N", "L", "W"])) || ch_at(&padded, p + 1) == 'Z' {
                        nxt.pri0 = Some('S');
                        nxt.sec0 = Some('X');
                        nxt.offset = if ch_at(&padded, p + 1) == 'Z' { 2 } else { 1 };
                    } else if starts_at(&padded, p, "SC") {
                        if ch_at(&padded, p + 2) == 'H' {
                            if is_in_at(&padded, p + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                                if is_in_at(&padded, p + 3, &["ER", "EN"]) {
                                    nxt.pri0 = Some('X');
                                    nxt.sec0 = Some('S');
                                    nxt.sec1 = Some('K');
                                } else {
                                    nxt.pri0 = Some('S');
                                    nxt.pri1 = Some('K');
                                }
                            } else if pos == first && !is_vowel(ch_at(&padded, first as isize + 3)) && ch_at(&padded, first as isize + 3) != 'W' {
                                nxt.pri0 = Some('X');
                                nxt.sec0 = Some('S');
                            } else {
                                nxt.pri0 = Some('X');
                            }
                            nxt.offset = 3;
                        } else if is_in_at(&padded, p + 2, &["I", "E", "Y"]) {
                            nxt.pri0 = Some('S');
                            nxt.offset = 3;
                        } else {
                            nxt.pri0 = Some('S');
                            nxt.pri1 = Some('K');
                            nxt.offset = 3;
                        }
                    } else if pos == last && is_in_at(&padded, p - 2, &["AI", "OI"]) {
                        nxt.offset = 1;
                    } else {
                        nxt.pri0 = Some('S');
                        nxt.offset = if ch_at(&padded, p + 1) == 'S' || ch_at(&padded, p + 1) == 'Z' { 2 } else { 1 };
                    }
                }
                'T' => {
                    if starts_at(&padded, p, "TION") {
                        nxt.pri0 = Some('X');
                        nxt.offset = 3;
                    } else if is_in_at(&padded, p, &["TIA", "TCH"]) {
                        nxt.pri0 = Some('X');
                        nxt.offset = 3;
                    } else if starts_at(&padded, p, "TH") || starts_at(&padded, p, "TTH") {
                        if is_in_at(&padded, p + 2, &["OM", "AM"]) || is_in_at(&padded, first as isize, &["VON ", "VAN "]) || starts_at(&padded, first as isize, "SCH") {
                            nxt.pri0 = Some('T');
                        } else {
                            nxt.pri0 = Some('0');
                            nxt.sec0 = Some('T');
                        }
                        nxt.offset = 2;
                    } else if ch_at(&padded, p + 1) == 'T' || ch_at(&padded, p + 1) == 'D' {
                        nxt.pri0 = Some('T');
                        nxt.offset = 2;
                    } else {
                        nxt.pri0 = Some('T');
                        nxt.offset = 1;
                    }
                }
                'V' => {
                    nxt.pri0 = Some('F');
                    nxt.offset = if ch_at(&padded, p + 1) == 'V' { 2 } else { 1 };
                }
                'W' => {
                    if starts_at(&padded, p, "WR") {
                        nxt.pri0 = Some('R');
                        nxt.offset = 2;
                    } else if pos == first && (is_vowel(ch_at(&padded, p + 1)) || starts_at(&padded, p, "WH")) {
                        nxt.pri0 = Some('A');
                        if is_vowel(ch_at(&padded, p + 1)) {
                            nxt.sec0 = Some('F');
                        }
                        nxt.offset = 1;
                    } else if (pos == last && is_vowel(ch_at(&padded, p - 1)))
                        || is_in_at(&padded, p - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                        || starts_at(&padded, first as isize, "SCH")
                    {
                        nxt.sec0 = Some('F');
                        nxt.offset = 1;
                    } else if is_in_at(&padded, p, &["WICZ", "WITZ"]) {
                        nxt.pri0 = Some('T');
                        nxt.pri1 = Some('S');
                        nxt.sec0 = Some('F');
                        nxt.sec1 = Some('X');
                        nxt.offset = 4;
                    } else {
                        nxt.offset = 1;
                    }
                }
                'X' => {
                    if !(pos == last && (is_in_at(&padded, p - 3, &["IAU", "EAU"]) || is_in_at(&padded, p - 2, &["AU", "OU"]))) {
                        nxt.pri0 = Some('K');
                        nxt.pri1 = Some('S');
                    }
                    nxt.offset = if ch_at(&padded, p + 1) == 'C' || ch_at(&padded, p + 1) == 'X' { 2 } else { 1 };
                }
                'Z' => {
                    if ch_at(&padded, p + 1) == 'H' {
                        nxt.pri0 = Some('J');
                    } else if is_in_at(&padded, p + 1, &["ZO", "ZI", "ZA"]) || (slavo_germanic && pos > first && ch_at(&padded, p - 1) != 'T') {
                        nxt.pri0 = Some('S');
                        nxt.sec0 = Some('T');
                        nxt.sec1 = Some('S');
                    } else {
                        nxt.pri0 = Some('S');
                    }
                    nxt.offset = if ch_at(&padded, p + 1) == 'Z' || ch_at(&padded, p + 1) == 'H' { 2 } else { 1 };
                }
                _ => {}
            }
        }

        if nxt.sec0.is_none() {
            if let Some(c0) = nxt.pri0 {
                primary.push(c0);
                secondary.push(c0);
                if let Some(c1) = nxt.pri1 {
                    primary.push(c1);
                    secondary.push(c1);
                }
            }
        } else {
            if let Some(c0) = nxt.pri0 {
                primary.push(c0);
                if let Some(c1) = nxt.pri1 {
                    primary.push(c1);
                }
            }
            if let Some(s0) = nxt.sec0 {
                secondary.push(s0);
            }
            if let Some(s1) = nxt.sec1 {
                secondary.push(s1);
            }
        }
        pos += nxt.offset.max(1);
    }

    let primary: String = primary.into_iter().collect();
    let secondary: String = secondary.into_iter().collect();
    let secondary = if secondary == primary { None } else { Some(secondary) };
    Some(DoubleMetaphone { primary, secondary })
}

/// Classic Soundex: first letter uppercase, then up to three digits from
/// the `{b,f,p,v=1; c,g,j,k,q,s,x,z=2; d,t=3; l=4; m,n=5; r=6}` mapping,
/// vowels and `h,y,w` dropped, adjacent duplicate digits collapsed,
/// right-padded with `0` to length 4. Returns `None` on empty input or any
/// character outside `[A-Za-z' /-]`, mirroring
/// `original_source/libspell.c`'s `soundex`.
pub fn soundex(word: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    #[derive(Clone, Copy, PartialEq)]
    enum Unit {
        Code(char),
        Drop,
        Ignore,
    }

    fn classify(c: char) -> Option<Unit> {
        match c {
            'a' | 'e' | 'i' | 'o' | 'u' | 'h' | 'y' | 'w' => Some(Unit::Drop),
            'b' | 'f' | 'p' | 'v' => Some(Unit::Code('1')),
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some(Unit::Code('2')),
            'd' | 't' => Some(Unit::Code('3')),
            'l' => Some(Unit::Code('4')),
            'm' | 'n' => Some(Unit::Code('5')),
            'r' => Some(Unit::Code('6')),
            '-' | '\'' | ' ' | '/' => Some(Unit::Ignore),
            _ => None,
        }
    }

    let chars: Vec<char> = word.chars().collect();
    let first_letter = chars[0].to_ascii_uppercase();
    let mut units: Vec<Unit> = Vec::with_capacity(chars.len().saturating_sub(1));
    for &c in &chars[1..] {
        units.push(classify(c.to_ascii_lowercase())?);
    }

    let mut current: Option<char> = None;
    let mut collapsed: Vec<Unit> = Vec::with_capacity(units.len());
    for u in units {
        match u {
            Unit::Ignore => collapsed.push(Unit::Ignore),
            Unit::Drop => {
                current = None;
                collapsed.push(Unit::Drop);
            }
            Unit::Code(c) => {
                if current == Some(c) {
                    collapsed.push(Unit::Drop);
                } else {
                    current = Some(c);
                    collapsed.push(Unit::Code(c));
                }
            }
        }
    }

    let mut code = String::with_capacity(4);
    code.push(first_letter);
    for u in collapsed {
        if code.len() == 4 {
            break;
        }
        if let Unit::Code(c) = u {
            code.push(c);
        }
    }
    while code.len() < 4 {
        code.push('0');
    }
    Some(code)
}
