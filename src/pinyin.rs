use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

// letter run, optionally followed by the tone number
static SYLLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-zA-ZüÜ]+)([1-5])?").unwrap());

/// Vowel pairs where the mark does not follow the plain vowel priority,
/// checked in order, first match wins: (digraph, vowel carrying the mark)
const DIGRAPH_RULES: [(&str, char); 7] = [
    ("ai", 'a'),
    ("ei", 'e'),
    ("ao", 'a'),
    ("ou", 'o'),
    ("iu", 'u'),
    ("ie", 'e'),
    ("ui", 'i'),
];

const VOWEL_PRIORITY: [char; 7] = ['a', 'o', 'e', 'i', 'u', 'ü', 'v'];

/// Convert pinyin with tone numbers ("ni3 hao3") to pinyin with tone marks ("nǐ hǎo").
///
/// Syllables are separated by single spaces, a syllable without tone number is
/// neutral tone. Anything that does not look like a syllable is passed through.
pub fn convert(pinyin_num: &str) -> String {
    if pinyin_num.is_empty() {
        return String::new();
    }
    pinyin_num.split(' ').map(syllable_mark_from_num).join(" ")
}

fn syllable_mark_from_num(pinyin_num: &str) -> String {
    // MDBG / CC-CEDICT notation for ü
    let syllable = pinyin_num.replace("u:", "ü");

    let Some(caps) = SYLLABLE.captures(&syllable) else {
        return syllable;
    };
    let Some(base) = caps.get(1).map(|m| m.as_str()) else {
        return syllable;
    };
    let tone = caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .and_then(|c| c.to_digit(10))
        .unwrap_or(5);

    let target = DIGRAPH_RULES
        .iter()
        .find(|(digraph, _)| base.contains(digraph))
        .and_then(|&(_, vowel)| base.find(vowel).map(|idx| (vowel, idx)))
        .or_else(|| {
            VOWEL_PRIORITY
                .iter()
                .find_map(|&vowel| base.find(vowel).map(|idx| (vowel, idx)))
        });

    // no vowel at all, the tone number is dropped silently
    let Some((vowel, idx)) = target else {
        return syllable;
    };
    let Some(marked) = tone_mark_char(vowel, tone) else {
        return syllable;
    };

    let mut pinyin_mark = String::with_capacity(base.len() + 2);
    pinyin_mark.push_str(&base[..idx]);
    pinyin_mark.push_str(marked);
    pinyin_mark.push_str(&base[idx + vowel.len_utf8()..]);
    pinyin_mark
}

/// Marked form of a vowel, tone 5 is the bare vowel. `v` is written as ü.
fn tone_mark_char(ch: char, tone: u32) -> Option<&'static str> {
    let tone_idx = usize::try_from(tone.checked_sub(1)?).ok()?;
    let row = match ch {
        'a' => ["ā", "á", "ǎ", "à", "a"],
        'e' => ["ē", "é", "ě", "è", "e"],
        'i' => ["ī", "í", "ǐ", "ì", "i"],
        'o' => ["ō", "ó", "ǒ", "ò", "o"],
        'u' => ["ū", "ú", "ǔ", "ù", "u"],
        'ü' | 'v' => ["ǖ", "ǘ", "ǚ", "ǜ", "ü"],
        _ => return None,
    };
    row.get(tone_idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mark() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("ma1"), "mā");
        assert_eq!(convert("ma2"), "má");
        assert_eq!(convert("ma3"), "mǎ");
        assert_eq!(convert("ma4"), "mà");
        assert_eq!(convert("ma5"), "ma");
        assert_eq!(convert("ma"), "ma");
        assert_eq!(convert("ni3 hao3"), "nǐ hǎo");
        assert_eq!(convert("zhong1 guo2"), "zhōng guó");
        assert_eq!(convert("xiong2"), "xióng");
        assert_eq!(convert("er2"), "ér");
        assert_eq!(convert("yue4"), "yuè");
        assert_eq!(convert("jue2"), "jué");
        assert_eq!(convert("xue3"), "xuě");
        assert_eq!(convert("lian3"), "liǎn");
        assert_eq!(convert("yuan4"), "yuàn");
        assert_eq!(convert("qu2"), "qú");
        assert_eq!(convert("zhi1"), "zhī");
    }

    #[test]
    fn test_digraph_rules() {
        assert_eq!(convert("ai4"), "ài");
        assert_eq!(convert("shuai4"), "shuài");
        assert_eq!(convert("mei2"), "méi");
        assert_eq!(convert("hao3"), "hǎo");
        assert_eq!(convert("you3"), "yǒu");
        assert_eq!(convert("liu2"), "liú");
        assert_eq!(convert("jiu3"), "jiǔ");
        assert_eq!(convert("xie4"), "xiè");
        assert_eq!(convert("dui4"), "duì");
        assert_eq!(convert("gui1"), "guī");
    }

    #[test]
    fn test_u_umlaut() {
        assert_eq!(convert("lu:4"), "lǜ");
        assert_eq!(convert("lv4"), "lǜ");
        assert_eq!(convert("lü4"), "lǜ");
        assert_eq!(convert("nu:3"), "nǚ");
        assert_eq!(convert("nv5"), "nü");
        assert_eq!(convert("lv"), "lü");
        assert_eq!(convert("lu:e4"), "lüè");
        // v is only rewritten when it carries the mark
        assert_eq!(convert("nve4"), "nvè");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(convert("mā"), "mā");
        assert_eq!(convert("nǐ hǎo"), "nǐ hǎo");
        assert_eq!(convert("sh"), "sh");
        assert_eq!(convert("r5"), "r5");
        assert_eq!(convert("hm5 m2"), "hm5 m2");
        assert_eq!(convert(","), ",");
        assert_eq!(convert("..."), "...");
        // no lower case vowel in the table
        assert_eq!(convert("MA1"), "MA1");
    }

    #[test]
    fn test_spaces_are_kept() {
        assert_eq!(convert("ni3  hao3"), "nǐ  hǎo");
        assert_eq!(convert(" ma1 "), " mā ");
        assert_eq!(convert("ni3 , hao3"), "nǐ , hǎo");
    }

    #[test]
    fn test_non_letters_outside_syllable_dropped() {
        assert_eq!(convert("hao3,"), "hǎo");
        assert_eq!(convert("ma6"), "ma");
    }

    #[test]
    fn test_length_of_base_is_kept() {
        for (pinyin_num, base) in [
            ("zhuang4", "zhuang"),
            ("lu:e4", "lüe"),
            ("lv3", "lv"),
            ("shui3", "shui"),
            ("de5", "de"),
        ] {
            assert_eq!(
                convert(pinyin_num).chars().count(),
                base.replace("u:", "ü").chars().count(),
                "{pinyin_num}"
            );
        }
    }

    #[test]
    fn test_tone_mark_char() {
        assert_eq!(tone_mark_char('a', 1), Some("ā"));
        assert_eq!(tone_mark_char('v', 5), Some("ü"));
        assert_eq!(tone_mark_char('ü', 3), Some("ǚ"));
        assert_eq!(tone_mark_char('x', 1), None);
        assert_eq!(tone_mark_char('a', 0), None);
        assert_eq!(tone_mark_char('a', 6), None);
    }
}
