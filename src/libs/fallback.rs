//! Offline translations for common attendance terms.
//!
//! Used by the translator when every remote provider fails. The dictionary
//! covers remark keywords (absent, sunday, warning, ...) in the three
//! non-English interface languages.
//!
//! Partial matches replace the first dictionary key found anywhere in the
//! text, including inside unrelated words (`break` in `breakfast`), so the
//! output can be a mix of languages.

/// English keyword followed by its Bengali, Hindi and Arabic translations.
type Entry = (&'static str, [(&'static str, &'static str); 3]);

const DICTIONARY: &[Entry] = &[
    ("absent", [("bn", "অনুপস্থিত"), ("hi", "अनुपस्थित"), ("ar", "غائب")]),
    ("present", [("bn", "উপস্থিত"), ("hi", "उपस्थित"), ("ar", "حاضر")]),
    ("late", [("bn", "বিলম্ব"), ("hi", "देर"), ("ar", "متأخر")]),
    ("early", [("bn", "শীঘ্র"), ("hi", "जल्दी"), ("ar", "مبكر")]),
    ("sunday", [("bn", "রবিবার"), ("hi", "रविवार"), ("ar", "الأحد")]),
    ("monday", [("bn", "সোমবার"), ("hi", "सोमवार"), ("ar", "الاثنين")]),
    ("tuesday", [("bn", "মঙ্গলবার"), ("hi", "मंगलवार"), ("ar", "الثلاثاء")]),
    ("wednesday", [("bn", "বুধবার"), ("hi", "बुधवार"), ("ar", "الأربعاء")]),
    ("thursday", [("bn", "বৃহস্পতিবার"), ("hi", "गुरुवार"), ("ar", "الخميس")]),
    ("friday", [("bn", "শুক্রবার"), ("hi", "शुक्रवार"), ("ar", "الجمعة")]),
    ("saturday", [("bn", "শনিবার"), ("hi", "शनिवार"), ("ar", "السبت")]),
    ("warning", [("bn", "সতর্কতা"), ("hi", "चेतावनी"), ("ar", "تحذير")]),
    ("sick", [("bn", "অসুস্থ"), ("hi", "बीमार"), ("ar", "مريض")]),
    ("leave", [("bn", "ছুটি"), ("hi", "छुट्टी"), ("ar", "إجازة")]),
    ("holiday", [("bn", "ছুটির দিন"), ("hi", "छुट्टी का दिन"), ("ar", "يوم عطلة")]),
    ("overtime", [("bn", "অতিরিক্ত সময়"), ("hi", "ओवरटाइम"), ("ar", "وقت إضافي")]),
    ("break", [("bn", "বিরতি"), ("hi", "ब्रेक"), ("ar", "استراحة")]),
    ("duty", [("bn", "কর্তব্য"), ("hi", "ड्यूटी"), ("ar", "واجب")]),
    ("work", [("bn", "কাজ"), ("hi", "काम"), ("ar", "عمل")]),
    ("location", [("bn", "অবস্থান"), ("hi", "स्थान"), ("ar", "موقع")]),
    ("time", [("bn", "সময়"), ("hi", "समय"), ("ar", "وقت")]),
    ("hour", [("bn", "ঘন্টা"), ("hi", "घंटा"), ("ar", "ساعة")]),
    ("minute", [("bn", "মিনিট"), ("hi", "मिनट"), ("ar", "دقيقة")]),
];

fn lookup(translations: &[(&'static str, &'static str); 3], target: &str) -> Option<&'static str> {
    translations.iter().find(|(lang, _)| *lang == target).map(|(_, text)| *text)
}

/// Replaces every ASCII case-insensitive occurrence of `key` in `text`.
fn replace_ignore_case(text: &str, key: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        match rest.get(..key.len()) {
            Some(head) if head.eq_ignore_ascii_case(key) => {
                result.push_str(replacement);
                rest = &rest[key.len()..];
            }
            _ => {
                let Some(ch) = rest.chars().next() else { break };
                result.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    result
}

/// Looks up an offline translation of `text` into `target`.
///
/// Exact (trimmed, case-insensitive) matches win. Otherwise the first
/// dictionary key contained in the text is replaced everywhere in it.
/// Returns `None` for English targets and for text with no known keyword.
pub fn fallback_translation(text: &str, target: &str) -> Option<String> {
    if target == "en" {
        return None;
    }

    let lower = text.trim().to_lowercase();

    if let Some((_, translations)) = DICTIONARY.iter().find(|(key, _)| *key == lower) {
        if let Some(translated) = lookup(translations, target) {
            return Some(translated.to_string());
        }
    }

    DICTIONARY
        .iter()
        .filter(|(key, _)| lower.contains(key))
        .find_map(|(key, translations)| lookup(translations, target).map(|translated| replace_ignore_case(text, key, translated)))
}

pub fn has_fallback_translation(text: &str, target: &str) -> bool {
    fallback_translation(text, target).is_some()
}
