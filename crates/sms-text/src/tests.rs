use crate::*;
use crate::traits::TextNormalizer;

// ========== Lower-casing & Punctuation ==========

#[test]
fn test_lowercase_ascii_and_unicode() {
    assert_eq!(lowercase("FREE Prize"), "free prize");
    assert_eq!(lowercase("ПРИВЕТ"), "привет");
}

#[test]
fn test_strip_all_ascii_punctuation() {
    let all = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
    assert_eq!(all.len(), 32);
    assert_eq!(strip_punctuation(all), "");
}

#[test]
fn test_strip_keeps_letters_digits_whitespace() {
    assert_eq!(strip_punctuation("call 0800-123, now!"), "call 0800123 now");
    assert_eq!(strip_punctuation("a\tb\nc"), "a\tb\nc");
}

#[test]
fn test_strip_keeps_non_ascii_symbols() {
    assert_eq!(strip_punctuation("£100 ¡hola! “quoted”"), "£100 ¡hola “quoted”");
}

// ========== Tokenizer ==========

#[test]
fn test_tokenize_whitespace_runs() {
    assert_eq!(tokenize("  hello \t\n world  "), vec!["hello", "world"]);
}

#[test]
fn test_tokenize_keeps_underscore_and_digits() {
    assert_eq!(tokenize("foo_bar 42x"), vec!["foo_bar", "42x"]);
}

#[test]
fn test_tokenize_non_word_separators() {
    assert_eq!(tokenize("£100 ¡hola"), vec!["100", "hola"]);
}

#[test]
fn test_tokenize_unicode_letters() {
    assert_eq!(tokenize("café naïve привет"), vec!["café", "naïve", "привет"]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \n ").is_empty());
}

// ========== Stopwords ==========

#[test]
fn test_stopword_table_size() {
    assert_eq!(STOPWORDS.len(), 124);
    let unique: std::collections::HashSet<_> = STOPWORDS.iter().collect();
    assert_eq!(unique.len(), STOPWORDS.len());
}

#[test]
fn test_stopword_table_is_lowercase() {
    assert!(STOPWORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn test_is_stopword_case_sensitive() {
    assert!(is_stopword("the"));
    assert!(!is_stopword("The"));
    assert!(!is_stopword("prize"));
}

#[test]
fn test_remove_stopwords_preserves_order() {
    let tokens = vec!["i", "am", "running", "to", "the", "shop", "quickly"];
    assert_eq!(remove_stopwords(tokens), vec!["running", "shop", "quickly"]);
}

// ========== Stemmer ==========

#[test]
fn test_suffix_table_order() {
    assert_eq!(SUFFIXES, &["ing", "ly", "ed", "ious", "ies", "ive", "es", "s", "ment"]);
}

#[test]
fn test_stem_basic() {
    assert_eq!(stem("running"), "runn");
    assert_eq!(stem("quickly"), "quick");
    assert_eq!(stem("claimed"), "claim");
    assert_eq!(stem("delicious"), "delic");
    assert_eq!(stem("flies"), "fl");
    assert_eq!(stem("active"), "act");
    assert_eq!(stem("goes"), "go");
    assert_eq!(stem("prizes"), "priz");
    assert_eq!(stem("government"), "govern");
}

#[test]
fn test_stem_first_match_wins() {
    // "s" precedes "ment" in the table.
    assert_eq!(stem("payments"), "payment");
    // "ious" precedes "s".
    assert_eq!(stem("curious"), "cur");
    // "ies" precedes "es" and "s".
    assert_eq!(stem("replies"), "repl");
}

#[test]
fn test_stem_strips_only_once() {
    assert_eq!(stem("happiness"), "happines");
    assert_eq!(stem("sings"), "sing");
}

#[test]
fn test_stem_no_match() {
    assert_eq!(stem("prize"), "prize");
    assert_eq!(stem("won"), "won");
    assert_eq!(stem("free"), "free");
    assert_eq!(stem("5"), "5");
}

#[test]
fn test_stem_guard_boundary() {
    // Stripping must leave at least two characters.
    assert_eq!(stem_with("yes", &["es"]), "yes");
    assert_eq!(stem_with("goes", &["es"]), "go");
    assert_eq!(stem_with("es", &["es"]), "es");
    assert_eq!(stem_with("sing", &["ing"]), "sing");
    assert_eq!(stem_with("swing", &["ing"]), "sw");
    assert_eq!(stem("fly"), "fly");
    assert_eq!(stem("red"), "red");
    assert_eq!(stem("ss"), "ss");
}

#[test]
fn test_stem_guard_falls_through_to_later_suffix() {
    // "es" fails the guard, "s" does not.
    assert_eq!(stem("yes"), "ye");
    assert_eq!(stem("bus"), "bu");
}

#[test]
fn test_stem_guard_counts_chars_not_bytes() {
    // 3 chars but 5 bytes: still too short for "es".
    assert_eq!(stem_with("ées", &["es"]), "ées");
    assert_eq!(stem_with("ñoes", &["es"]), "ño");
}

#[test]
fn test_stem_with_empty_table() {
    assert_eq!(stem_with("running", &[]), "running");
}

// ========== Pipeline ==========

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_hello_world() {
    assert_eq!(normalize("Hello, World!!!"), "hello world");
}

#[test]
fn test_normalize_stopwords_and_stems() {
    assert_eq!(normalize("I am running quickly"), "runn quick");
}

#[test]
fn test_normalize_spam_sample() {
    assert_eq!(normalize("You have WON a FREE prize!!!"), "won free prize");
    assert_eq!(normalize("FREE entry!! Txt WIN to 87121"), "free entry txt win 87121");
}

#[test]
fn test_normalize_ham_sample() {
    assert_eq!(normalize("meeting at 5"), "meet 5");
}

#[test]
fn test_normalize_no_word_characters() {
    assert_eq!(normalize("!!! ??? ..."), "");
    assert_eq!(normalize("   \n\t "), "");
}

#[test]
fn test_normalize_only_stopwords() {
    assert_eq!(normalize("It is what it IS."), "");
}

#[test]
fn test_normalize_punctuation_joins_words() {
    assert_eq!(normalize("don't e-mail U.S.A."), "dont email usa");
    assert_eq!(normalize("foo_bar"), "foobar");
}

#[test]
fn test_normalize_single_spaces() {
    assert_eq!(normalize("  call\n\nus ,  claim\tcash  "), "call us claim cash");
}

#[test]
fn test_normalize_unicode() {
    assert_eq!(normalize("Привет, МИР!"), "привет мир");
    assert_eq!(normalize("Won £1000 cash"), "won 1000 cash");
}

#[test]
fn test_normalize_deterministic() {
    let input = "URGENT! You have won a 1 week FREE membership in our £100,000 Prize Jackpot!";
    let first = normalize(input);
    for _ in 0..10 {
        assert_eq!(normalize(input), first);
    }
}

#[test]
fn test_renormalize_may_strip_again() {
    let once = normalize("running");
    assert_eq!(once, "runn");
    assert_eq!(normalize(&once), "runn");
    let once = normalize("flies");
    assert_eq!(normalize(&once), "fl");
    assert_eq!(normalize("goings"), "going");
    assert_eq!(normalize(&normalize("goings")), "go");
}

// ========== Detailed / Trait ==========

#[test]
fn test_normalize_detailed() {
    let d = normalize_detailed("I am running quickly");
    assert_eq!(d.tokens, vec!["i", "am", "running", "quickly"]);
    assert_eq!(d.stems, vec!["runn", "quick"]);
    assert_eq!(d.canonical, "runn quick");
    assert_eq!(d.dropped_stopwords(), 2);
    assert!(!d.is_empty());
}

#[test]
fn test_normalize_detailed_matches_normalize() {
    for input in ["", "Hello, World!!!", "You have WON a FREE prize!!!", "the"] {
        assert_eq!(normalize_detailed(input).canonical, normalize(input));
    }
}

#[test]
fn test_normalize_detailed_empty() {
    let d = normalize_detailed("the and of");
    assert!(d.is_empty());
    assert_eq!(d.canonical, "");
    assert_eq!(d.dropped_stopwords(), 3);
}

#[test]
fn test_normalizer_trait_object() {
    let n: Box<dyn TextNormalizer> = Box::new(Normalizer::new());
    assert_eq!(n.normalize("Hello, World!!!"), "hello world");
}

#[test]
fn test_normalizer_concurrent() {
    let n = Normalizer::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| n.normalize("Claim your FREE prizes today")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "claim free priz today");
        }
    });
}
