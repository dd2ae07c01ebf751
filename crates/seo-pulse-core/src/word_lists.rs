//! Fixed word lists for the target language (Turkish).
//!
//! The stopword list feeds keyword extraction; the vowel set feeds the
//! syllable estimate in [`crate::readability`].

use std::collections::HashSet;
use std::sync::LazyLock;

/// Vowels counted as syllable nuclei, including circumflex variants.
pub const VOWELS: &[char] = &['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü', 'â', 'î', 'û'];

/// Common Turkish function words excluded from keyword extraction.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "acaba", "ama", "ancak", "artık", "aslında", "az", "bana", "bazen", "bazı", "bazıları",
        "belki", "ben", "beni", "benim", "beri", "beş", "bile", "bin", "bir", "birçok", "biri",
        "birkaç", "birkez", "birşey", "birşeyi", "biz", "bize", "bizi", "bizim", "böyle",
        "böylece", "bu", "buna", "bunda", "bundan", "bunlar", "bunları", "bunların", "bunu",
        "bunun", "burada", "çok", "çünkü", "da", "daha", "dahi", "de", "defa", "değil", "diğer",
        "diye", "doksan", "dokuz", "dolayı", "dolayısıyla", "dört", "elli", "en", "gibi", "göre",
        "hangi", "hatta", "hem", "hep", "hepsi", "her", "herhangi", "herkes", "hiç", "hiçbir",
        "için", "iki", "ile", "ilgili", "ise", "işte", "itibaren", "kadar", "karşın", "kendi",
        "kendine", "kendisi", "kez", "ki", "kim", "kime", "kimi", "kimin", "kimse", "mı", "mi",
        "mu", "mü", "nasıl", "ne", "neden", "nedenle", "nerde", "nerede", "nereye", "niye",
        "niçin", "o", "olan", "olarak", "oldu", "olduğu", "olduğunu", "olmak", "olsa", "olup",
        "on", "ona", "ondan", "onlar", "onları", "onların", "onu", "onun", "orada", "öyle",
        "pek", "rağmen", "sadece", "sanki", "sekiz", "seksen", "sen", "senden", "seni", "senin",
        "siz", "sizden", "sizi", "sizin", "şey", "şeyden", "şeyi", "şeyler", "şöyle", "şu",
        "şuna", "şunda", "şundan", "şunları", "şunu", "tarafından", "tüm", "üç", "üzere", "var",
        "vardı", "ve", "veya", "ya", "yani", "yapacak", "yapılan", "yapmak", "yaptı", "yedi",
        "yerine", "yetmiş", "yine", "yirmi", "yoksa", "yüz", "zaten",
    ]
    .into_iter()
    .collect()
});

/// The built-in stopword list as owned strings.
pub fn default_stopwords() -> HashSet<String> {
    STOPWORDS.iter().map(|w| (*w).to_string()).collect()
}

/// Whether `c` is a vowel of the target language (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    c.to_lowercase().any(|lower| VOWELS.contains(&lower))
}
