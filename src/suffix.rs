/// Static second-level suffix table used by the `main` domain mode
///
/// This is a small hand-maintained approximation of the public suffix list:
/// only ccTLDs that register names under a second-level category
/// (`example.co.uk`, `shop.com.au`) are listed. Bump `SUFFIX_TABLE_VERSION`
/// whenever an entry changes so stored labels can be traced to a table.

pub const SUFFIX_TABLE_VERSION: u32 = 3;

/// Generic top-level tokens. As a TLD they are suffix-only: the fallback
/// rule never fires under them (`api.gov.com` stays `gov.com`).
pub const GENERIC_TOKENS: &[&str] = &["com", "org", "net", "gov", "edu", "mil", "int"];

/// Second-level categories recognized under any ccTLD, tabled or not
/// (`co.kr`, `ac.at`, `com.mx`, `com.jp`)
pub const FALLBACK_CATEGORIES: &[&str] =
    &["co", "ac", "com", "org", "net", "gov", "edu", "mil", "int"];

/// Second-level categories per ccTLD
pub const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "uk",
        &["co", "org", "net", "gov", "edu", "ac", "ltd", "plc", "me", "nhs", "police", "sch"],
    ),
    ("au", &["com", "net", "org", "edu", "gov", "asn", "id", "csiro"]),
    (
        "nz",
        &["co", "net", "org", "govt", "ac", "school", "geek", "gen", "kiwi", "maori"],
    ),
    (
        "ca",
        &["ab", "bc", "mb", "nb", "nf", "nl", "ns", "nt", "nu", "on", "pe", "qc", "sk", "yk"],
    ),
    ("jp", &["co", "ne", "or", "ac", "ad", "ed", "go", "gr", "lg"]),
    ("za", &["co", "org", "net", "gov", "edu", "ac", "web", "nom"]),
    (
        "br",
        &["com", "net", "org", "gov", "edu", "art", "blog", "eco", "ind", "inf", "med"],
    ),
    (
        "in",
        &["co", "net", "org", "firm", "gen", "ind", "ac", "edu", "res", "gov", "mil", "nic"],
    ),
    ("cn", &["com", "net", "org", "gov", "edu", "ac", "mil"]),
];

/// `.de` has no second-level categories; fallback categories only count once the
/// hostname is long enough that the category can't be the registrable name.
const DE_MIN_PARTS: usize = 4;

fn contains_ignore_case(set: &[&str], token: &str) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(token))
}

/// Look up the category list for a ccTLD
pub fn categories_for(tld: &str) -> Option<&'static [&'static str]> {
    CATEGORY_TABLE
        .iter()
        .find(|(cc, _)| cc.eq_ignore_ascii_case(tld))
        .map(|(_, categories)| *categories)
}

/// Count how many trailing hostname parts form the public suffix (1 or 2)
///
/// Algorithm:
/// 1. Fewer than 3 parts → 1 (there is no room for a registrable name below a
///    two-part suffix)
/// 2. TLD is `de` → 2 only for a fallback category with at least 4 parts
/// 3. TLD has a category list → 2 if the second-to-last part is listed
/// 4. Otherwise (and for tabled TLDs whose list misses it) → 2 if the
///    second-to-last part is a fallback category and the TLD is not itself a
///    generic token
///
/// Examples:
/// - mail.google.co.uk → 2 (co.uk)
/// - shop.example.com.au → 2 (com.au)
/// - www.example.co.kr → 2 (co.kr)
/// - www.example.com → 1
/// - api.gov.com → 1 (com is suffix-only)
pub fn suffix_len(parts: &[&str]) -> usize {
    if parts.len() < 3 {
        return 1;
    }

    let tld = parts[parts.len() - 1];
    let sld = parts[parts.len() - 2];

    let fallback = contains_ignore_case(FALLBACK_CATEGORIES, sld)
        && !contains_ignore_case(GENERIC_TOKENS, tld);

    let is_category = if tld.eq_ignore_ascii_case("de") {
        parts.len() >= DE_MIN_PARTS && fallback
    } else {
        categories_for(tld).is_some_and(|categories| contains_ignore_case(categories, sld))
            || fallback
    };

    if is_category { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(hostname: &str) -> Vec<&str> {
        hostname.split('.').collect()
    }

    #[test]
    fn test_suffix_len_country_categories() {
        assert_eq!(suffix_len(&parts("example.co.uk")), 2);
        assert_eq!(suffix_len(&parts("news.bbc.co.uk")), 2);
        assert_eq!(suffix_len(&parts("shop.example.com.au")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.nz")), 2);
        assert_eq!(suffix_len(&parts("city.example.qc.ca")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.jp")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.za")), 2);
        assert_eq!(suffix_len(&parts("www.example.com.br")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.in")), 2);
        assert_eq!(suffix_len(&parts("www.example.com.cn")), 2);
    }

    #[test]
    fn test_suffix_len_country_without_category() {
        assert_eq!(suffix_len(&parts("www.google.co")), 1);
        assert_eq!(suffix_len(&parts("www.bbc.uk")), 1);
        assert_eq!(suffix_len(&parts("www.google.ca")), 1);
        assert_eq!(suffix_len(&parts("www.example.jp")), 1);
    }

    #[test]
    fn test_suffix_len_fallback_under_tabled_tld() {
        // "com" is not in the .jp list but is a fallback category
        assert_eq!(suffix_len(&parts("www.example.com.jp")), 2);
        assert_eq!(suffix_len(&parts("shop.example.co.au")), 2);
        assert_eq!(suffix_len(&parts("www.example.ne.jp")), 2);
    }

    #[test]
    fn test_suffix_len_co_and_ac_under_unlisted_tld() {
        assert_eq!(suffix_len(&parts("www.example.co.kr")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.il")), 2);
        assert_eq!(suffix_len(&parts("www.uni.ac.at")), 2);
        assert_eq!(suffix_len(&parts("www.example.kr")), 1);
    }

    #[test]
    fn test_suffix_len_generic_rule() {
        assert_eq!(suffix_len(&parts("www.example.com.mx")), 2);
        assert_eq!(suffix_len(&parts("portal.gov.pl")), 2);
        assert_eq!(suffix_len(&parts("api.gov.com")), 1);
        assert_eq!(suffix_len(&parts("mail.net.org")), 1);
    }

    #[test]
    fn test_suffix_len_de() {
        assert_eq!(suffix_len(&parts("www.example.de")), 1);
        assert_eq!(suffix_len(&parts("example.com.de")), 1);
        assert_eq!(suffix_len(&parts("shop.example.com.de")), 2);
        assert_eq!(suffix_len(&parts("www.example.co.de")), 2);
    }

    #[test]
    fn test_suffix_len_short_hostnames() {
        assert_eq!(suffix_len(&parts("co.uk")), 1);
        assert_eq!(suffix_len(&parts("github.com")), 1);
        assert_eq!(suffix_len(&parts("localhost")), 1);
    }

    #[test]
    fn test_suffix_len_ignores_case() {
        assert_eq!(suffix_len(&parts("WWW.Example.CO.UK")), 2);
        assert_eq!(categories_for("UK").map(|c| c.contains(&"co")), Some(true));
    }
}
