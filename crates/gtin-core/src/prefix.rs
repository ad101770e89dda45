//! # GS1 Prefix Table
//!
//! Resolves the GS1 member organization (or special allocation) that issued
//! a GTIN from its leading digits.
//!
//! The table is keyed by exact 2- or 3-digit strings. There is no range
//! logic: a block such as 30-37 is stored as eight literal 2-digit rows.
//! Lookup tries the 3-digit key first and falls back to the 2-digit key, so
//! a narrow allocation (e.g. `050` coupons) wins over the broader block it
//! sits inside (`05`, GS1 US).
//!
//! Organization names are displayed verbatim by consumers. Changing a string
//! is a behavioral change even if the new one means the same thing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::PrefixError;

const RESTRICTED: &str = "Restricted distribution";
const COUPONS: &str = "Coupons";

/// Every allocated prefix, sorted by key.
static PREFIX_ROWS: &[(&str, &str)] = &[
    ("00", "GS1 US"),
    ("01", "GS1 US"),
    ("02", "GS1 US"),
    ("020", RESTRICTED),
    ("021", RESTRICTED),
    ("022", RESTRICTED),
    ("023", RESTRICTED),
    ("024", RESTRICTED),
    ("025", RESTRICTED),
    ("026", RESTRICTED),
    ("027", RESTRICTED),
    ("028", RESTRICTED),
    ("029", RESTRICTED),
    ("03", "GS1 US"),
    ("04", "GS1 US"),
    ("040", RESTRICTED),
    ("041", RESTRICTED),
    ("042", RESTRICTED),
    ("043", RESTRICTED),
    ("044", RESTRICTED),
    ("045", RESTRICTED),
    ("046", RESTRICTED),
    ("047", RESTRICTED),
    ("048", RESTRICTED),
    ("049", RESTRICTED),
    ("05", "GS1 US"),
    ("050", COUPONS),
    ("051", COUPONS),
    ("052", COUPONS),
    ("053", COUPONS),
    ("054", COUPONS),
    ("055", COUPONS),
    ("056", COUPONS),
    ("057", COUPONS),
    ("058", COUPONS),
    ("059", COUPONS),
    ("06", "GS1 US"),
    ("07", "GS1 US"),
    ("08", "GS1 US"),
    ("09", "GS1 US"),
    ("10", "GS1 US"),
    ("11", "GS1 US"),
    ("12", "GS1 US"),
    ("13", "GS1 US"),
    ("20", RESTRICTED),
    ("21", RESTRICTED),
    ("22", RESTRICTED),
    ("23", RESTRICTED),
    ("24", RESTRICTED),
    ("25", RESTRICTED),
    ("26", RESTRICTED),
    ("27", RESTRICTED),
    ("28", RESTRICTED),
    ("29", RESTRICTED),
    ("30", "GS1 France"),
    ("31", "GS1 France"),
    ("32", "GS1 France"),
    ("33", "GS1 France"),
    ("34", "GS1 France"),
    ("35", "GS1 France"),
    ("36", "GS1 France"),
    ("37", "GS1 France"),
    ("380", "GS1 Bulgaria"),
    ("383", "GS1 Slovenija"),
    ("385", "GS1 Croatia"),
    ("387", "GS1 BIH (Bosnia-Herzegovina)"),
    ("389", "GS1 Montenegro"),
    ("40", "GS1 Germany"),
    ("41", "GS1 Germany"),
    ("42", "GS1 Germany"),
    ("43", "GS1 Germany"),
    ("440", "GS1 Germany"),
    ("45", "GS1 Japan"),
    ("46", "GS1 Russia"),
    ("470", "GS1 Kyrgyzstan"),
    ("471", "GS1 Chinese Taipei"),
    ("474", "GS1 Estonia"),
    ("475", "GS1 Latvia"),
    ("476", "GS1 Azerbaijan"),
    ("477", "GS1 Lithuania"),
    ("478", "GS1 Uzbekistan"),
    ("479", "GS1 Sri Lanka"),
    ("480", "GS1 Philippines"),
    ("481", "GS1 Belarus"),
    ("482", "GS1 Ukraine"),
    ("483", "GS1 Turkmenistan"),
    ("484", "GS1 Moldova"),
    ("485", "GS1 Armenia"),
    ("486", "GS1 Georgia"),
    ("487", "GS1 Kazakstan"),
    ("488", "GS1 Tajikistan"),
    ("489", "GS1 Hong Kong, China"),
    ("49", "GS1 Japan"),
    ("50", "GS1 UK"),
    ("520", "GS1 Association Greece"),
    ("521", "GS1 Association Greece"),
    ("528", "GS1 Lebanon"),
    ("529", "GS1 Cyprus"),
    ("530", "GS1 Albania"),
    ("531", "GS1 Macedonia"),
    ("535", "GS1 Malta"),
    ("539", "GS1 Ireland"),
    ("54", "GS1 Belgium & Luxembourg"),
    ("560", "GS1 Portugal"),
    ("569", "GS1 Iceland"),
    ("57", "GS1 Denmark"),
    ("590", "GS1 Poland"),
    ("594", "GS1 Romania"),
    ("599", "GS1 Hungary"),
    ("600", "GS1 South Africa"),
    ("601", "GS1 South Africa"),
    ("603", "GS1 Ghana"),
    ("604", "GS1 Senegal"),
    ("608", "GS1 Bahrain"),
    ("609", "GS1 Mauritius"),
    ("611", "GS1 Morocco"),
    ("613", "GS1 Algeria"),
    ("615", "GS1 Nigeria"),
    ("616", "GS1 Kenya"),
    ("618", "GS1 Ivory Coast"),
    ("619", "GS1 Tunisia"),
    ("620", "GS1 Tanzania"),
    ("621", "GS1 Syria"),
    ("622", "GS1 Egypt"),
    ("623", "GS1 Brunei"),
    ("624", "GS1 Libya"),
    ("625", "GS1 Jordan"),
    ("626", "GS1 Iran"),
    ("627", "GS1 Kuwait"),
    ("628", "GS1 Saudi Arabia"),
    ("629", "GS1 Emirates"),
    ("630", "GS1 Qatar"),
    ("64", "GS1 Finland"),
    ("69", "GS1 China"),
    ("70", "GS1 Norway"),
    ("729", "GS1 Israel"),
    ("73", "GS1 Sweden"),
    ("740", "GS1 Guatemala"),
    ("741", "GS1 El Salvador"),
    ("742", "GS1 Honduras"),
    ("743", "GS1 Nicaragua"),
    ("744", "GS1 Costa Rica"),
    ("745", "GS1 Panama"),
    ("746", "GS1 Republica Dominicana"),
    ("750", "GS1 Mexico"),
    ("754", "GS1 Canada"),
    ("755", "GS1 Canada"),
    ("759", "GS1 Venezuela"),
    ("76", "GS1 Switzerland"),
    ("770", "GS1 Colombia"),
    ("771", "GS1 Colombia"),
    ("773", "GS1 Uruguay"),
    ("775", "GS1 Peru"),
    ("777", "GS1 Bolivia"),
    ("778", "GS1 Argentina"),
    ("779", "GS1 Argentina"),
    ("780", "GS1 Chile"),
    ("784", "GS1 Paraguay"),
    ("786", "GS1 Ecuador"),
    ("789", "GS1 Brasil"),
    ("790", "GS1 Brasil"),
    ("80", "GS1 Italy"),
    ("81", "GS1 Italy"),
    ("82", "GS1 Italy"),
    ("83", "GS1 Italy"),
    ("84", "GS1 Spain"),
    ("850", "GS1 Cuba"),
    ("858", "GS1 Slovakia"),
    ("859", "GS1 Czech"),
    ("860", "GS1 Serbia"),
    ("865", "GS1 Mongolia"),
    ("867", "GS1 North Korea"),
    ("868", "GS1 Turkey"),
    ("869", "GS1 Turkey"),
    ("87", "GS1 Netherlands"),
    ("880", "GS1 South Korea"),
    ("884", "GS1 Cambodia"),
    ("885", "GS1 Thailand"),
    ("888", "GS1 Singapore"),
    ("890", "GS1 India"),
    ("893", "GS1 Vietnam"),
    ("896", "GS1 Pakistan"),
    ("899", "GS1 Indonesia"),
    ("90", "GS1 Austria"),
    ("91", "GS1 Austria"),
    ("93", "GS1 Australia"),
    ("94", "GS1 New Zealand"),
    ("950", "GS1 Global Office"),
    ("951", "GS1 Global Office (EPCglobal)"),
    ("955", "GS1 Malaysia"),
    ("958", "GS1 Macau"),
    ("96", "GS1 Global Office (GTIN-8)"),
    ("977", "ISSN"),
    ("978", "ISBN"),
    ("979", "ISBN"),
    ("980", "Refund receipts"),
    ("981", "Coupons (common currency area)"),
    ("982", "Coupons (common currency area)"),
    ("983", "Coupons (common currency area)"),
    ("984", "Coupons (common currency area)"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| PREFIX_ROWS.iter().copied().collect())
}

/// Resolve the GS1 member organization for the leading digits of `code`.
///
/// `code` is used as given: it is not trimmed or validated. The first three
/// characters are tried before the first two; a candidate is skipped when
/// `code` is too short to supply it.
///
/// # Errors
///
/// Returns [`PrefixError::NotFound`] if neither candidate is a row.
pub fn lookup(code: &str) -> Result<&'static str, PrefixError> {
    let table = table();
    [code.get(..3), code.get(..2)]
        .into_iter()
        .flatten()
        .find_map(|key| table.get(key).copied())
        .ok_or(PrefixError::NotFound)
}

/// Iterate every `(prefix, organization)` row in ascending prefix order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    PREFIX_ROWS.iter().copied()
}

/// Number of rows in the prefix table.
pub fn len() -> usize {
    PREFIX_ROWS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rows_are_two_or_three_ascii_digits() {
        for (prefix, name) in entries() {
            assert!(
                matches!(prefix.len(), 2 | 3) && prefix.bytes().all(|b| b.is_ascii_digit()),
                "bad prefix {prefix:?}"
            );
            assert!(!name.is_empty(), "empty name for {prefix}");
        }
    }

    #[test]
    fn rows_are_unique_and_sorted() {
        let keys: Vec<&str> = entries().map(|(k, _)| k).collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(table().len(), len());
    }

    #[test]
    fn us_block() {
        assert_eq!(lookup("012345678905").unwrap(), "GS1 US");
        assert_eq!(lookup("036000291452").unwrap(), "GS1 US");
        assert_eq!(lookup("139").unwrap(), "GS1 US");
    }

    #[test]
    fn three_digit_row_beats_two_digit_row() {
        assert_eq!(lookup("0212345").unwrap(), RESTRICTED);
        assert_eq!(lookup("0451234").unwrap(), RESTRICTED);
        assert_eq!(lookup("0551234").unwrap(), COUPONS);
        assert_eq!(lookup("0612345").unwrap(), "GS1 US");
    }

    #[test]
    fn special_allocations() {
        assert_eq!(lookup("9780306406157").unwrap(), "ISBN");
        assert_eq!(lookup("9791234567896").unwrap(), "ISBN");
        assert_eq!(lookup("9771234567003").unwrap(), "ISSN");
        assert_eq!(lookup("980").unwrap(), "Refund receipts");
        assert_eq!(lookup("96385074").unwrap(), "GS1 Global Office (GTIN-8)");
    }

    #[test]
    fn country_rows() {
        assert_eq!(lookup("4006381333931").unwrap(), "GS1 Germany");
        assert_eq!(lookup("4401234").unwrap(), "GS1 Germany");
        assert_eq!(lookup("5012345").unwrap(), "GS1 UK");
        assert_eq!(lookup("6291041500213").unwrap(), "GS1 Emirates");
        assert_eq!(lookup("8961234").unwrap(), "GS1 Pakistan");
        assert_eq!(lookup("3012345").unwrap(), "GS1 France");
    }

    #[test]
    fn unallocated_prefixes_miss() {
        assert_eq!(lookup("999999999999"), Err(PrefixError::NotFound));
        assert_eq!(lookup("14"), Err(PrefixError::NotFound));
        assert_eq!(lookup("441"), Err(PrefixError::NotFound));
        assert_eq!(lookup("970"), Err(PrefixError::NotFound));
    }

    #[test]
    fn short_inputs() {
        assert_eq!(lookup(""), Err(PrefixError::NotFound));
        assert_eq!(lookup("0"), Err(PrefixError::NotFound));
        assert_eq!(lookup("50").unwrap(), "GS1 UK");
    }

    #[test]
    fn input_is_not_trimmed() {
        assert_eq!(lookup(" 012345678905"), Err(PrefixError::NotFound));
        // Only the first two or three characters are consulted.
        assert_eq!(lookup("50abc").unwrap(), "GS1 UK");
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(lookup("é12"), Err(PrefixError::NotFound));
        assert_eq!(lookup("5é"), Err(PrefixError::NotFound));
    }
}
