/// Full-name to ISO-3166 alpha-2 lookup used to normalize free-form
/// checkout input before zone matching. Names are stored lowercase;
/// lookups are case-insensitive.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("afghanistan", "AF"),
    ("argentina", "AR"),
    ("australia", "AU"),
    ("austria", "AT"),
    ("bangladesh", "BD"),
    ("belgium", "BE"),
    ("brazil", "BR"),
    ("bulgaria", "BG"),
    ("cambodia", "KH"),
    ("canada", "CA"),
    ("chile", "CL"),
    ("china", "CN"),
    ("colombia", "CO"),
    ("croatia", "HR"),
    ("czech republic", "CZ"),
    ("czechia", "CZ"),
    ("denmark", "DK"),
    ("egypt", "EG"),
    ("estonia", "EE"),
    ("fiji", "FJ"),
    ("finland", "FI"),
    ("france", "FR"),
    ("germany", "DE"),
    ("great britain", "GB"),
    ("greece", "GR"),
    ("hong kong", "HK"),
    ("hungary", "HU"),
    ("iceland", "IS"),
    ("india", "IN"),
    ("indonesia", "ID"),
    ("ireland", "IE"),
    ("israel", "IL"),
    ("italy", "IT"),
    ("japan", "JP"),
    ("kenya", "KE"),
    ("latvia", "LV"),
    ("lithuania", "LT"),
    ("luxembourg", "LU"),
    ("malaysia", "MY"),
    ("mexico", "MX"),
    ("netherlands", "NL"),
    ("new zealand", "NZ"),
    ("nigeria", "NG"),
    ("norway", "NO"),
    ("pakistan", "PK"),
    ("papua new guinea", "PG"),
    ("peru", "PE"),
    ("philippines", "PH"),
    ("poland", "PL"),
    ("portugal", "PT"),
    ("romania", "RO"),
    ("saudi arabia", "SA"),
    ("singapore", "SG"),
    ("slovakia", "SK"),
    ("slovenia", "SI"),
    ("south africa", "ZA"),
    ("south korea", "KR"),
    ("spain", "ES"),
    ("sri lanka", "LK"),
    ("sweden", "SE"),
    ("switzerland", "CH"),
    ("taiwan", "TW"),
    ("thailand", "TH"),
    ("turkey", "TR"),
    ("ukraine", "UA"),
    ("united arab emirates", "AE"),
    ("united kingdom", "GB"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("vietnam", "VN"),
];

/// Normalizes a destination country to an alpha-2 code. Two-letter input
/// passes through uppercased, full names match case-insensitively, and
/// anything else falls back to the raw input so matching degrades to a
/// literal string comparison against the zone's country list.
pub fn normalize_country(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return trimmed.to_ascii_uppercase();
    }
    let lowered = trimmed.to_ascii_lowercase();
    match COUNTRY_CODES.iter().find(|(name, _)| *name == lowered) {
        Some((_, code)) => (*code).to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names_resolve_case_insensitively() {
        assert_eq!(normalize_country("Australia"), "AU");
        assert_eq!(normalize_country("NEW ZEALAND"), "NZ");
        assert_eq!(normalize_country("  united kingdom "), "GB");
    }

    #[test]
    fn alpha2_input_passes_through_uppercased() {
        assert_eq!(normalize_country("au"), "AU");
        assert_eq!(normalize_country("US"), "US");
    }

    #[test]
    fn unknown_input_falls_back_to_the_raw_string() {
        assert_eq!(normalize_country("Atlantis"), "Atlantis");
        assert_eq!(normalize_country("中国"), "中国");
    }
}
