use uuid::Uuid;

use crate::utils::postcode::postcode_matches;

/// Geographic matching rule gating which shipping methods apply to a
/// destination. Higher `priority` zones are evaluated first.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShippingZone {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    /// ISO alpha-2 codes; empty means any country.
    pub countries: Vec<String>,
    pub states: Vec<String>,
    /// Exact postcodes or `*`-glob patterns; empty means any postcode.
    pub postcodes: Vec<String>,
    pub priority: i32,
    pub is_active: bool,
}

impl ShippingZone {
    /// Country gates the match; state and postcode only refine it and an
    /// unconfigured dimension auto-matches.
    pub fn matches_address(&self, country: &str, state: &str, postcode: &str) -> bool {
        if !self.countries.is_empty()
            && !self
                .countries
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(country))
        {
            return false;
        }
        if !self.states.is_empty()
            && !self
                .states
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(state))
        {
            return false;
        }
        if !self.postcodes.is_empty()
            && !self
                .postcodes
                .iter()
                .any(|pattern| postcode_matches(pattern, postcode))
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(countries: &[&str], states: &[&str], postcodes: &[&str]) -> ShippingZone {
        ShippingZone {
            id: Uuid::new_v4(),
            merchant_id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            name: "test zone".to_string(),
            countries: countries.iter().map(|c| c.to_string()).collect(),
            states: states.iter().map(|s| s.to_string()).collect(),
            postcodes: postcodes.iter().map(|p| p.to_string()).collect(),
            priority: 0,
            is_active: true,
        }
    }

    #[test]
    fn empty_lists_match_anything() {
        let anywhere = zone(&[], &[], &[]);
        assert!(anywhere.matches_address("AU", "VIC", "3000"));
        assert!(anywhere.matches_address("NZ", "", ""));
    }

    #[test]
    fn country_is_the_gating_dimension() {
        let au = zone(&["AU"], &[], &[]);
        assert!(au.matches_address("AU", "VIC", "3000"));
        assert!(au.matches_address("au", "QLD", "4000"));
        assert!(!au.matches_address("NZ", "VIC", "3000"));
    }

    #[test]
    fn states_and_postcodes_refine_the_country_match() {
        let vic_metro = zone(&["AU"], &["VIC"], &["3*"]);
        assert!(vic_metro.matches_address("AU", "VIC", "3000"));
        assert!(vic_metro.matches_address("AU", "vic", "3331"));
        assert!(!vic_metro.matches_address("AU", "NSW", "3000"));
        assert!(!vic_metro.matches_address("AU", "VIC", "2000"));
        // State or postcode alone is never sufficient without country.
        assert!(!vic_metro.matches_address("NZ", "VIC", "3000"));
    }
}
