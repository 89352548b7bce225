//! Static zone-to-location table for Google Cloud regions.
//!
//! Maps the region prefix of a GCE zone identifier (e.g. `us-central1` for
//! zone `us-central1-a`) to the approximate location of that region's data
//! center. The table is fixed at build time; see
//! <https://cloud.google.com/compute/docs/regions-zones/> for the source data.

use std::sync::LazyLock;

use super::types::Geo;

/// Region prefix -> data center location.
static ZONE_TABLE: LazyLock<Vec<(&'static str, Geo)>> = LazyLock::new(|| {
    vec![
        (
            "asia-east1",
            Geo::new("Xianxi Township", Some("Changhua County"), "Taiwan", "TWN"),
        ),
        ("asia-east2", Geo::new("Hong Kong", None, "Hong Kong", "HK")),
        ("asia-northeast1", Geo::new("Tokyo", None, "Japan", "JP")),
        ("asia-south1", Geo::new("Mumbai", None, "India", "IN")),
        (
            "asia-southeast1",
            Geo::new("Jurong West", None, "Singapore", "SG"),
        ),
        (
            "australia-southeast1",
            Geo::new("Sydney", None, "Australia", "AU"),
        ),
        ("europe-north1", Geo::new("Hamina", None, "Finland", "FI")),
        ("europe-west1", Geo::new("St. Ghislain", None, "Belgium", "BE")),
        ("europe-west2", Geo::new("London", None, "England", "GB")),
        ("europe-west3", Geo::new("Frankfurt", None, "Germany", "DE")),
        ("europe-west4", Geo::new("Eemshaven", None, "Netherlands", "NL")),
        (
            "northamerica-northeast1",
            Geo::new("Montréal", Some("Québec"), "Canada", "CA"),
        ),
        (
            "southamerica-east1",
            Geo::new("São Paulo", None, "Brazil", "BR"),
        ),
        (
            "us-central1",
            Geo::new("Council Bluffs", Some("Iowa"), "United States", "US"),
        ),
        (
            "us-east1",
            Geo::new("Moncks Corner", Some("South Carolina"), "United States", "US"),
        ),
        (
            "us-east4",
            Geo::new("Ashburn", Some("Virginia"), "United States", "US"),
        ),
        (
            "us-west1",
            Geo::new("The Dalles", Some("Oregon"), "United States", "US"),
        ),
        (
            "us-west2",
            Geo::new("Los Angeles", Some("California"), "United States", "US"),
        ),
    ]
});

/// Looks up the location for a zone identifier.
///
/// A table entry matches when the zone identifier starts with the entry's
/// region prefix, so both `us-central1` and `us-central1-a` resolve to the
/// same location. When several prefixes match, the longest one wins; region
/// identifiers are prefixes of their zone identifiers by platform convention,
/// so the longest match is always the most specific region.
///
/// Returns `None` for zones outside the table. That is the only failure mode;
/// no I/O happens here.
pub fn lookup(zone_id: &str) -> Option<&'static Geo> {
    lookup_in(&ZONE_TABLE, zone_id)
}

/// Longest-prefix match against an arbitrary table. Split out so the
/// tie-break rule can be tested with synthetic overlapping prefixes.
fn lookup_in<'a>(table: &'a [(&str, Geo)], zone_id: &str) -> Option<&'a Geo> {
    table
        .iter()
        .filter(|(prefix, _)| zone_id.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, geo)| geo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_resolves_to_its_entry() {
        for (prefix, geo) in ZONE_TABLE.iter() {
            assert_eq!(lookup(prefix), Some(geo), "region {prefix}");
        }
    }

    #[test]
    fn test_zone_suffix_matches_region_entry() {
        let geo = lookup("us-central1-a").expect("known zone");
        assert_eq!(
            geo,
            &Geo::new("Council Bluffs", Some("Iowa"), "United States", "US")
        );
        assert_eq!(geo.search_string(), "Council Bluffs, Iowa");
    }

    #[test]
    fn test_unknown_zone_returns_none() {
        assert_eq!(lookup("mars-north1-a"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_similar_regions_do_not_cross_match() {
        // us-east1 and us-east4 share a prefix of each other's prefix, but
        // neither is a prefix of the other's zones.
        assert_eq!(lookup("us-east1-b").unwrap().city, "Moncks Corner");
        assert_eq!(lookup("us-east4-c").unwrap().city, "Ashburn");
    }

    #[test]
    fn test_longest_prefix_wins_on_ambiguity() {
        let table = vec![
            ("us-west", Geo::new("Somewhere", None, "United States", "US")),
            (
                "us-west1",
                Geo::new("The Dalles", Some("Oregon"), "United States", "US"),
            ),
        ];
        // Both prefixes match the zone; the more specific one must win,
        // regardless of declaration order.
        let geo = lookup_in(&table, "us-west1-b").expect("match");
        assert_eq!(geo.city, "The Dalles");

        let reversed: Vec<_> = table.into_iter().rev().collect();
        let geo = lookup_in(&reversed, "us-west1-b").expect("match");
        assert_eq!(geo.city, "The Dalles");
    }
}
