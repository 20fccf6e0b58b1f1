use crate::models::{Industry, MediaKind, Mood, QueryFilters};

/// Mood and industry filter tables
///
/// Maps the user-facing mood/industry labels to TMDB discover directives.
/// The tables are fixed decision tables, never modified at runtime. Genre
/// identifiers are TMDB's: comma-joined lists mean AND, pipe-joined mean OR.
pub const WITH_GENRES: &str = "with_genres";
pub const WITHOUT_GENRES: &str = "without_genres";
pub const WITH_RUNTIME_LTE: &str = "with_runtime.lte";
pub const WITH_ORIGIN_COUNTRY: &str = "with_origin_country";

/// Directives contributed by a mood, per media kind
///
/// The tables are intentionally asymmetric: TV has its own genre taxonomy
/// (no horror or romance category), and a runtime cap has no meaning for a
/// series, so some moods degrade to an approximation or to nothing at all.
fn mood_directives(kind: MediaKind, mood: Mood) -> &'static [(&'static str, &'static str)] {
    match kind {
        MediaKind::Movie => match mood {
            Mood::Anything => &[],
            Mood::Cozy => &[(WITH_GENRES, "10751,35"), (WITHOUT_GENRES, "27,53")],
            Mood::FeelGood => &[(WITH_GENRES, "35"), (WITHOUT_GENRES, "18,27")],
            Mood::Adrenaline => &[(WITH_GENRES, "28,53")],
            Mood::Spooky => &[(WITH_GENRES, "27,53")],
            Mood::Brainy => &[(WITH_GENRES, "878,9648")],
            Mood::Silly => &[(WITH_GENRES, "35"), (WITHOUT_GENRES, "10749")],
            Mood::RomCom => &[(WITH_GENRES, "10749,35")],
            Mood::FamilyNight => &[(WITH_GENRES, "10751"), (WITHOUT_GENRES, "27,53")],
            Mood::ShortAndSweet => &[(WITH_RUNTIME_LTE, "100")],
        },
        MediaKind::Series => match mood {
            Mood::Anything => &[],
            Mood::Cozy => &[(WITH_GENRES, "35,10751")],
            Mood::FeelGood => &[(WITH_GENRES, "35"), (WITHOUT_GENRES, "80,9648")],
            Mood::Adrenaline => &[(WITH_GENRES, "10759")],
            Mood::Spooky => &[(WITH_GENRES, "9648,80")],
            Mood::Brainy => &[(WITH_GENRES, "99")],
            Mood::Silly => &[(WITH_GENRES, "16,35")],
            // TV has no romance genre; comedy+drama is the closest pairing
            Mood::RomCom => &[(WITH_GENRES, "35,18")],
            Mood::FamilyNight => &[(WITH_GENRES, "10751,10762")],
            // A runtime cap is meaningless for a series
            Mood::ShortAndSweet => &[],
        },
    }
}

/// Origin-country proxy for a production industry
fn origin_country(industry: Industry) -> Option<&'static str> {
    match industry {
        Industry::Any => None,
        Industry::Hollywood => Some("US"),
        Industry::Bollywood => Some("IN"),
        Industry::Nollywood => Some("NG"),
        Industry::Korean => Some("KR"),
        Industry::Japanese => Some("JP"),
        Industry::French => Some("FR"),
    }
}

/// Resolves (kind, mood, industry) to a concrete discover filter set
///
/// Mood directives are applied first, then industry directives (industry
/// wins on a colliding key). Two post-merge rules follow, in order:
/// the Nollywood+Rom-Com genre override replaces `with_genres` with an
/// OR-joined pair unconditionally, and series filter sets are stripped of
/// any runtime cap. Always succeeds; an unmapped combination just yields
/// fewer directives.
pub fn resolve_filters(kind: MediaKind, mood: Mood, industry: Industry) -> QueryFilters {
    let mut filters = QueryFilters::new();

    for &(directive, value) in mood_directives(kind, mood) {
        filters.insert(directive, value);
    }

    if let Some(country) = origin_country(industry) {
        filters.insert(WITH_ORIGIN_COUNTRY, country);
    }

    // Nollywood rom-coms are scarce under an AND genre pairing; widen to OR.
    // Evaluated after the merge so it beats whatever the tables produced.
    if industry == Industry::Nollywood && mood == Mood::RomCom {
        let pair = match kind {
            MediaKind::Movie => "10749|35",
            MediaKind::Series => "35|18",
        };
        filters.insert(WITH_GENRES, pair);
    }

    // The discover endpoint rejects runtime caps on the tv sub-resource
    if kind == MediaKind::Series {
        filters.remove(WITH_RUNTIME_LTE);
    }

    filters
}
