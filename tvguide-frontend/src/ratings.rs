//! Content rating lookup: maps a rating label to the system it belongs to.

use tvguide_core::Rating;

const VCHIP: &[&str] = &["TV-Y", "TV-Y7", "TV-Y7-FV", "TV-G", "TV-PG", "TV-14", "TV-MA"];
const MPAA: &[&str] = &["G", "PG", "PG-13", "R", "NC-17", "NR"];

/// Build a guide rating for a content rating label such as `TV-14` or `PG-13`.
///
/// Unknown labels keep their value and carry no system.
pub fn rating_for(content_rating: &str) -> Rating {
    let value = content_rating.trim().to_string();
    let upper = value.to_ascii_uppercase();

    let system = if VCHIP.contains(&upper.as_str()) || upper.starts_with("TV-") {
        Some("VCHIP")
    } else if MPAA.contains(&upper.as_str()) {
        Some("MPAA")
    } else {
        None
    };

    Rating {
        value,
        system: system.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vchip_ratings() {
        let rating = rating_for("TV-14");
        assert_eq!(rating.value, "TV-14");
        assert_eq!(rating.system.as_deref(), Some("VCHIP"));
        assert_eq!(rating_for("tv-ma").system.as_deref(), Some("VCHIP"));
    }

    #[test]
    fn test_mpaa_ratings() {
        assert_eq!(rating_for("PG-13").system.as_deref(), Some("MPAA"));
        assert_eq!(rating_for(" R ").value, "R");
    }

    #[test]
    fn test_unknown_rating_has_no_system() {
        let rating = rating_for("12A");
        assert_eq!(rating.value, "12A");
        assert_eq!(rating.system, None);
    }
}
