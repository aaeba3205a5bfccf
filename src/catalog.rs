/// Static movie catalogs
///
/// One fixed, ordered table per page. Posters are looked up relative to
/// the working directory; entries whose files are missing simply walk the
/// resolver's fallback chain, so a sparse assets directory degrades to
/// placeholder panels instead of breaking the page.

use crate::poster::placeholder::PLACEHOLDER_SOURCE;
use crate::state::data::Movie;

/// Star Wars page: single primary source per record.
/// The Empire Strikes Back entry still uses the legacy `image_url` field.
pub const STAR_WARS_MOVIES: &[Movie] = &[
    Movie {
        title: "Star Wars: Episode IV - A New Hope",
        year: 1977,
        description: "Luke Skywalker joins forces with a Jedi Knight, a cocky pilot, \
                      a Wookiee and two droids to save the galaxy from the Empire's \
                      world-destroying battle station.",
        poster: Some("assets/posters/a-new-hope.jpg"),
        image_url: None,
        poster_sources: &[],
    },
    Movie {
        title: "Star Wars: Episode V - The Empire Strikes Back",
        year: 1980,
        description: "After the Rebels are brutally overpowered by the Empire on the \
                      ice planet Hoth, Luke Skywalker begins Jedi training with Yoda.",
        poster: None,
        image_url: Some("assets/posters/empire-strikes-back.jpg"),
        poster_sources: &[],
    },
    Movie {
        title: "Star Wars: Episode VI - Return of the Jedi",
        year: 1983,
        description: "After rescuing Han Solo from Jabba the Hutt, the Rebels attempt \
                      to destroy the second Death Star.",
        poster: Some("assets/posters/return-of-the-jedi.jpg"),
        image_url: None,
        poster_sources: &[],
    },
];

/// Star Trek page: ordered override lists per record, ending in the
/// built-in placeholder so every card resolves to something.
pub const STAR_TREK_MOVIES: &[Movie] = &[
    Movie {
        title: "Star Trek: The Motion Picture",
        year: 1979,
        description: "When an alien spacecraft of enormous power is spotted approaching \
                      Earth, Admiral James T. Kirk resumes command of the Starship \
                      Enterprise.",
        poster: Some("assets/posters/star-trek-tmp.jpg"),
        image_url: None,
        poster_sources: &[
            "assets/posters/star-trek-tmp.jpg",
            "assets/posters/alt/star-trek-tmp.jpg",
            PLACEHOLDER_SOURCE,
        ],
    },
    Movie {
        title: "Star Trek II: The Wrath of Khan",
        year: 1982,
        description: "Khan Noonien Singh escapes exile to exact revenge on Admiral \
                      Kirk, stealing the Genesis Device and forcing the Enterprise \
                      into battle.",
        poster: Some("assets/posters/star-trek-wrath-of-khan.jpg"),
        image_url: None,
        poster_sources: &[
            "assets/posters/star-trek-wrath-of-khan.jpg",
            "assets/posters/alt/star-trek-wrath-of-khan.jpg",
            PLACEHOLDER_SOURCE,
        ],
    },
    Movie {
        title: "Star Trek III: The Search for Spock",
        year: 1984,
        description: "Admiral Kirk and his bridge crew risk their careers stealing the \
                      decommissioned Enterprise to return to the restricted Genesis \
                      Planet to recover Spock's body.",
        poster: Some("assets/posters/star-trek-search-for-spock.jpg"),
        image_url: None,
        poster_sources: &[
            "assets/posters/star-trek-search-for-spock.jpg",
            "assets/posters/alt/star-trek-search-for-spock.jpg",
            PLACEHOLDER_SOURCE,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::resolver::derive_candidates;

    fn candidate_count(movie: &Movie) -> usize {
        let sources: Vec<String> =
            movie.poster_sources.iter().map(|s| s.to_string()).collect();
        derive_candidates(&sources, movie.poster, movie.image_url).len()
    }

    #[test]
    fn test_both_catalogs_have_three_movies() {
        assert_eq!(STAR_WARS_MOVIES.len(), 3);
        assert_eq!(STAR_TREK_MOVIES.len(), 3);
    }

    #[test]
    fn test_every_record_derives_candidates() {
        for movie in STAR_WARS_MOVIES.iter().chain(STAR_TREK_MOVIES) {
            assert!(candidate_count(movie) >= 1, "{} has no candidates", movie.title);
            assert!(!movie.title.is_empty());
            assert!(!movie.description.is_empty());
        }
    }

    #[test]
    fn test_trek_records_carry_override_lists() {
        for movie in STAR_TREK_MOVIES {
            assert!(!movie.poster_sources.is_empty(), "{}", movie.title);
            assert_eq!(
                movie.poster_sources.last().copied(),
                Some(PLACEHOLDER_SOURCE),
                "{} should end on the built-in placeholder",
                movie.title,
            );
            // The primary duplicates the first override entry; the merge
            // keeps a single copy.
            assert_eq!(candidate_count(movie), movie.poster_sources.len());
        }
    }

    #[test]
    fn test_legacy_alias_still_resolves() {
        let empire = &STAR_WARS_MOVIES[1];
        assert!(empire.poster.is_none());
        assert!(empire.image_url.is_some());
        assert_eq!(candidate_count(empire), 1);
    }
}
