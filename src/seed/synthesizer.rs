use super::types::BookDocument;
use crate::catalog::types::RawRecord;

use rand::seq::SliceRandom;
use rand::Rng;

/// Substituted when the catalog record carries no title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Substituted when the catalog record carries no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

const PRICE_MIN: f64 = 5.0;
const PRICE_MAX: f64 = 50.0;
const AVAILABILITY_PROBABILITY: f64 = 0.8;
const POPULARITY_RANGE: u32 = 1000;

/// Derives the document identity from a catalog key.
///
/// Takes the last `/`-separated segment (`/works/OL42W` -> `OL42W`). Returns
/// `None` when that segment is empty, since such a record cannot be addressed
/// in the collection.
pub fn book_id_from_key(key: &str) -> Option<String> {
    let segment = key.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Builds a normalized document from a raw catalog record.
///
/// Pure aside from the injected random source: given the same record, the
/// non-random fields (id, title, author, cover, year) always come out the
/// same. Returns `None` when the key yields no identity or no category
/// labels were supplied.
pub fn synthesize<R: Rng>(
    raw: &RawRecord,
    categories: &[String],
    rng: &mut R,
) -> Option<BookDocument> {
    let id = book_id_from_key(&raw.key)?;
    let category = categories.choose(rng)?.clone();

    let title = raw
        .title
        .clone()
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let author = raw
        .author_name
        .as_ref()
        .and_then(|authors| authors.first())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Some(BookDocument {
        id,
        title,
        author,
        price: random_price(rng),
        availability: rng.gen_bool(AVAILABILITY_PROBABILITY),
        cover_id: raw.cover_i.map(|cover| cover.to_string()),
        category,
        first_publish_year: raw.first_publish_year.unwrap_or(0),
        mock_popularity: rng.gen_range(0..POPULARITY_RANGE),
    })
}

/// Uniform price in [5.00, 50.00], rounded to two decimals.
fn random_price<R: Rng>(rng: &mut R) -> f64 {
    let raw = rng.gen_range(PRICE_MIN..=PRICE_MAX);
    (raw * 100.0).round() / 100.0
}
