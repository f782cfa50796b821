use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::model::{Movie, MovieTable};

/// Number of rows `top_n` returns when the caller has no preference.
pub const DEFAULT_TOP_N: usize = 5;

// ---------------------------------------------------------------------------
// Read-only queries over a loaded table
// ---------------------------------------------------------------------------
//
// A query whose column is absent returns an empty result rather than an error.

impl MovieTable {
    /// Row count per genre, largest first.  Equal counts keep the order in
    /// which their genre first appears in the table.
    pub fn counts_by_genre(&self) -> Vec<(String, usize)> {
        if !self.columns().genre {
            return Vec::new();
        }

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for movie in self.movies() {
            let slot = *slots.entry(movie.genre.as_str()).or_insert_with(|| {
                counts.push((movie.genre.as_str(), 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }

        // Stable: ties stay in first-seen order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(genre, n)| (genre.to_string(), n))
            .collect()
    }

    /// Mean rating per genre, keyed in ascending genre order.  Rows without a
    /// numeric rating are skipped; a genre with none is left out.
    pub fn average_rating_by_genre(&self) -> BTreeMap<String, f64> {
        let cols = self.columns();
        if !cols.genre || !cols.rating {
            return BTreeMap::new();
        }

        let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for movie in self.movies() {
            if let Some(rating) = movie.rating {
                let entry = sums.entry(movie.genre.as_str()).or_insert((0.0, 0));
                entry.0 += rating;
                entry.1 += 1;
            }
        }

        sums.into_iter()
            .map(|(genre, (sum, n))| (genre.to_string(), sum / n as f64))
            .collect()
    }

    /// The `n` highest-rated rows, best first.  Equal ratings keep source
    /// order; unrated rows sort after every rated one.
    pub fn top_n(&self, n: usize) -> Vec<&Movie> {
        if !self.columns().rating {
            return Vec::new();
        }

        let mut ranked: Vec<&Movie> = self.movies().iter().collect();
        ranked.sort_by(|a, b| by_rating_desc(a.rating, b.rating));
        ranked.truncate(n);
        ranked
    }

    /// Rows whose genre equals `genre` exactly (case-sensitive), in source order.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Movie> {
        if !self.columns().genre {
            return Vec::new();
        }
        self.movies().iter().filter(|m| m.genre == genre).collect()
    }
}

fn by_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
