//! Plain-text rendering of query results for the output log.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::data::model::Movie;

const NO_DATA: &str = "(no data)";

/// Label shown for rows whose genre cell is empty.
pub fn genre_label(genre: &str) -> &str {
    if genre.is_empty() {
        "(none)"
    } else {
        genre
    }
}

/// Rating with one decimal, or a dash when the row has none.
pub fn rating_text(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

pub fn movie_count(count: usize) -> String {
    format!("Total Number of Movies: {count}\n")
}

pub fn genre_counts(counts: &[(String, usize)]) -> String {
    let rows: Vec<(&str, String)> = counts
        .iter()
        .map(|(g, n)| (genre_label(g), n.to_string()))
        .collect();
    format!("Genre Counts:\n{}", key_value_block(&rows))
}

pub fn average_ratings(averages: &BTreeMap<String, f64>) -> String {
    let rows: Vec<(&str, String)> = averages
        .iter()
        .map(|(g, avg)| (genre_label(g), format!("{avg:.2}")))
        .collect();
    format!("Average Ratings by Genre:\n{}", key_value_block(&rows))
}

pub fn top_movies(n: usize, movies: &[&Movie]) -> String {
    let rows: Vec<[String; 3]> = movies
        .iter()
        .map(|m| {
            [
                m.title.clone(),
                genre_label(&m.genre).to_string(),
                rating_text(m.rating),
            ]
        })
        .collect();
    format!(
        "Top {n} Movies by Rating:\n{}",
        grid(["Title", "Genre", "Rating"], &rows)
    )
}

pub fn movies_in_genre(genre: &str, movies: &[&Movie]) -> String {
    if movies.is_empty() {
        return format!("No movies found in the genre '{genre}'.\n");
    }
    let rows: Vec<[String; 2]> = movies
        .iter()
        .map(|m| [m.title.clone(), rating_text(m.rating)])
        .collect();
    format!(
        "Movies in '{genre}' Genre:\n{}",
        grid(["Title", "Rating"], &rows)
    )
}

// ---------------------------------------------------------------------------
// Layout helpers
// ---------------------------------------------------------------------------

fn key_value_block(rows: &[(&str, String)]) -> String {
    if rows.is_empty() {
        return format!("{NO_DATA}\n");
    }
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in rows {
        let _ = writeln!(out, "{key:<width$}  {value}");
    }
    out
}

/// Left-aligned columns separated by two spaces, header first.
fn grid<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    if rows.is_empty() {
        return format!("{NO_DATA}\n");
    }
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, header.iter().copied(), &widths);
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::query::tests::table;

    #[test]
    fn test_movie_count() {
        assert_eq!(movie_count(3), "Total Number of Movies: 3\n");
    }

    #[test]
    fn test_genre_counts_are_aligned() {
        let counts = vec![("Drama".to_string(), 2), ("Sci-Fi".to_string(), 10)];
        assert_eq!(
            genre_counts(&counts),
            "Genre Counts:\nDrama   2\nSci-Fi  10\n"
        );
        assert_eq!(genre_counts(&[]), "Genre Counts:\n(no data)\n");
    }

    #[test]
    fn test_average_ratings_two_decimals() {
        let mut avgs = BTreeMap::new();
        avgs.insert("Comedy".to_string(), 6.0);
        avgs.insert(String::new(), 7.25);
        assert_eq!(
            average_ratings(&avgs),
            "Average Ratings by Genre:\n(none)  7.25\nComedy  6.00\n"
        );
    }

    #[test]
    fn test_top_movies_grid() {
        let t = table(&[
            ("A", "Drama", Some(8.0)),
            ("Brazil", "Comedy", None),
            ("C", "Drama", Some(9.0)),
        ]);
        let text = top_movies(2, &t.top_n(2));
        assert_eq!(
            text,
            "Top 2 Movies by Rating:\n\
             Title  Genre  Rating\n\
             C      Drama  9.0\n\
             A      Drama  8.0\n"
        );
    }

    #[test]
    fn test_movies_in_genre() {
        let t = table(&[("A", "Drama", Some(8.0)), ("Brazil", "Comedy", None)]);
        assert_eq!(
            movies_in_genre("Comedy", &t.filter_by_genre("Comedy")),
            "Movies in 'Comedy' Genre:\nTitle   Rating\nBrazil  -\n"
        );
        assert_eq!(
            movies_in_genre("Musical", &t.filter_by_genre("Musical")),
            "No movies found in the genre 'Musical'.\n"
        );
    }
}
