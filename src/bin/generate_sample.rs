use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const MOVIE_COUNT: usize = 120;

const GENRES: &[(&str, f64)] = &[
    ("Drama", 7.4),
    ("Comedy", 6.3),
    ("Action", 6.6),
    ("Horror", 5.7),
    ("Sci-Fi", 6.9),
    ("Documentary", 7.6),
    ("Animation", 7.1),
];

const ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Last", "Hidden", "Electric", "Broken", "Golden", "Midnight", "Distant",
    "Savage",
];

const NOUNS: &[&str] = &[
    "Harbor", "Empire", "Garden", "Frontier", "Signal", "Orchard", "Machine", "River", "Echo",
    "Crown",
];

const DIRECTORS: &[&str] = &[
    "A. Varga", "M. Okafor", "L. Brandt", "S. Ito", "R. Moreau", "J. Castillo",
];

/// One CSV row; field names are the column headers.
#[derive(Debug, Serialize)]
struct SampleMovie {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Rating")]
    rating: f64,
    #[serde(rename = "Year")]
    year: i64,
    #[serde(rename = "Director")]
    director: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_movies(rng: &mut SimpleRng) -> Vec<SampleMovie> {
    (0..MOVIE_COUNT)
        .map(|_| {
            let (genre, mean_rating) = *rng.pick(GENRES);
            let title = format!("The {} {}", rng.pick(ADJECTIVES), rng.pick(NOUNS));
            // Ratings on a 1-10 scale, one decimal.
            let rating = (rng.gauss(mean_rating, 1.1).clamp(1.0, 10.0) * 10.0).round() / 10.0;
            SampleMovie {
                title,
                genre: genre.to_string(),
                rating,
                year: 1960 + (rng.next_u64() % 65) as i64,
                director: rng.pick(DIRECTORS).to_string(),
            }
        })
        .collect()
}

fn write_csv(path: &str, movies: &[SampleMovie]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for movie in movies {
        writer.serialize(movie).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn to_batch(movies: &[SampleMovie]) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Title", DataType::Utf8, false),
        Field::new("Genre", DataType::Utf8, false),
        Field::new("Rating", DataType::Float64, false),
        Field::new("Year", DataType::Int64, false),
        Field::new("Director", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(movies.iter().map(|m| &m.title))),
            Arc::new(StringArray::from_iter_values(movies.iter().map(|m| &m.genre))),
            Arc::new(Float64Array::from_iter_values(movies.iter().map(|m| m.rating))),
            Arc::new(Int64Array::from_iter_values(movies.iter().map(|m| m.year))),
            Arc::new(StringArray::from_iter_values(movies.iter().map(|m| &m.director))),
        ],
    )
    .context("building record batch")?;
    Ok(batch)
}

fn write_parquet(path: &str, batch: &RecordBatch) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).context("creating parquet writer")?;
    writer.write(batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let movies = generate_movies(&mut rng);

    let csv_path = "sample_movies.csv";
    write_csv(csv_path, &movies)?;

    let parquet_path = "sample_movies.parquet";
    let batch = to_batch(&movies)?;
    write_parquet(parquet_path, &batch)?;

    println!(
        "Wrote {} movies in {} genres to {csv_path} and {parquet_path}",
        movies.len(),
        GENRES.len()
    );
    let preview = pretty_format_batches(&[batch.slice(0, 5)]).context("formatting preview")?;
    println!("{preview}");
    Ok(())
}
