//! Synthetic catalog generation.
//!
//! Fills the catalog with lorem-style authors, publishers, and books at
//! startup. Ids are assigned sequentially from 1 within each collection.
//! Passing a fixed RNG seed reproduces the same catalog on every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{AuthorRecord, BookRecord, Catalog, PublisherRecord};

/// How many records to generate, and optionally a fixed RNG seed.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub authors: usize,
    pub publishers: usize,
    pub books: usize,
    /// When set, the catalog is identical across runs.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            authors: 20,
            publishers: 30,
            books: 100,
            rng_seed: None,
        }
    }
}

/// Authors credited per book, before deduplication.
const AUTHORS_PER_BOOK: usize = 3;

const ISBN_MIN: i32 = 100_000;
const ISBN_MAX: i32 = 10_000_000;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "magna",
    "tempor", "incididunt", "labore", "dolore", "aliqua", "enim", "minim", "veniam", "quis",
    "nostrud", "ullamco", "laboris", "nisi", "aliquip", "commodo", "consequat", "duis", "aute",
    "irure", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "proident", "sunt", "culpa", "officia", "deserunt", "mollit",
    "anim", "laborum", "vitae", "sapien",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

fn words(rng: &mut StdRng, count: usize) -> String {
    (0..count)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn paragraph(rng: &mut StdRng) -> String {
    let sentences: Vec<String> = (0..3)
        .map(|_| {
            let count = rng.gen_range(8..=12);
            let mut s = words(rng, count);
            if let Some(first) = s.get_mut(..1) {
                first.make_ascii_uppercase();
            }
            s.push('.');
            s
        })
        .collect();
    sentences.join(" ")
}

fn email(rng: &mut StdRng) -> String {
    let user = WORDS.choose(rng).copied().unwrap_or("lorem");
    let tag = rng.gen_range(1..=999);
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    format!("{user}{tag}@{domain}")
}

/// Generate a full catalog from the given configuration.
pub fn seed_catalog(config: &SeedConfig) -> Catalog {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let authors: Vec<AuthorRecord> = (1..=config.authors)
        .map(|id| AuthorRecord {
            id: id as i32,
            name: words(&mut rng, 2),
            email: email(&mut rng),
            bio: paragraph(&mut rng),
        })
        .collect();

    let publishers: Vec<PublisherRecord> = (1..=config.publishers)
        .map(|id| PublisherRecord {
            id: id as i32,
            name: words(&mut rng, 3),
        })
        .collect();

    let author_ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
    let publisher_ids: Vec<i32> = publishers.iter().map(|p| p.id).collect();

    let books: Vec<BookRecord> = (1..=config.books)
        .map(|id| BookRecord {
            id: id as i32,
            title: words(&mut rng, 4),
            isbn: rng.gen_range(ISBN_MIN..=ISBN_MAX),
            author_ids: pick_author_ids(&mut rng, &author_ids),
            publisher_id: publisher_ids.choose(&mut rng).copied().unwrap_or(0),
        })
        .collect();

    Catalog::new(authors, publishers, books)
}

/// Draw up to [`AUTHORS_PER_BOOK`] author ids, deduplicated, draw order kept.
fn pick_author_ids(rng: &mut StdRng, pool: &[i32]) -> Vec<i32> {
    let mut picked = Vec::with_capacity(AUTHORS_PER_BOOK);
    for _ in 0..AUTHORS_PER_BOOK {
        if let Some(id) = pool.choose(rng).copied()
            && !picked.contains(&id)
        {
            picked.push(id);
        }
    }
    picked
}
