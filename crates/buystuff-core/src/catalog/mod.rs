//! Static storefront catalogs.
//!
//! Two read-only ordered catalogs are exposed: visual media (movies) and
//! printed media (books). The engine only ever reads them; ownership of the
//! content sits with whoever curates the demo data.

mod model;

pub use model::{CatalogEntry, EntryDetails, MediaKind};

use once_cell::sync::Lazy;

fn movie(id: u32, title: &str, director: &str, year: u16, genre: &str, price: f64) -> CatalogEntry {
    CatalogEntry {
        id,
        title: title.to_string(),
        price,
        image: format!("/images/movies/{}.jpg", id),
        year,
        genre: genre.to_string(),
        details: EntryDetails::Visual {
            director: director.to_string(),
        },
    }
}

fn book(id: u32, title: &str, author: &str, year: u16, genre: &str, price: f64) -> CatalogEntry {
    CatalogEntry {
        id,
        title: title.to_string(),
        price,
        image: format!("/images/books/{}.jpg", id),
        year,
        genre: genre.to_string(),
        details: EntryDetails::Print {
            author: author.to_string(),
        },
    }
}

static VISUAL_CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    vec![
        movie(1, "The Seventh Seal", "Ingmar Bergman", 1957, "Drama, Fantasy", 12.99),
        movie(2, "Metropolis", "Fritz Lang", 1927, "Sci-Fi, Drama", 9.99),
        movie(3, "Seven Samurai", "Akira Kurosawa", 1954, "Action, Drama", 14.50),
        movie(4, "Modern Times", "Charlie Chaplin", 1936, "Comedy, Drama", 8.75),
        movie(5, "Vertigo", "Alfred Hitchcock", 1958, "Mystery, Thriller", 13.25),
        movie(6, "Bicycle Thieves", "Vittorio De Sica", 1948, "Drama", 10.00),
    ]
});

static PRINT_CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    vec![
        book(1, "Moby-Dick", "Herman Melville", 1851, "Adventure", 11.50),
        book(2, "Pride and Prejudice", "Jane Austen", 1813, "Romance, Classic", 7.99),
        book(3, "Crime and Punishment", "Fyodor Dostoevsky", 1866, "Psychological, Classic", 9.25),
        book(4, "The Count of Monte Cristo", "Alexandre Dumas", 1844, "Adventure, Classic", 12.00),
        book(5, "Frankenstein", "Mary Shelley", 1818, "Gothic, Sci-Fi", 6.75),
        book(6, "Don Quixote", "Miguel de Cervantes", 1605, "Satire, Classic", 10.40),
    ]
});

/// The visual media (movie) catalog, in display order.
pub fn visual_catalog() -> &'static [CatalogEntry] {
    &VISUAL_CATALOG
}

/// The printed media (book) catalog, in display order.
pub fn print_catalog() -> &'static [CatalogEntry] {
    &PRINT_CATALOG
}
