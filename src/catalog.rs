//! Seeded movie catalog: a static in-process list, stable for the lifetime
//! of a run. Backs the public browse page and the initial database seed.

#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub genre: &'static str,
}

pub const MOVIES: &[CatalogEntry] = &[
    CatalogEntry { title: "The Godfather", genre: "Crime" },
    CatalogEntry { title: "Heat", genre: "Crime" },
    CatalogEntry { title: "Inception", genre: "Sci-Fi" },
    CatalogEntry { title: "Arrival", genre: "Sci-Fi" },
    CatalogEntry { title: "Alien", genre: "Horror" },
    CatalogEntry { title: "Casablanca", genre: "Romance" },
    CatalogEntry { title: "Singin' in the Rain", genre: "Musical" },
    CatalogEntry { title: "La La Land", genre: "Musical" },
    CatalogEntry { title: "Spirited Away", genre: "Animation" },
    CatalogEntry { title: "The Grand Budapest Hotel", genre: "Comedy" },
];

pub const TICKET_TYPES: &[(&str, f64)] =
    &[("Adult", 14.0), ("Child", 9.0), ("Senior", 11.0), ("Student", 12.0)];

pub fn movies() -> &'static [CatalogEntry] {
    MOVIES
}
