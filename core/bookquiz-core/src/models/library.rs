use serde::Serialize;

/// Price of every library entry, in BookCoins.
pub const LIBRARY_PRICE: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryItem {
    pub id: u32,
    pub title: String,
    pub text: String,
    pub price: u64,
}

/// Library entry as the shelf view shows it: catalog data plus ownership.
#[derive(Debug, Clone, Serialize)]
pub struct ShelfEntry {
    pub id: u32,
    pub title: String,
    pub price: u64,
    pub owned: bool,
}
