pub mod config;
pub mod coverage;
pub mod table;
pub mod transliterate;
pub mod unicode;

pub use table::SubstitutionTable;
pub use transliterate::transliterate;
