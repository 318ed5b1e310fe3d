pub mod normalize;
pub mod table;

pub use normalize::{ingest, Ingested};
pub use table::RawTable;
