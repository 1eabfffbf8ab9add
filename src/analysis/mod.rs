mod types;
mod error;
mod bases;
mod fasta;
mod motif;
mod translate;
mod weight;
mod primer;
mod analyzer;

pub use types::*;
pub use error::*;
pub use bases::*;
pub use fasta::*;
pub use motif::*;
pub use translate::*;
pub use weight::*;
pub use primer::*;
pub use analyzer::*;
