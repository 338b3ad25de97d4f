//! Presentation of journals and ledgers as display-ready rows

pub mod amount;
pub mod rows;
pub mod text;

pub use amount::*;
pub use rows::*;
pub use text::*;
