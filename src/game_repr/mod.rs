mod castling;
mod error;
mod moves;
mod piece;
mod position;
mod rules;
mod piece_moves;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use error::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rules::*;
pub use piece_moves::*;
pub use bitboards::*;
