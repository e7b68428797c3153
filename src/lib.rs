pub mod agent;
pub mod game_repr;
