pub mod game;
pub mod keyvalue;
pub mod steam;
