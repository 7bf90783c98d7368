pub mod cards;
pub mod theme;
