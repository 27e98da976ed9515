pub mod participant;
pub mod round;
pub mod score;
pub mod scorecard;
