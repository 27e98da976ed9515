pub mod access;
pub mod roster;
pub mod rounds;
pub mod scorecard;
pub mod scoring;
pub mod totals;
