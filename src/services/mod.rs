pub mod geocode;
pub mod roulette;
pub mod search;
