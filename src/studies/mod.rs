// Smaller study pieces that sit next to the two construction patterns.

pub mod account;
pub mod arrays;
pub mod notebooks;
