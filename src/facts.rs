use rand::seq::SliceRandom;

/// Rotating banner facts shown while a load is in flight.
pub const FACTS: &[&str] = &[
    "The universe is vast and contains billions of galaxies, each with billions of stars.",
    "Sunlight takes approximately 8 minutes and 20 seconds to reach Earth.",
    "Jupiter is the largest planet in our solar system and hosts a giant storm that has lasted for centuries.",
    "The Milky Way, our galaxy, is a barred spiral galaxy and has a supermassive black hole at its center.",
    "There are more stars in the universe than grains of sand on all the beaches on Earth.",
];

pub fn random_fact() -> &'static str {
    FACTS.choose(&mut rand::thread_rng()).copied().unwrap_or(FACTS[0])
}
