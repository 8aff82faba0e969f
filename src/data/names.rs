//! Name pools for recruited guild heroes.

use rand::Rng;

static FIRST_NAMES: [&str; 16] = [
    "Will", "Ann", "Marcus", "Elena", "Theron", "Lyra", "Gareth", "Sera", "Roland", "Ivy",
    "Cedric", "Mira", "Aldric", "Nora", "Bran", "Freya",
];

static TITLES: [&str; 17] = [
    "the Conqueror",
    "the Slayer",
    "the Bold",
    "the Brave",
    "the Swift",
    "the Mighty",
    "the Fearless",
    "the Unyielding",
    "the Relentless",
    "the Valiant",
    "the Unbroken",
    "the Fierce",
    "the Dauntless",
    "Dragonbane",
    "Trollslayer",
    "Shadowbane",
    "the Undying",
];

pub fn random_hero_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let title = TITLES[rng.gen_range(0..TITLES.len())];
    format!("{} {}", first, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_name_has_first_and_title() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let name = random_hero_name(&mut rng);
        let first = name.split(' ').next().unwrap();
        assert!(FIRST_NAMES.contains(&first));
    }
}
