use std::fmt::Display;

use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payload {
    pub color: Color,
    pub label: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Red,
    Orange,
    Amber,
    Green,
    Emerald,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Color {
    pub const ALL: [Color; 14] = [
        Color::Red,
        Color::Orange,
        Color::Amber,
        Color::Green,
        Color::Emerald,
        Color::Teal,
        Color::Cyan,
        Color::Blue,
        Color::Indigo,
        Color::Violet,
        Color::Purple,
        Color::Fuchsia,
        Color::Pink,
        Color::Rose,
    ];
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Amber => "amber",
            Color::Green => "green",
            Color::Emerald => "emerald",
            Color::Teal => "teal",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Indigo => "indigo",
            Color::Violet => "violet",
            Color::Purple => "purple",
            Color::Fuchsia => "fuchsia",
            Color::Pink => "pink",
            Color::Rose => "rose",
        };

        write!(f, "{}", name)
    }
}

/// Creates demo payloads with a random item number and color. A fixed seed makes
/// the sequence of payloads reproducible.
#[derive(Debug)]
pub struct PayloadFactory {
    rng: StdRng,
}

impl PayloadFactory {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng }
    }

    pub fn create(&mut self) -> Payload {
        let number = self.rng.gen_range(0..1000);
        let color = Color::ALL[self.rng.gen_range(0..Color::ALL.len())];

        Payload {
            color,
            label: format!("Added Item #{}", number),
        }
    }
}

#[cfg(test)]
mod test {
    use super::PayloadFactory;

    #[test]
    fn seeded_factories_are_reproducible() {
        let mut first = PayloadFactory::new(Some(7));
        let mut second = PayloadFactory::new(Some(7));

        for _ in 0..10 {
            assert_eq!(first.create(), second.create());
        }
    }

    #[test]
    fn label_carries_item_number() {
        let mut factory = PayloadFactory::new(Some(1));
        for _ in 0..100 {
            let payload = factory.create();
            let number = payload
                .label
                .strip_prefix("Added Item #")
                .and_then(|n| n.parse::<u32>().ok())
                .expect("label with item number");

            assert!(number < 1000);
        }
    }
}
