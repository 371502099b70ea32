/// Population of each voivodeship on 1 Jan 2019.
/// Data from: https://pl.wikipedia.org/wiki/Ludno%C5%9B%C4%87_Polski#Ludno%C5%9B%C4%87_wed%C5%82ug_wojew%C3%B3dztw
pub const POPULATION: [(&str, u64); 16] = [
    ("dolnośląskie", 2_901_225),
    ("kujawsko-pomorskie", 2_077_775),
    ("lubelskie", 2_117_619),
    ("lubuskie", 1_014_548),
    ("łódzkie", 2_466_322),
    ("małopolskie", 3_400_577),
    ("mazowieckie", 5_403_412),
    ("opolskie", 986_506),
    ("podkarpackie", 2_129_015),
    ("podlaskie", 1_181_533),
    ("pomorskie", 2_333_523),
    ("śląskie", 4_533_565),
    ("świętokrzyskie", 1_241_546),
    ("warmińsko-mazurskie", 1_428_983),
    ("wielkopolskie", 3_493_969),
    ("zachodniopomorskie", 1_701_030),
];

pub fn population(region: &str) -> Option<u64> {
    POPULATION
        .iter()
        .find(|(name, _)| *name == region)
        .map(|&(_, population)| population)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_sixteen_voivodeships_once() {
        assert_eq!(POPULATION.len(), 16);
        for (index, (name, _)) in POPULATION.iter().enumerate() {
            assert!(
                POPULATION[index + 1..].iter().all(|(other, _)| other != name),
                "duplicate entry for {name}"
            );
        }
    }

    #[test]
    fn looks_up_known_regions() {
        assert_eq!(population("mazowieckie"), Some(5_403_412));
        assert_eq!(population("warmińsko-mazurskie"), Some(1_428_983));
    }

    #[test]
    fn unknown_regions_have_no_entry() {
        assert_eq!(population("atlantis"), None);
    }
}
