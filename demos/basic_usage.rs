//! Builds a small defensive typing chart and prints every team of at most 6
//! typings that resists every attack type, best (lowest-scoring) first.

use pokelinks::{CoverageType, Multiplier, PokemonLinks, Resistance, TypeEncoding};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

fn typing(name: &str) -> TypeEncoding {
    TypeEncoding::from_str(name).unwrap()
}

fn main() {
    let mut typings = BTreeMap::new();
    typings.insert(
        typing("Ghost-Dark"),
        BTreeSet::from([
            Resistance::new(typing("Normal"), Multiplier::Immune),
            Resistance::new(typing("Psychic"), Multiplier::Immune),
        ]),
    );
    typings.insert(
        typing("Ground"),
        BTreeSet::from([Resistance::new(typing("Electric"), Multiplier::Immune)]),
    );
    typings.insert(
        typing("Water"),
        BTreeSet::from([
            Resistance::new(typing("Fire"), Multiplier::Half),
            Resistance::new(typing("Water"), Multiplier::Half),
        ]),
    );

    let mut dlx = PokemonLinks::new(&typings, CoverageType::Defense);
    let mut teams: Vec<_> = dlx.exact_coverages_functional(pokelinks::DEFAULT_TEAM_SIZE).into_iter().collect();
    teams.sort();

    for team in teams {
        let names: Vec<String> = team.iter().map(TypeEncoding::to_string).collect();
        println!("rank {:>3}: {}", team.rank(), names.join(", "));
    }
}
