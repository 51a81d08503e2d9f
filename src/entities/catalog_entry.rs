// SPDX-License-Identifier: GPL-3.0-only

use rustemon::model::pokemon::Pokemon;
use serde::{Deserialize, Serialize};

/// Flat, owned record for one catalog entry, as handed to callers and kept
/// in the [`CatalogStore`](crate::CatalogStore). Built fresh on every fetch
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub image_url: Option<String>,
    pub species: String,
    pub types: Vec<String>,
    pub stats: Vec<CatalogStat>,
}

/// A single base stat, upstream order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStat {
    pub name: String,
    pub base_value: i64,
}

impl From<Pokemon> for CatalogEntry {
    fn from(pokemon: Pokemon) -> Self {
        CatalogEntry {
            name: pokemon.name,
            image_url: pokemon.sprites.front_default,
            species: pokemon.species.name,
            types: pokemon
                .types
                .into_iter()
                .map(|types| types.type_.name)
                .collect(),
            stats: pokemon
                .stats
                .into_iter()
                .map(|stat| CatalogStat {
                    name: stat.stat.name,
                    base_value: stat.base_stat,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rustemon::model::pokemon::{PokemonSprites, PokemonStat, PokemonType};
    use rustemon::model::resource::NamedApiResource;

    use super::*;

    fn named<T>(name: &str) -> NamedApiResource<T>
    where
        NamedApiResource<T>: Default,
    {
        let mut resource = NamedApiResource::default();
        resource.name = name.to_string();
        resource
    }

    fn typed(name: &str, slot: i64) -> PokemonType {
        PokemonType {
            slot,
            type_: named(name),
        }
    }

    fn stat(name: &str, base_stat: i64) -> PokemonStat {
        PokemonStat {
            stat: named(name),
            effort: 0,
            base_stat,
        }
    }

    #[test]
    fn maps_nested_upstream_shape_to_flat_entry() {
        let pokemon = Pokemon {
            name: "pikachu".to_string(),
            sprites: PokemonSprites {
                front_default: Some("https://sprites.example/pikachu.png".to_string()),
                ..Default::default()
            },
            species: named("pikachu"),
            types: vec![typed("electric", 1)],
            stats: vec![stat("speed", 90)],
            ..Default::default()
        };

        let entry = CatalogEntry::from(pokemon);

        assert_eq!(entry.name, "pikachu");
        assert_eq!(
            entry.image_url.as_deref(),
            Some("https://sprites.example/pikachu.png")
        );
        assert_eq!(entry.species, "pikachu");
        assert_eq!(entry.types, vec!["electric".to_string()]);
        assert_eq!(
            entry.stats,
            vec![CatalogStat {
                name: "speed".to_string(),
                base_value: 90
            }]
        );
    }

    #[test]
    fn preserves_upstream_type_and_stat_ordering() {
        let pokemon = Pokemon {
            name: "bulbasaur".to_string(),
            types: vec![typed("grass", 1), typed("poison", 2)],
            stats: vec![stat("hp", 45), stat("attack", 49)],
            ..Default::default()
        };

        let entry = CatalogEntry::from(pokemon);

        assert_eq!(entry.types, vec!["grass".to_string(), "poison".to_string()]);
        assert_eq!(entry.stats[0].name, "hp");
        assert_eq!(entry.stats[1].name, "attack");
    }
}
