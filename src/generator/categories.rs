// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{CategoryMap, category_id};
use crate::error::GenResult;
use crate::models::Category;
use crate::reference::{CategorySeed, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::utils::new_id;
use rand::Rng;

/// Expense then income categories, with the name lookup used downstream.
pub fn generate_categories<R: Rng + ?Sized>(rng: &mut R) -> GenResult<(Vec<Category>, CategoryMap)> {
    let seeds: Vec<&CategorySeed> = EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES.iter())
        .collect();
    build_categories(rng, &seeds)
}

/// Emits one category per seed. A parent name must already have been emitted.
pub fn build_categories<R: Rng + ?Sized>(
    rng: &mut R,
    seeds: &[&CategorySeed],
) -> GenResult<(Vec<Category>, CategoryMap)> {
    let mut categories = Vec::with_capacity(seeds.len());
    let mut map = CategoryMap::new();
    for seed in seeds {
        let parent = match seed.parent {
            Some(p) => Some(category_id(&map, p)?),
            None => None,
        };
        let id = new_id(rng);
        map.insert(seed.name.to_string(), id);
        categories.push(Category {
            id,
            name: seed.name.to_string(),
            r#type: seed.kind,
            parent,
            icon: seed.icon.to_string(),
            color: seed.color.to_string(),
        });
    }
    Ok((categories, map))
}
