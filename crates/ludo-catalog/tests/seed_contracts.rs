//! Seed data contract tests.
//!
//! The seed set is the entire catalog: these tests pin down the shape the
//! API layer depends on. Counts, ordering keys, and cross-references must
//! hold for every build of the seed, independent of which store backend
//! later holds the documents.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use ludo_catalog::{Category, DifficultyLevel, SeedData};

#[test]
fn seed_has_ten_components_and_eight_steps() {
    let seed = SeedData::load().unwrap();
    assert_eq!(seed.components.len(), 10);
    assert_eq!(seed.steps.len(), 8);
}

#[test]
fn component_step_orders_are_contiguous_from_one() {
    let seed = SeedData::load().unwrap();
    let mut orders: Vec<u32> = seed.components.iter().map(|c| c.step_order).collect();
    orders.sort_unstable();
    assert_eq!(orders, (1..=10).collect::<Vec<u32>>());
}

#[test]
fn step_numbers_are_dense_from_one() {
    let seed = SeedData::load().unwrap();
    for (i, step) in seed.steps.iter().enumerate() {
        assert_eq!(step.step_number, u32::try_from(i).unwrap() + 1);
    }
}

#[test]
fn every_category_is_covered_exactly_once() {
    let seed = SeedData::load().unwrap();
    let categories: HashSet<Category> = seed.components.iter().map(|c| c.category).collect();
    assert_eq!(categories.len(), Category::ALL.len());
}

#[test]
fn component_ids_are_unique() {
    let seed = SeedData::load().unwrap();
    let ids: HashSet<String> = seed.components.iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids.len(), seed.components.len());
}

#[test]
fn connections_reference_seeded_categories() {
    let seed = SeedData::load().unwrap();
    let categories: HashSet<Category> = seed.components.iter().map(|c| c.category).collect();
    for component in &seed.components {
        for connection in &component.connections {
            assert!(
                categories.contains(connection),
                "{} connects to missing category {connection}",
                component.name
            );
        }
    }
}

#[test]
fn steps_reference_seeded_categories() {
    let seed = SeedData::load().unwrap();
    let categories: HashSet<Category> = seed.components.iter().map(|c| c.category).collect();
    for step in &seed.steps {
        for category in step.components_involved.iter().chain(&step.diagram_focus) {
            assert!(
                categories.contains(category),
                "step {} references missing category {category}",
                step.step_number
            );
        }
    }
}

#[test]
fn every_difficulty_level_is_represented() {
    let seed = SeedData::load().unwrap();
    let levels: HashSet<DifficultyLevel> = seed
        .components
        .iter()
        .map(|c| c.difficulty_level)
        .collect();
    assert!(levels.contains(&DifficultyLevel::Beginner));
    assert!(levels.contains(&DifficultyLevel::Intermediate));
    assert!(levels.contains(&DifficultyLevel::Advanced));
}

#[test]
fn narrative_fields_are_nonempty() {
    let seed = SeedData::load().unwrap();
    for component in &seed.components {
        assert!(!component.name.is_empty());
        assert!(!component.description.is_empty());
        assert!(!component.detailed_explanation.is_empty());
        assert!(!component.technologies.is_empty());
        assert!(!component.capacity_metrics.is_empty());
    }
    for step in &seed.steps {
        assert!(!step.title.is_empty());
        assert!(!step.beginner_explanation.is_empty());
        assert!(!step.advanced_explanation.is_empty());
        assert!(!step.technical_details.is_empty());
    }
}

#[test]
fn components_serialize_with_snake_case_wire_fields() {
    let seed = SeedData::load().unwrap();
    let value = serde_json::to_value(&seed.components[0]).unwrap();
    let object = value.as_object().unwrap();
    for field in [
        "id",
        "name",
        "description",
        "detailed_explanation",
        "category",
        "technologies",
        "protocols",
        "capacity_metrics",
        "position",
        "connections",
        "difficulty_level",
        "step_order",
        "created_at",
    ] {
        assert!(object.contains_key(field), "missing wire field {field}");
    }
    assert!(object["category"].is_string());
    assert!(object["difficulty_level"].is_string());
}
