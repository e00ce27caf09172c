//! Integration tests for the project catalog and its filters.
//!
//! Tests cover:
//! - The three-record filter scenario
//! - Subset and order preservation for every selection
//! - Empty results and per-button counts
//! - Duplicate id rejection

mod common;

use lienzo::catalog;

use common::*;

#[test]
fn test_scenario_filters() -> anyhow::Result<()> {
    let catalog = ProjectCatalog::new(scenario_records())?;

    assert_eq!(ids(&catalog.filter(FilterSelection::Web)), vec![1, 3]);
    assert_eq!(ids(&catalog.filter(FilterSelection::Featured)), vec![1]);
    assert_eq!(ids(&catalog.filter(FilterSelection::Mobile)), vec![2]);
    assert_eq!(ids(&catalog.filter(FilterSelection::All)), vec![1, 2, 3]);

    Ok(())
}

#[test]
fn test_filter_is_ordered_subset() -> anyhow::Result<()> {
    let records = SiteContent::builtin(ContentVariant::Portfolio)?.project_records;

    for selection in FilterSelection::ALL {
        let filtered = catalog::filter(selection, &records);

        // Every result comes from the input, in input order.
        let positions: Vec<usize> = filtered
            .iter()
            .map(|record| {
                records
                    .iter()
                    .position(|candidate| candidate.id == record.id)
                    .expect("filtered record should come from the catalog")
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "{selection:?} reordered records"
        );

        for record in &filtered {
            match selection {
                FilterSelection::All => {}
                FilterSelection::Featured => assert!(record.featured),
                FilterSelection::Web => assert_eq!(record.category, Category::Web),
                FilterSelection::Mobile => assert_eq!(record.category, Category::Mobile),
            }
        }
    }

    // All is the identity.
    let all: Vec<ProjectRecord> = catalog::filter(FilterSelection::All, &records)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(all, records);

    Ok(())
}

#[test]
fn test_filter_leaves_records_untouched() -> anyhow::Result<()> {
    let catalog = ProjectCatalog::new(scenario_records())?;
    let before = catalog.clone();

    let _ = catalog.filter(FilterSelection::Featured);
    let _ = catalog.filter(FilterSelection::Mobile);

    assert_eq!(catalog, before);
    Ok(())
}

#[test]
fn test_empty_results_are_valid() -> anyhow::Result<()> {
    let catalog = ProjectCatalog::new(vec![
        make_record(1, Category::Web, false),
        make_record(2, Category::Web, false),
    ])?;

    assert!(catalog.filter(FilterSelection::Mobile).is_empty());
    assert!(catalog.filter(FilterSelection::Featured).is_empty());
    assert_eq!(catalog.count(FilterSelection::Mobile), 0);

    let empty = ProjectCatalog::new(Vec::new())?;
    assert!(empty.is_empty());
    for selection in FilterSelection::ALL {
        assert!(empty.filter(selection).is_empty());
    }

    Ok(())
}

#[test]
fn test_counts_for_builtin_catalog() -> anyhow::Result<()> {
    let catalog = SiteContent::builtin(ContentVariant::Exhibition)?.catalog()?;

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.count(FilterSelection::All), 6);
    assert_eq!(catalog.count(FilterSelection::Web), 4);
    assert_eq!(catalog.count(FilterSelection::Mobile), 2);
    assert_eq!(catalog.count(FilterSelection::Featured), 3);
    assert_eq!(ids(&catalog.filter(FilterSelection::Featured)), vec![1, 2, 5]);

    Ok(())
}

#[test]
fn test_lookup_by_id() -> anyhow::Result<()> {
    let catalog = ProjectCatalog::new(scenario_records())?;

    assert_eq!(catalog.get(2).map(|record| record.category), Some(Category::Mobile));
    assert!(catalog.get(42).is_none());

    Ok(())
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut records = scenario_records();
    records.push(make_record(2, Category::Web, true));

    let result = ProjectCatalog::new(records);
    assert!(matches!(result, Err(ContentError::DuplicateProjectId(2))));
}

#[test]
fn test_filter_aliases_parse() {
    use clap::ValueEnum;

    assert_eq!(
        FilterSelection::from_str("todos", true).ok(),
        Some(FilterSelection::All)
    );
    assert_eq!(
        FilterSelection::from_str("destacados", true).ok(),
        Some(FilterSelection::Featured)
    );
    assert_eq!(
        FilterSelection::from_str("web", true).ok(),
        Some(FilterSelection::Web)
    );
    assert!(FilterSelection::from_str("desktop", true).is_err());
}
