//! Exhaustive walk over short edit sequences, checking the form invariants
//! after every step.

use chrono::NaiveDate;
use pantry_core::{CategoryCatalog, CategoryOption, EntryForm, StorageState};

const DEPTH: usize = 4;

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, day).unwrap()
}

fn today() -> NaiveDate {
    d(1, 15)
}

#[derive(Debug, Clone)]
enum Edit {
    Category(Option<CategoryOption>),
    SubCategory(Option<CategoryOption>),
    Name(&'static str),
    Storage(StorageState),
    Purchase(NaiveDate),
    Expiration(NaiveDate),
    Dates(NaiveDate, Option<NaiveDate>),
}

fn catalog() -> CategoryCatalog {
    CategoryCatalog::builder()
        .category(CategoryOption::new("produce", "Produce", ""), vec![])
        .category(
            CategoryOption::new("dairy", "Dairy", ""),
            vec![
                CategoryOption::new("milk", "Milk", ""),
                CategoryOption::new("cheese", "Cheese", ""),
            ],
        )
        .category(
            CategoryOption::new("meat", "Meat", ""),
            vec![CategoryOption::new("beef", "Beef", "")],
        )
        .build()
        .unwrap()
}

fn edits(catalog: &CategoryCatalog) -> Vec<Edit> {
    let cat = |v: &str| catalog.category(v).cloned();
    let sub = |c: &str, v: &str| catalog.sub_category(c, v).cloned();
    vec![
        Edit::Category(cat("produce")),
        Edit::Category(cat("dairy")),
        Edit::Category(cat("meat")),
        Edit::Category(None),
        Edit::SubCategory(sub("dairy", "milk")),
        Edit::SubCategory(sub("dairy", "cheese")),
        Edit::SubCategory(sub("meat", "beef")),
        Edit::SubCategory(None),
        Edit::Name("Leftovers"),
        Edit::Storage(StorageState::Frozen),
        Edit::Purchase(d(1, 1)),
        Edit::Purchase(d(1, 12)),
        Edit::Purchase(d(1, 20)),
        Edit::Expiration(d(1, 5)),
        Edit::Expiration(d(2, 1)),
        Edit::Dates(d(1, 10), Some(d(1, 3))),
    ]
}

fn check_invariants(form: &EntryForm<'_>, catalog: &CategoryCatalog, trail: &[Edit]) {
    let state = form.state();

    if let Some(sub) = state.sub_category() {
        let category = state
            .category()
            .unwrap_or_else(|| panic!("subcategory without category after {:?}", trail));
        assert!(
            catalog.contains_sub_category(&category.value, sub),
            "subcategory {} outside {} after {:?}",
            sub.value,
            category.value,
            trail
        );
    }

    assert!(state.purchase_date() <= today(), "future purchase after {:?}", trail);

    if let Some(exp) = state.expiration_date() {
        assert!(exp >= state.purchase_date(), "unordered dates after {:?}", trail);
    }
}

fn apply(form: &mut EntryForm<'_>, edit: &Edit, trail: &[Edit]) {
    let name_before = form.state().item_name().to_string();
    let before = form.state().clone();

    match edit {
        Edit::Category(c) => {
            form.select_category(c.clone());
            assert!(form.state().sub_category().is_none(), "cascade kept sub after {:?}", trail);
            assert_eq!(form.state().item_name(), "", "cascade kept name after {:?}", trail);
        }
        Edit::SubCategory(s) => match form.select_sub_category(s.clone()) {
            Ok(()) => match s {
                Some(s) => assert_eq!(form.state().item_name(), s.label),
                None => assert_eq!(form.state().item_name(), name_before),
            },
            Err(_) => assert_eq!(form.state(), &before, "rejected edit mutated state"),
        },
        Edit::Name(n) => form.set_item_name(*n),
        Edit::Storage(s) => {
            form.set_storage(*s);
            assert_eq!(form.state().item_name(), name_before);
        }
        Edit::Purchase(p) => {
            if form.set_purchase_date(*p).is_err() {
                assert_eq!(form.state(), &before, "rejected edit mutated state");
            }
            assert_eq!(form.state().item_name(), name_before);
        }
        Edit::Expiration(e) => {
            form.set_expiration_date(*e);
            assert_eq!(form.state().item_name(), name_before);
        }
        Edit::Dates(p, e) => {
            if form.set_dates(*p, *e).is_err() {
                assert_eq!(form.state(), &before, "rejected edit mutated state");
            }
        }
    }
}

fn walk(form: &EntryForm<'_>, catalog: &CategoryCatalog, edits: &[Edit], trail: &mut Vec<Edit>) -> usize {
    if trail.len() == DEPTH {
        return 1;
    }
    let mut visited = 0;
    for edit in edits {
        let mut next = form.clone();
        trail.push(edit.clone());
        apply(&mut next, edit, trail);
        check_invariants(&next, catalog, trail);
        visited += walk(&next, catalog, edits, trail);
        trail.pop();
    }
    visited
}

#[test]
fn test_invariants_hold_for_all_short_sequences() {
    let catalog = catalog();
    let edits = edits(&catalog);
    let form = EntryForm::with_today(&catalog, today());
    check_invariants(&form, &catalog, &[]);

    let visited = walk(&form, &catalog, &edits, &mut Vec::new());
    assert_eq!(visited, edits.len().pow(DEPTH as u32));
}

#[test]
fn test_user_name_survives_unrelated_edits() {
    let catalog = catalog();
    let mut form = EntryForm::with_today(&catalog, today());
    form.select_category_by_value("dairy").unwrap();
    form.select_sub_category_by_value("milk").unwrap();
    form.set_item_name("Oat Milk");

    form.set_storage(StorageState::Frozen);
    form.set_storage(StorageState::Refrigerated);
    form.set_purchase_date(d(1, 2)).unwrap();
    form.set_expiration_date(d(1, 1));
    form.select_sub_category(None).unwrap();

    assert_eq!(form.state().item_name(), "Oat Milk");
    assert!(!form.name_is_derived());
}
