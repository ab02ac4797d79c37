//! Property-Based Tests for Views Module
//!
//! Uses proptest to check pagination arithmetic, selector ordering and the
//! page routing decision against arbitrary catalogs.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::catalog::{
    CatalogBrand, CatalogItem, CatalogType, CatalogUriComposer, InMemoryCatalog, ListingQuery,
};
use crate::flags::StaticFlags;
use crate::views::{
    build_select_list, CatalogViewService, PageRoute, PaginationInfo, BUCKET_PAGE_SIZE,
    DISABLED_MARKER, SMALL_PAGE_SIZE,
};

// == Strategies ==
/// Items with brand and type ids drawn from 1..=3.
fn catalog_items_strategy() -> impl Strategy<Value = Vec<CatalogItem>> {
    prop::collection::vec((1u32..=3, 1u32..=3), 0..30).prop_map(|rows| {
        rows.into_iter()
            .zip(1u32..)
            .map(|((brand, kind), id)| CatalogItem {
                id,
                name: format!("Item {}", id),
                description: String::new(),
                price: Decimal::new(i64::from(id) * 25, 2),
                picture_uri: format!("{}.png", id),
                catalog_brand_id: brand,
                catalog_type_id: kind,
            })
            .collect()
    })
}

fn listing_query_strategy() -> impl Strategy<Value = ListingQuery> {
    (
        0i64..6,
        1i64..9,
        prop::option::of(1u32..=3),
        prop::option::of(1u32..=3),
    )
        .prop_map(|(page, size, brand, kind)| {
            ListingQuery::new(page, size, brand, kind).expect("strategy yields valid queries")
        })
}

fn build_service(items: Vec<CatalogItem>, small_pages: bool, bucket: bool) -> CatalogViewService {
    let catalog = Arc::new(InMemoryCatalog::new(
        items,
        vec![CatalogBrand::new(1, "One"), CatalogBrand::new(2, "Two")],
        vec![CatalogType::new(1, "Mug")],
    ));
    let mut enabled = Vec::new();
    if small_pages {
        enabled.push("FT0002");
    }
    if bucket {
        enabled.push("FT0001");
    }

    CatalogViewService::new(
        catalog.clone(),
        catalog.clone(),
        catalog,
        Arc::new(CatalogUriComposer::new("https://shop.test")),
        Arc::new(StaticFlags::new(enabled)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // **Property: Pagination Arithmetic**
    // total_pages is the ceiling of total/size and the pager markers follow
    // the page position.
    #[test]
    fn prop_pagination_arithmetic(
        page in 0u32..50,
        size in 1u32..50,
        total in 0u64..500
    ) {
        let info = PaginationInfo::new(page, size, 0, total);

        prop_assert_eq!(info.total_pages, (total + u64::from(size) - 1) / u64::from(size));
        prop_assert_eq!(info.has_previous, page > 0);
        prop_assert_eq!(info.has_next, u64::from(page) + 1 < info.total_pages);
        prop_assert_eq!(info.previous == DISABLED_MARKER, page == 0);
        prop_assert_eq!(info.next == DISABLED_MARKER, !info.has_next);
    }

    // **Property: Selector Ordering**
    // Selector lists start with the "All" sentinel and the rest is sorted by label.
    #[test]
    fn prop_selector_ordering(labels in prop::collection::vec("[A-Za-z .]{0,12}", 0..20)) {
        let list = build_select_list(labels.iter().enumerate().map(|(i, l)| (i as u32, l.clone())));

        prop_assert_eq!(list.len(), labels.len() + 1);
        prop_assert_eq!(list[0].text.as_str(), "All");
        prop_assert!(list[0].value.is_none());
        prop_assert!(list[0].selected);
        prop_assert!(list[1..].windows(2).all(|w| w[0].text <= w[1].text));
    }

    // **Property: Page Assembly**
    // For any catalog, query and flag combination: at most one page of items
    // is returned, total_pages matches the effective page size, and the page
    // size is only overridden by an enabled route whose condition holds.
    #[test]
    fn prop_page_assembly(
        items in catalog_items_strategy(),
        query in listing_query_strategy(),
        small_pages in any::<bool>(),
        bucket in any::<bool>()
    ) {
        let filter = query.filter();
        let total = items.iter().filter(|i| filter.matches(i)).count() as u64;
        let service = build_service(items, small_pages, bucket);

        let view = tokio_test::block_on(service.build_page(&query)).unwrap();
        let info = &view.pagination_info;

        let expected_size = if bucket && total <= 6 {
            BUCKET_PAGE_SIZE
        } else if small_pages && total % 6 == 0 {
            SMALL_PAGE_SIZE
        } else {
            query.page_size
        };
        prop_assert_eq!(
            PageRoute::choose(total, small_pages, bucket).page_size(query.page_size),
            expected_size
        );

        prop_assert_eq!(info.items_per_page, expected_size);
        prop_assert_eq!(info.total_items, total);
        prop_assert_eq!(info.total_pages, total.div_ceil(u64::from(expected_size)));
        prop_assert!(view.catalog_items.len() as u32 <= expected_size);
        prop_assert_eq!(info.items_on_page as usize, view.catalog_items.len());
        prop_assert_eq!(view.brands.len(), 3);
    }
}
