//! Parser tests against full diary page fixtures

mod common;

use common::{diary_page, numbered_rows, owner_row, public_row};
use filmdiary::models::Rating;
use filmdiary::parser::{has_next_page, parse_entries, parse_page};

#[test]
fn test_public_view_page() {
    let html = diary_page(
        &[
            public_row("Heat", "1995", "2021-07-04", Some(9), true),
            public_row("Ronin", "1998", "2021-07-02", None, false),
        ],
        false,
    );

    let entries = parse_entries(&html);
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].film_title, "Heat");
    assert_eq!(entries[0].film_year, "1995");
    assert_eq!(entries[0].date, "2021-07-04");
    assert_eq!(entries[0].rating, Rating::Stars(9));
    assert_eq!(entries[0].rating.to_string(), "4.5");
    assert!(entries[0].liked);
    assert!(!entries[0].rewatch);

    assert_eq!(entries[1].film_title, "Ronin");
    assert_eq!(entries[1].rating, Rating::NotRated);
    assert_eq!(entries[1].rating.to_string(), "Not rated");
    assert!(!entries[1].liked);
}

#[test]
fn test_owner_view_page() {
    let html = diary_page(
        &[
            owner_row("Thief", "1981", "2022-03-15", 7, true, true),
            owner_row("Collateral", "2004", "2022-03-01", 10, false, false),
        ],
        false,
    );

    let entries = parse_entries(&html);
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].rating.to_string(), "3.5");
    assert!(entries[0].liked);
    assert!(entries[0].rewatch);
    assert_eq!(entries[0].watched_on().map(|d| d.to_string()).as_deref(), Some("2022-03-15"));

    assert_eq!(entries[1].rating.to_string(), "5.0");
    assert!(!entries[1].liked);
    assert!(!entries[1].rewatch);
}

#[test]
fn test_entries_keep_page_order() {
    let html = diary_page(&numbered_rows(20, 0), true);
    let titles: Vec<String> = parse_entries(&html)
        .into_iter()
        .map(|e| e.film_title)
        .collect();

    let expected: Vec<String> = (0..20).map(|n| format!("Film {n}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn test_pagination_signal() {
    assert!(has_next_page(&diary_page(&numbered_rows(1, 0), true)));
    assert!(!has_next_page(&diary_page(&numbered_rows(1, 0), false)));
}

#[test]
fn test_page_without_rows() {
    let page = parse_page(&diary_page(&[], true));
    assert!(page.entries.is_empty());
    assert!(page.has_next);
}

#[test]
fn test_unrelated_markup_yields_nothing() {
    let page = parse_page("<html><body><p>This member's diary is private.</p></body></html>");
    assert!(page.entries.is_empty());
    assert!(!page.has_next);
}

#[test]
fn test_json_shape() {
    let html = diary_page(&[public_row("Heat", "1995", "2021-07-04", Some(8), false)], false);
    let json = serde_json::to_value(parse_entries(&html)).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "date": "2021-07-04",
            "filmTitle": "Heat",
            "filmYear": "1995",
            "rating": "4.0",
            "liked": false,
            "rewatch": false
        }])
    );
}
