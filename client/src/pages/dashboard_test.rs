use super::*;

fn count(name: &str, value: i64) -> NamedCount {
    NamedCount { name: name.to_owned(), value }
}

// =============================================================
// Summary cards
// =============================================================

#[test]
fn summary_cards_format_each_counter() {
    let numbers = DashboardNumbers { total_users: 1200, approved_members: 45, pending_requests: 3, trusted_sources: 0 };
    let cards = summary_cards(&numbers);
    assert_eq!(cards[0], ("Total Users", "1,200".to_owned()));
    assert_eq!(cards[1], ("Approved Members", "45".to_owned()));
    assert_eq!(cards[2], ("Pending Requests", "3".to_owned()));
    assert_eq!(cards[3], ("Trusted Sources", "0".to_owned()));
}

// =============================================================
// Histogram
// =============================================================

#[test]
fn histogram_keeps_api_order_and_scales_bars() {
    let bars = histogram_bars(&[count("Verified", 40), count("Unverified", 80), count("False", 20)]);
    let names: Vec<&str> = bars.iter().map(|(row, _, _)| row.name.as_str()).collect();
    assert_eq!(names, ["Verified", "Unverified", "False"]);
    assert_eq!(bars[0].1, 50.0);
    assert_eq!(bars[1].1, 100.0);
    assert_eq!(bars[2].1, 25.0);
    assert_eq!(bars[2].2, "#F44336");
}

#[test]
fn empty_histogram_has_no_bars() {
    assert!(histogram_bars(&[]).is_empty());
}

// =============================================================
// Top members
// =============================================================

#[test]
fn top_contributor_is_first_entry() {
    let members = vec![
        TopMember { name: "ana".into(), votes: 9 },
        TopMember { name: "bo".into(), votes: 4 },
    ];
    assert_eq!(top_contributor(&members), Some("ana"));
    assert_eq!(top_contributor(&[]), None);
}
