//! Item selection lists.
//!
//! Items are written as numeric ids. Older records spell them by name.

/// Item ids with their legacy names.
const ITEMS: [(i32, &[&str]); 9] = [
    (1, &["Laser Gun", "Laser"]),
    (2, &["Mine"]),
    (3, &["Lightning"]),
    (4, &["Teleport"]),
    (5, &["Super Jump"]),
    (6, &["Jet Pack"]),
    (7, &["Speed Burst"]),
    (8, &["Sword"]),
    (9, &["Ice Wave"]),
];

/// Every item id, in order.
pub const ALL_ITEMS: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

fn item_id(token: &str) -> Option<i32> {
    ITEMS.iter().find_map(|(id, names)| {
        let numeric = token.parse::<i32>().ok() == Some(*id);
        (numeric || names.contains(&token)).then_some(*id)
    })
}

/// Parses a backtick-joined item list, keeping order and duplicates.
///
/// Unknown tokens are dropped.
#[must_use]
pub fn parse_items(value: &str) -> Vec<i32> {
    value
        .split('`')
        .filter_map(|token| {
            let id = item_id(token);
            if id.is_none() && !token.is_empty() {
                log::debug!("dropping unknown item {token:?}");
            }
            id
        })
        .collect()
}

/// Formats an item list as backtick-joined ids.
#[must_use]
pub fn format_items(items: &[i32]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("`")
}
