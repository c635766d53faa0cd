//! Seed destinations loaded at startup and restored by the reset hook.

use crate::domain::{Destination, DestinationId};

/// Raw seed rows: name, climate, budget, best time. Ids are 1-based positions.
const SEED_ROWS: [(&str, &str, &str, &str); 5] = [
    ("Marrakesh", "arid", "medium", "Spring/Fall"),
    ("Phuket", "tropical", "medium", "November-April"),
    ("Rome", "mediterranean", "high", "April-June"),
    (
        "New York",
        "continental",
        "high",
        "April-June/September-November",
    ),
    ("Rio de Janeiro", "tropical", "medium", "December-March"),
];

/// Build the seed destinations with ids 1 to 5 in catalogue order.
#[must_use]
pub fn seed_destinations() -> Vec<Destination> {
    (1_i64..)
        .zip(SEED_ROWS)
        .map(|(id, (name, climate, budget, best_time))| Destination {
            id: DestinationId::new(id),
            name: name.to_owned(),
            climate: climate.to_owned(),
            budget: budget.to_owned(),
            best_time: best_time.to_owned(),
        })
        .collect()
}
