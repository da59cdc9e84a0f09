//! Earliest-arrival-per-destination reduction.
//!
//! The edge-source contract asks for one edge per neighbour: the one that
//! gets there first. Any store that can list qualifying departures can run
//! them through [`earliest_per_destination`] to satisfy it.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::{Departure, Station};
use crate::planner::NextEdge;

/// Keep, for each destination, the departure that arrives earliest.
///
/// Equal arrival times are broken by the smaller (older) departure id, so
/// the choice never depends on iteration order. Results are ordered by
/// destination station.
pub fn earliest_per_destination<'a>(
    candidates: impl IntoIterator<Item = &'a Departure>,
) -> Vec<NextEdge> {
    let mut best: BTreeMap<&Station, &Departure> = BTreeMap::new();

    for departure in candidates {
        match best.entry(departure.to()) {
            Entry::Vacant(slot) => {
                slot.insert(departure);
            }
            Entry::Occupied(mut slot) => {
                let current = slot.get();
                let key = (departure.arrive_time(), departure.id());
                if key < (current.arrive_time(), current.id()) {
                    slot.insert(departure);
                }
            }
        }
    }

    best.into_values()
        .map(|departure| NextEdge {
            to: departure.to().clone(),
            departure: departure.id(),
            price: departure.price(),
            arrive_time: departure.arrive_time(),
        })
        .collect()
}
