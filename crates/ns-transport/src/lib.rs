//! `ns-transport` — travellers routed across seasonal graph layers.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`state`]  | `TravelAgent` — per-traveller position, destination, clock       |
//! | [`season`] | `season` — travel time → active layer                            |
//! | [`policy`] | `RoutingPolicy`, `Hop`, `candidate_hops`, `hop_weights`, `sample_hop` |
//!
//! # Movement model
//!
//! Each tick, every traveller that has not arrived:
//!
//! 1. Picks the layer for its *own* accumulated travel time, so travellers
//!    that started at different offsets sit in different seasons.
//! 2. If the destination is unreachable in that layer, waits out the season:
//!    `travel_time += season_length`, position unchanged.
//! 3. Otherwise samples one neighbour that does not move it farther from the
//!    destination, weighted by how much closer it gets, moves there, and
//!    adds that improvement to its travel time.

pub mod policy;
pub mod season;
pub mod state;


pub use policy::{candidate_hops, hop_weights, sample_hop, Hop, RoutingPolicy};
pub use season::season;
pub use state::TravelAgent;
