//! `ns-spatial` — graph spaces and shortest-path distances.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `GraphSpace` (CSR), `GraphBuilder`, `NodeLabels`          |
//! | [`dijkstra`]   | `DistanceTable` (all-pairs Dijkstra)                      |
//! | [`multilayer`] | `MultilayerGraphSpace`, `MultilayerBuilder`               |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Forwards to `ns-core/serde`.                                 |

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod multilayer;


pub use dijkstra::DistanceTable;
pub use error::{SpatialError, SpatialResult};
pub use graph::{Distance, GraphBuilder, GraphSpace, NodeLabels};
pub use multilayer::{MultilayerBuilder, MultilayerGraphSpace};
