use ns_core::LayerId;
use ns_spatial::Distance;

/// Layer active at travel time `t`: `(t / season_length) % n_layers`.
///
/// # Panics
/// Panics if `season_length` or `n_layers` is zero.  `RoutingPolicy::new`
/// and the `MultilayerGraphSpace` constructors both rule those out.
#[inline]
pub fn season(t: Distance, season_length: Distance, n_layers: usize) -> LayerId {
    LayerId::from_index(((t / season_length) % n_layers as u64) as usize)
}
