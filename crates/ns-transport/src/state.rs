//! Per-traveller state.

use ns_core::NodeId;
use ns_spatial::Distance;

/// The whole record of one traveller.
///
/// `travel_time` is measured in edge-weight units (the same units as the
/// season length), starts at `start_time` and never decreases.  Once
/// `position == destination` the traveller is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelAgent {
    pub position:    NodeId,
    pub destination: NodeId,

    /// Offset into the season cycle the traveller set out at.
    pub start_time: Distance,

    /// Accumulated clock, including `start_time`.
    pub travel_time: Distance,
}

impl TravelAgent {
    /// A traveller at `position` whose clock starts at `start_time`.
    pub fn new(position: NodeId, destination: NodeId, start_time: Distance) -> Self {
        Self { position, destination, start_time, travel_time: start_time }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.position == self.destination
    }

    /// Time spent travelling so far (excludes the start offset).
    #[inline]
    pub fn elapsed(&self) -> Distance {
        self.travel_time - self.start_time
    }
}
