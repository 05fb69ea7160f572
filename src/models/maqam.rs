//! Modulation classification for a source maqam.
//!
//! Reachable target modes are partitioned into eight buckets, each anchored
//! at the scale degree the modulation pivots on. The buckets are produced by
//! the modulation engine in the consuming application; this core only reads
//! their lengths.

use serde::{Deserialize, Serialize};

/// Reachable modulations from a source maqam, bucketed by pivot degree.
///
/// Generic over the target-mode payload because nothing here inspects it.
/// Absent buckets deserialize as empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaqamModulations<T> {
    #[serde(default)]
    pub hops_from_one: Vec<T>,
    #[serde(default)]
    pub hops_from_three: Vec<T>,
    /// Modulations through the alternative (2p) third degree.
    #[serde(default)]
    pub hops_from_three_2p: Vec<T>,
    #[serde(default)]
    pub hops_from_four: Vec<T>,
    #[serde(default)]
    pub hops_from_five: Vec<T>,
    /// Sixth-degree modulations usable when the third is invalid.
    #[serde(default)]
    pub hops_from_six_no_third: Vec<T>,
    #[serde(default)]
    pub hops_from_six_ascending: Vec<T>,
    #[serde(default)]
    pub hops_from_six_descending: Vec<T>,
}

impl<T> Default for MaqamModulations<T> {
    fn default() -> Self {
        Self {
            hops_from_one: Vec::new(),
            hops_from_three: Vec::new(),
            hops_from_three_2p: Vec::new(),
            hops_from_four: Vec::new(),
            hops_from_five: Vec::new(),
            hops_from_six_no_third: Vec::new(),
            hops_from_six_ascending: Vec::new(),
            hops_from_six_descending: Vec::new(),
        }
    }
}

impl<T> MaqamModulations<T> {
    /// Total number of reachable modulation hops across all eight buckets.
    pub fn total_hops(&self) -> usize {
        self.hops_from_one.len()
            + self.hops_from_three.len()
            + self.hops_from_three_2p.len()
            + self.hops_from_four.len()
            + self.hops_from_five.len()
            + self.hops_from_six_no_third.len()
            + self.hops_from_six_ascending.len()
            + self.hops_from_six_descending.len()
    }
}
