use metaromatic::engine::config::{
    DEFAULT_ANGLE_CUTOFF, DEFAULT_CHAIN_ID, DEFAULT_DISTANCE_CUTOFF, DEFAULT_MIN_BRIDGE_SIZE,
    LonePairModel,
};

pub struct DefaultsConfig {
    pub chain_id: String,
    pub distance_cutoff: f64,
    pub angle_cutoff: f64,
    pub lone_pair_model: LonePairModel,
    pub min_bridge_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            distance_cutoff: DEFAULT_DISTANCE_CUTOFF,
            angle_cutoff: DEFAULT_ANGLE_CUTOFF,
            lone_pair_model: LonePairModel::default(),
            min_bridge_size: DEFAULT_MIN_BRIDGE_SIZE,
        }
    }
}
