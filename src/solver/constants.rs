// Search configuration defaults
pub const DEFAULT_TARGETS: [f64; 2] = [1.0, 20.0];
pub const MAX_HAND_SIZE: usize = 9;
