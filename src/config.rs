//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{VizError, VizResult};

/// Lowest speed slider value.
pub const SPEED_MIN: u32 = 10;

/// Highest speed slider value.
pub const SPEED_MAX: u32 = 500;

/// Default speed slider value, matching the visualizer's midpoint.
pub const DEFAULT_SPEED: u32 = 245;

/// Top-level visualization configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Master seed for reproducible structure generation.
    #[serde(default)]
    pub seed: u64,

    /// Speed slider value; mapped to an inter-step delay by the scheduler.
    #[validate(range(min = 10, max = 500))]
    #[serde(default = "default_speed")]
    pub speed: u32,

    /// Sort visualization settings.
    #[validate(nested)]
    #[serde(default)]
    pub sort: SortConfig,

    /// Search visualization settings.
    #[validate(nested)]
    #[serde(default)]
    pub search: SearchConfig,

    /// Tree visualization settings.
    #[validate(nested)]
    #[serde(default)]
    pub tree: TreeConfig,

    /// Graph visualization settings.
    #[validate(nested)]
    #[serde(default)]
    pub graph: GraphConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_speed() -> u32 {
    DEFAULT_SPEED
}

/// Settings for the sort stepper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// Number of bars in the generated array.
    #[validate(range(min = 10, max = 50))]
    pub size: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self { size: 20 }
    }
}

/// Settings for the search stepper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Length of the generated array.
    #[validate(range(min = 1, max = 100))]
    pub length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { length: 15 }
    }
}

/// Settings for the tree stepper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TreeConfig {
    /// Maximum tree depth.
    #[validate(range(min = 2, max = 4))]
    pub depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

/// Settings for the graph stepper.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Fixed node count.
    #[validate(range(min = 2, max = 64))]
    pub nodes: usize,

    /// Probability of an edge between any node pair.
    #[validate(range(min = 0.0, max = 1.0))]
    pub edge_probability: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            nodes: 8,
            edge_probability: 0.2,
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> VizResult<()> {
        // A zero edge probability generates only isolated nodes; legal,
        // but a probability of exactly 0 combined with topological sort
        // exercises nothing. Flag the degenerate negative case only.
        if self.graph.edge_probability < 0.0 {
            return Err(VizError::config("Edge probability must be non-negative"));
        }
        if self.search.length == 0 {
            return Err(VizError::config("Search array must be non-empty"));
        }
        Ok(())
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            seed: 0,
            speed: DEFAULT_SPEED,
            sort: SortConfig::default(),
            search: SearchConfig::default(),
            tree: TreeConfig::default(),
            graph: GraphConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    seed: Option<u64>,
    speed: Option<u32>,
    sort_size: Option<usize>,
    tree_depth: Option<usize>,
    graph_nodes: Option<usize>,
    edge_probability: Option<f64>,
}

impl VizConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the speed slider value.
    #[must_use]
    pub const fn speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the sort array size.
    #[must_use]
    pub const fn sort_size(mut self, size: usize) -> Self {
        self.sort_size = Some(size);
        self
    }

    /// Set the tree depth.
    #[must_use]
    pub const fn tree_depth(mut self, depth: usize) -> Self {
        self.tree_depth = Some(depth);
        self
    }

    /// Set the graph node count.
    #[must_use]
    pub const fn graph_nodes(mut self, nodes: usize) -> Self {
        self.graph_nodes = Some(nodes);
        self
    }

    /// Set the graph edge probability.
    #[must_use]
    pub const fn edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = Some(p);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig::default();

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(size) = self.sort_size {
            config.sort.size = size;
        }
        if let Some(depth) = self.tree_depth {
            config.tree.depth = depth;
        }
        if let Some(nodes) = self.graph_nodes {
            config.graph.nodes = nodes;
        }
        if let Some(p) = self.edge_probability {
            config.graph.edge_probability = p;
        }

        config
    }
}
