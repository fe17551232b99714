use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes message and writes it somewhere.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
pub struct Environment {
    /// A random generator.
    pub random: Arc<dyn Random + Send + Sync>,
    /// A logger used to print some diagnostic information.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
