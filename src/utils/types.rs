/// Alias to a scalar floating type.
///
/// NOTE: Currently, prefer to use `f64` as a default floating type: switching to `f32`
/// degrades the autostop convergence check on datasets with small adaptation steps.
pub type Float = f64;
