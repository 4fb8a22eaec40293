//! Single event write.

use super::{open_device, CommandResult};
use anyhow::Context;
use std::path::Path;

/// Write `value` to the named feature
pub fn write(path: &Path, category: &str, feature: &str, value: i32) -> CommandResult {
    let device = open_device(path)?;
    let target = device
        .category_named(category)?
        .feature_named(feature)
        .with_context(|| format!("{} has no {category} {feature}", path.display()))?;
    target.write_value(value)?;
    println!("{} {target} = {value}", target.category().name());
    Ok(())
}
