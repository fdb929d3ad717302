use common::presets::seed_template;
use log::info;

use super::{StoreError, TemplateRepository};

/// Inserts the demo template when the repository has no templates yet.
///
/// Returns `true` if the template was inserted.
pub fn seed_if_empty(repository: &TemplateRepository) -> Result<bool, StoreError> {
    if repository.count()? > 0 {
        return Ok(false);
    }
    let template = repository.create(&seed_template())?;
    info!("Seeded demo template '{}' (id {})", template.name, template.id);
    Ok(true)
}
