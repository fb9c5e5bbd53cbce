use anyhow::Context;

use staticentity_catalogs::{Color, Currency, OrderStatus};
use staticentity_core::StaticEntity;
use staticentity_registry::{Catalog, ManagerRegistry};

fn main() -> anyhow::Result<()> {
    staticentity_observability::init();

    dump::<Color>()?;
    dump::<Currency>()?;
    dump::<OrderStatus>()?;

    tracing::info!(
        managers = ManagerRegistry::global().len(),
        "all reference catalogs loaded"
    );

    Ok(())
}

/// Log the catalog's default associative mapping.
fn dump<E: StaticEntity>() -> anyhow::Result<()> {
    let catalog = E::catalog_name();
    let mapping = E::get_associative()
        .with_context(|| format!("failed to load catalog {catalog}"))?;
    let rendered = serde_json::to_string(&mapping)?;

    tracing::info!(catalog, entries = mapping.len(), mapping = %rendered, "catalog");

    Ok(())
}
