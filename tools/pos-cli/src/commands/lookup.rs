//! One-shot product lookup.

use anyhow::{Context as _, Result};
use pos_core::prelude::*;
use tracing::{error, info};

use super::LookupArgs;
use crate::context::Context;
use crate::view;

/// Run the lookup command.
pub async fn run(args: LookupArgs, ctx: &Context) -> Result<()> {
    let backend = ctx.backend()?;

    let spinner = ctx.output.spinner(&format!("Looking up {}", args.code));
    let fetched = backend.fetch_product(&args.code).await;
    spinner.finish_and_clear();

    let lookup = resolve(&args.code, fetched).context(view::LOOKUP_FAILED)?;

    if ctx.output.is_json() {
        ctx.output.json(&lookup);
        return Ok(());
    }

    ctx.output.header(&format!("Product {}", args.code));
    view::print_product(&ctx.output, Some(&lookup));
    if !lookup.is_registered() {
        ctx.output.warn(NOT_REGISTERED_MESSAGE);
    }

    Ok(())
}

/// Interpret a fetched record, logging failures.
fn resolve(
    code: &str,
    fetched: Result<ProductRecord, PosError>,
) -> Result<LookupResult, PosError> {
    match fetched.and_then(ProductRecord::into_lookup) {
        Ok(lookup) => {
            info!(code, registered = lookup.is_registered(), "Lookup complete");
            Ok(lookup)
        }
        Err(e) => {
            error!(code, error = %e, "Product lookup failed");
            Err(e)
        }
    }
}
