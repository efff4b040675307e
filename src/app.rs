use std::io::Write;

use ccwc_infra::resolver_for;
use ccwc_ports::ContentResolver;
use ccwc_shared_kernel::{ErrorContext, Result};
use ccwc_usecase::count;
use log::debug;

use crate::{config::Config, presentation};

/// Count the configured source and write the rendered result to `out`.
///
/// # Errors
///
/// Resolution, counting and write failures; nothing is written when counting fails.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    debug!("format={:?} source={}", config.format, config.source);
    let mut resolver = resolver_for(config.source.clone());
    run_with(config, resolver.as_mut(), out)
}

/// [`run`] against an explicit resolver.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(config: &Config, resolver: &mut dyn ContentResolver, out: &mut impl Write) -> Result<()> {
    let result = count(resolver, &config.request)?;
    let rendered = presentation::render(&result, config.format)?;
    writeln!(out, "{rendered}").context("writing counts")?;
    Ok(())
}
