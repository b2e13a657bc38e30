//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::convert_pack_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;
use zipdir_core::PackConfig;
use zipdir_core::classify::exists;
use zipdir_core::pack_directory;
use zipdir_core::pack_directory_with_progress;

pub fn execute(
    args: &CreateArgs,
    formatter: &dyn OutputFormatter,
    hide_progress: bool,
) -> Result<()> {
    if exists(&args.output) && !args.force {
        bail!(
            "Output file '{}' already exists\n\
             HINT: Use --force to overwrite.",
            args.output.display()
        );
    }

    let config = PackConfig::new()
        .with_recursive(!args.no_recursive)
        .with_create_parent_dirs(args.parents);

    tracing::debug!(
        source = %args.source.display(),
        output = %args.output.display(),
        recursive = config.recursive,
        "starting create"
    );

    let result = if !hide_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new("Packing");
        pack_directory_with_progress(&args.output, &args.source, &config, &mut progress)
    } else {
        pack_directory(&args.output, &args.source, &config)
    };

    let report = result.map_err(|e| convert_pack_error(e, &args.source, &args.output))?;
    formatter.format_pack_result(&args.output, &report)
}
