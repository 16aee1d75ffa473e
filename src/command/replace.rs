use crate::cli::ReplaceArgs;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::ops::Rewriter;
use colored::Colorize;

pub fn execute(args: ReplaceArgs) -> Result<()> {
    let rewriter = Rewriter::new(Dialect::new().delimiter(args.delimiter));

    log::debug!(
        "Requested update: {} column '{}' value '{}' → '{}'",
        args.file.display(),
        args.column,
        args.old_value,
        args.new_value
    );

    if args.dry_run {
        let preview =
            rewriter.preview(&args.file, &args.column, &args.old_value, &args.new_value)?;

        if args.quiet {
            return Ok(());
        }

        println!("{}", "DRY RUN - No changes will be made".yellow().bold());
        if preview.column_found {
            println!(
                "{} of {} row(s) will be modified. Run without {} to apply.",
                preview.matches.to_string().cyan().bold(),
                preview.rows,
                "--dry-run".cyan()
            );
        } else {
            println!(
                "{}",
                format!(
                    "Column '{}' not found. File would not be modified.",
                    args.column
                )
                .yellow()
            );
        }
        return Ok(());
    }

    let modified =
        rewriter.update_row_values(&args.file, &args.column, &args.old_value, &args.new_value)?;

    if args.quiet {
        return Ok(());
    }

    if modified {
        println!(
            "{} {} → {} in column '{}' of {}",
            "✓ Successfully replaced".green().bold(),
            args.old_value.yellow(),
            args.new_value.green().bold(),
            args.column,
            args.file.display()
        );
    } else {
        println!(
            "{}",
            format!(
                "Column '{}' not found in {}. File not modified.",
                args.column,
                args.file.display()
            )
            .yellow()
        );
    }

    Ok(())
}
