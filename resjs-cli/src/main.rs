mod logger;
mod view;

use std::path::Path;

use clap::{Parser, Subcommand};
use resjs::{GlobalizationTask, ResourceBundle};

use crate::view::print_view;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log informational progress lines to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one JS globalization file per culture.
    Generate {
        /// The resource bundle to serialize
        #[arg(short, long)]
        bundle: String,

        /// Directory the generated files are written to
        #[arg(short, long)]
        out_dir: String,

        /// Culture codes in output order, comma-separated (e.g. "en,pt-BR")
        #[arg(short, long, value_delimiter = ',', required = true)]
        cultures: Vec<String>,

        /// Default culture code
        #[arg(long, default_value = "en")]
        default_culture: String,

        /// Group names to exclude, comma-separated (case-insensitive)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Sentinel prefix emitted for missing values
        #[arg(long, default_value = "[TEXT NOT FOUND] ")]
        not_found_markup: String,

        /// Disable HTML entity encoding of values
        #[arg(long)]
        no_html_encode: bool,

        /// Output base filename (<filename>.<culture>.js)
        #[arg(long, default_value = "Globalizations")]
        filename: String,

        /// Namespace object the group literals are assigned onto
        #[arg(long, default_value = "globalization")]
        namespace: String,
    },

    /// Inspect a resource bundle: groups, keys and culture coverage.
    View {
        /// The bundle file to inspect
        #[arg(short, long)]
        bundle: String,
    },

    /// Look up a group's raw XML resource-definition file for one culture.
    Lookup {
        /// Folder holding the resource-definition files
        #[arg(short, long)]
        folder: String,

        /// Group name
        #[arg(short, long)]
        group: String,

        /// Culture code
        #[arg(short, long)]
        culture: String,

        /// Default culture code (maps to the bare <Group>.resx filename)
        #[arg(long, default_value = "en")]
        default_culture: String,
    },
}

fn main() {
    let args = Args::parse();
    logger::setup(args.verbose);

    let result = match args.commands {
        Commands::Generate {
            bundle,
            out_dir,
            cultures,
            default_culture,
            ignore,
            not_found_markup,
            no_html_encode,
            filename,
            namespace,
        } => GlobalizationTask::new(&bundle, &out_dir, cultures)
            .with_default_culture(default_culture)
            .with_ignore_groups(ignore)
            .with_not_found_markup(not_found_markup)
            .with_html_encode(!no_html_encode)
            .with_filename(filename)
            .with_namespace(namespace)
            .run()
            .map(|summary| {
                println!(
                    "Serialized {} group(s) from '{}' into {} file(s)",
                    summary.groups,
                    summary.module,
                    summary.files.len()
                );
            }),
        Commands::View { bundle } => ResourceBundle::load(&bundle).map(|b| print_view(&b)),
        Commands::Lookup {
            folder,
            group,
            culture,
            default_culture,
        } => resjs::resx::find_culture_document(
            Path::new(&folder),
            &group,
            &culture,
            &default_culture,
        )
        .map(|document| match document {
            Some(doc) => {
                println!("Document: {}", doc.path.display());
                for entry in &doc.entries {
                    println!("  {} = {}", entry.name, entry.value);
                }
            }
            None => println!("No document found for '{}' ({})", group, culture),
        }),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
