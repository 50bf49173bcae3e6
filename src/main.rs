// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, config, paths, Flags, Screen};
use iced_folio::catalog;
use iced_folio::domain::gallery::CategoryFilter;
use iced_folio::logging;
use iced_folio::media::{Extractor, KamadakExifParser, LocatorFetcher};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
iced_folio - personal portfolio with an EXIF-aware photo gallery

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --asset-root <DIR>   Directory that /photos/... locators resolve against
  --photos             Start on the photography screen
  --category <NAME>    Gallery filter: all, nature, portrait or street
                       (implies --photos, narrows --list-equipment)
  --list-equipment     Print the equipment of every photo and exit
  -h, --help           Print this help
";

struct Args {
    help: bool,
    lang: Option<String>,
    config_dir: Option<String>,
    asset_root: Option<PathBuf>,
    photos: bool,
    category: Option<CategoryFilter>,
    list_equipment: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        help: args.contains(["-h", "--help"]),
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        asset_root: args.opt_value_from_str("--asset-root")?,
        photos: args.contains("--photos"),
        category: args.opt_value_from_str("--category")?,
        list_equipment: args.contains("--list-equipment"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    paths::init_cli_overrides(args.config_dir);
    let (config, config_warning) = config::load();

    let asset_root = args
        .asset_root
        .unwrap_or_else(|| config.gallery.asset_root.clone());
    let fetcher = match LocatorFetcher::new(asset_root, &config.gallery.user_agent) {
        Ok(fetcher) => fetcher,
        Err(error) => {
            tracing::error!(%error, "cannot create the asset fetcher");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(asset_root = %fetcher.asset_root().display(), "asset fetcher ready");
    let extractor = Extractor::new(Arc::new(fetcher), Arc::new(KamadakExifParser));
    let filter = args.category.unwrap_or_default();

    if args.list_equipment {
        return list_equipment(&extractor, filter);
    }

    let flags = Flags {
        lang: args.lang,
        config,
        config_warning,
        extractor,
        photos: catalog::photo_descriptors(),
        start_filter: filter,
        start_screen: if args.photos || args.category.is_some() {
            Screen::Photos
        } else {
            Screen::Profile
        },
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application stopped with an error");
            ExitCode::FAILURE
        }
    }
}

/// Runs the extraction fan-out without a window and prints one line per
/// photo matching `filter`.
fn list_equipment(extractor: &Extractor, filter: CategoryFilter) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "cannot start the async runtime");
            return ExitCode::FAILURE;
        }
    };

    let descriptors = catalog::photo_descriptors()
        .into_iter()
        .filter(|descriptor| filter.matches(descriptor.category))
        .collect();
    let records = runtime.block_on(extractor.extract_all(descriptors));
    for record in &records {
        let descriptor = record.descriptor();
        println!(
            "{}\t{}\t{}",
            descriptor.id,
            descriptor.caption,
            record.equipment()
        );
    }
    ExitCode::SUCCESS
}
