//! Command-line viewer binary for the `helyx` DNA double-helix animation.

use helyx::options::Options;
use helyx::Viewer;

/// Parsed command line: optional preset path and seed override.
struct Args {
    preset: Option<String>,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        preset: None,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--preset" => {
                args.preset = Some(
                    iter.next().ok_or("--preset requires a file path")?,
                );
            }
            "--seed" => {
                let raw = iter.next().ok_or("--seed requires a number")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|e| format!("invalid seed {raw:?}: {e}"))?;
                args.seed = Some(seed);
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
    }
    Ok(args)
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: helyx [--preset <file.toml>] [--seed <u64>]");
            std::process::exit(1);
        }
    };

    let mut options = match args.preset {
        Some(ref path) => match Options::load(std::path::Path::new(path)) {
            Ok(options) => {
                log::info!("loaded preset {path}");
                options
            }
            Err(e) => {
                log::error!("failed to load preset {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if args.seed.is_some() {
        options.animation.seed = args.seed;
    }

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
