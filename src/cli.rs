use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::{path::Path, sync::mpsc::channel, time::Duration};
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};
use crate::{convert_str_with_ids, ConvertConfig};

/// Command line arguments
#[derive(Parser)]
#[command(version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// SVG file to convert ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Maximum distance between curves and their approximation (user-units)
    #[arg(short, long, default_value = "0.1")]
    tolerance: f64,

    /// Recursion limit for Bézier curve subdivision
    #[arg(long, default_value = "16")]
    max_depth: u32,

    /// Fail on malformed transform attributes rather than ignoring them
    #[arg(long)]
    strict_transforms: bool,

    /// Only convert <path> elements, ignoring basic shapes
    #[arg(long)]
    paths_only: bool,

    /// Output objects with the source element id alongside each polyline
    #[arg(long)]
    ids: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

/// Top-level configuration used by the `svg2polylines` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
///
/// 'front-end' program settings (e.g. input/output filenames, whether to continually
/// process input on change, etc) are stored directly in this struct. Per-conversion
/// ('back-end') settings are stored in the embedded `ConvertConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    /// Include element ids in output
    pub ids: bool,
    /// Pretty-print output
    pub pretty: bool,
    /// conversion config options
    pub convert: ConvertConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        let convert = ConvertConfig {
            tolerance: args.tolerance,
            max_depth: args.max_depth,
            strict_transforms: args.strict_transforms,
            paths_only: args.paths_only,
        };
        convert.validate()?;
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            ids: args.ids,
            pretty: args.pretty,
            convert,
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

fn read_input(input: &str) -> Result<String> {
    let mut buf = Vec::new();
    if input == "-" {
        std::io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(input)?.read_to_end(&mut buf)?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Convert `input` and write the result as JSON to `writer`.
pub fn write_json(input: &str, writer: &mut dyn Write, config: &Config) -> Result<()> {
    let labelled = convert_str_with_ids(input, &config.convert)?;
    let result = if config.ids {
        if config.pretty {
            serde_json::to_writer_pretty(&mut *writer, &labelled)
        } else {
            serde_json::to_writer(&mut *writer, &labelled)
        }
    } else {
        let polylines: Vec<_> = labelled.into_iter().map(|lp| lp.points).collect();
        if config.pretty {
            serde_json::to_writer_pretty(&mut *writer, &polylines)
        } else {
            serde_json::to_writer(&mut *writer, &polylines)
        }
    };
    result.map_err(Error::from_err)?;
    writeln!(writer)?;
    Ok(())
}

/// Read file from `input` ('-' for stdin), convert the result, and
/// write to the file given by `output` ('-' for stdout).
pub fn convert_file(input: &str, output: &str, config: &Config) -> Result<()> {
    let svg = read_input(input)?;

    if output == "-" {
        write_json(&svg, &mut std::io::stdout().lock(), config)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        write_json(&svg, &mut out_temp, config)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems.
        fs::copy(out_temp.path(), output)?;
    }

    Ok(())
}

/// Run the `svg2polylines` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if !config.watch {
        convert_file(&config.input_path, &config.output_path, &config)?;
    } else if config.input_path != "-" {
        let watch = config.input_path.clone();
        let (tx, rx) = channel();
        let mut watcher =
            new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        convert_file(&watch, &config.output_path, &config).unwrap_or_else(|e| {
            log::error!("conversion failed: {e}");
        });
        log::info!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize().map_err(Error::Io)?
                            == watch_path.canonicalize().map_err(Error::Io)?
                        {
                            log::info!("{} changed", event.path.to_string_lossy());
                            convert_file(&watch, &config.output_path, &config).unwrap_or_else(
                                |e| {
                                    log::error!("conversion failed: {e}");
                                },
                            );
                        }
                    }
                }
                Ok(Err(e)) => log::warn!("Watch error {e:?}"),
                Err(e) => log::warn!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
