// This is free and unencumbered software released into the public domain.

#[cfg(not(feature = "std"))]
compile_error!("asimov-camera-sizer requires the 'std' feature");

use asimov_camera_preview_module::{
    cli::{self, handle_error, info_user, warn_user},
    shared::{CameraError, PreviewConfig, Resolution, Target, measured_dimensions},
};
use asimov_module::SysexitsError::{self, *};
use clap::Parser;
use clientele::StandardOptions;
use serde_json::json;
use std::error::Error as StdError;

#[derive(Debug, Parser)]
struct Options {
    #[clap(flatten)]
    flags: StandardOptions,

    /// Supported preview sizes in platform order, e.g. `1920x1080,1280x720`.
    #[arg(long, value_name = "SIZES")]
    preview: String,

    /// Supported picture sizes in platform order.
    #[arg(long, value_name = "SIZES", default_value = "")]
    picture: String,

    /// The measured view box to fit, as WxH.
    #[arg(long, value_name = "WxH")]
    view: String,

    /// Maximum height/width ratio deviation for an aspect match.
    #[arg(long, value_name = "RATIO", default_value_t = 0.1)]
    tolerance: f64,

    #[arg(
        value_name = "FORMAT",
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text"
    )]
    output: OutputFormat,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Jsonl,
}

pub fn main() -> Result<SysexitsError, Box<dyn StdError>> {
    asimov_module::dotenv().ok();
    let args = asimov_module::args_os()?;
    let options = Options::parse_from(args);

    if options.flags.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(EX_OK);
    }

    if options.flags.license {
        print!("{}", include_str!("../../UNLICENSE"));
        return Ok(EX_OK);
    }

    #[cfg(feature = "tracing")]
    asimov_module::init_tracing_subscriber(&options.flags).expect("failed to initialize logging");

    let exit_code = match run_sizer(&options) {
        Ok(()) => EX_OK,
        Err(err) => handle_error(&err, &options.flags),
    };

    Ok(exit_code)
}

fn run_sizer(options: &Options) -> Result<(), CameraError> {
    let preview_sizes = cli::parse_size_list(&options.preview)?;
    let picture_sizes = cli::parse_size_list(&options.picture)?;
    let view: Resolution = options.view.parse()?;
    let target = Target::try_from(view)?;

    info_user(
        &options.flags,
        &format!(
            "negotiating {} preview and {} picture sizes for {view}",
            preview_sizes.len(),
            picture_sizes.len()
        ),
    );

    let config = PreviewConfig::default().with_aspect_tolerance(options.tolerance);
    config.validate()?;
    let selector = config.selector();
    let result = selector.negotiate(&preview_sizes, &picture_sizes, target);

    let Some(preview) = result.preview else {
        return Err(CameraError::NoCandidateAvailable);
    };
    if result.picture.is_none() {
        warn_user(&options.flags, "no picture size available");
    }

    let measured = measured_dimensions(view.width, preview)
        .map(|(w, h)| Resolution::new(w, h))
        .unwrap_or(view);

    match options.output {
        OutputFormat::Text => {
            println!("preview: {preview}");
            match result.picture {
                Some(picture) => println!("picture: {picture}"),
                None => println!("picture: none"),
            }
            println!("measured: {measured}");
        },
        OutputFormat::Jsonl => {
            println!(
                "{}",
                json!({
                    "view": view.to_string(),
                    "preview": preview.to_string(),
                    "picture": result.picture.map(|p| p.to_string()),
                    "measured": measured.to_string(),
                })
            );
        },
    }

    Ok(())
}
