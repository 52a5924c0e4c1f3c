use argh::FromArgs;
use std::path::PathBuf;

use pblite::config::FilterBankConfig;
use pblite::driver::{build_banks, render_banks, BankSelection};
use pblite::viz::{MontageOptions, PngMontageRenderer};

#[derive(FromArgs)]
/// Generate the pb-lite filter banks and save them as PNG montages.
struct Args {
    /// directory the PNG files are written to
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// optional JSON configuration file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// bank to generate: all, dog, lm-small (lms), lm-large (lml) or gabor
    #[argh(option, short = 'b', default = "BankSelection::All")]
    bank: BankSelection,

    /// upscaling factor of each kernel pixel, overrides the configuration
    #[argh(option)]
    tile_scale: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let mut config = match &args.config {
        Some(path) => FilterBankConfig::from_json_file(path)?,
        None => FilterBankConfig::default(),
    };
    if let Some(tile_scale) = args.tile_scale {
        config.render.tile_scale = tile_scale;
    }

    let banks = build_banks(&config, args.bank)?;
    log::info!("built {} filter bank(s) for selection {:?}", banks.len(), args.bank);

    let mut renderer =
        PngMontageRenderer::new(&args.output_dir, MontageOptions::from(&config.render));
    render_banks(&mut renderer, &banks)?;

    Ok(())
}
