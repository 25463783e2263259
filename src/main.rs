use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

use cavegen::{generate, renderer, storage};

/// Generate a dungeon, persist its record, and render it to a PNG.
#[derive(Parser)]
#[command(name = "cavegen", version, about)]
struct Args {
    /// Generation seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Grid width in cells
    #[arg(long, default_value_t = 88)]
    width: usize,
    /// Grid height in cells
    #[arg(long, default_value_t = 88)]
    height: usize,
    /// Directory for the record JSON and rendered map
    #[arg(long, default_value = "maps")]
    out_dir: PathBuf,
    /// Pixels per cell in the rendered image
    #[arg(long, default_value_t = 11)]
    cell_size: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..16_777_216));
    let record = generate(seed, args.height, args.width)?;
    log::info!(
        "generated {}x{} dungeon {} from seed {}",
        record.width,
        record.height,
        record.id,
        seed
    );

    fs::create_dir_all(&args.out_dir)?;
    let record_path = storage::save_record(&record, &args.out_dir)?;

    let grid = storage::record_grid(&record)?;
    let image = renderer::render_scaled(&grid, args.cell_size);
    // Images are content-addressed too, keyed by their pixel bytes.
    let image_path = args
        .out_dir
        .join(format!("{:x}.png", md5::compute(image.as_raw())));
    if image_path.exists() {
        log::debug!("image {} already rendered", image_path.display());
    } else {
        image.save(&image_path)?;
    }

    println!("record: {}", record_path.display());
    println!("map:    {}", image_path.display());
    Ok(())
}
