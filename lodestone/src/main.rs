//! Command-line front end: render biome maps to PPM and run the seed
//! searches. The heavy lifting lives in `lodestone-core`; this binary only
//! parses arguments and writes files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result, bail};
use lodestone_core::finders::compact::{Area, find_all_biomes_seed_par};
use lodestone_core::finders::quad::{find_quad_candidate, find_quad_hut_seeds};
use lodestone_core::{Dimension, Generator, GeneratorFlags, Range};
use lodestone_registry::McVersion;
use lodestone_registry::colors::biome_colors;
use tracing::info;

fn usage() -> ! {
    eprintln!(
        "usage:\n  \
         lodestone map <seed> [size] [out.ppm]\n  \
         lodestone quadhuts <start-seed> [limit]\n  \
         lodestone allbiomes <start-seed> <end-seed>"
    );
    std::process::exit(2);
}

fn parse_seed(s: &str) -> Result<u64> {
    if let Some(hex) = s.strip_prefix("0x") {
        return u64::from_str_radix(hex, 16).context("bad hex seed");
    }
    // accept signed decimal like the game does
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v as u64);
    }
    bail!("bad seed: {s}")
}

/// Write an RGB8 image as binary PPM.
fn save_ppm(path: &str, pixels: &[u8], w: usize, h: usize) -> Result<()> {
    let mut f = BufWriter::new(File::create(path).context("create image file")?);
    write!(f, "P6\n{w} {h}\n255\n")?;
    f.write_all(&pixels[..w * h * 3])?;
    Ok(())
}

fn render_map(seed: u64, size: i32, path: &str) -> Result<()> {
    let mut g = Generator::new(McVersion::V1_16, GeneratorFlags::NONE);
    g.apply_seed(Dimension::Overworld, seed);

    let r = Range::area(4, -size / 2, -size / 2, size, size);
    let mut cache = g.alloc_cache(&r)?;
    g.gen_biomes(&mut cache, r)?;

    let palette = biome_colors();
    let ids = cache.ids(&r);
    let mut pixels = vec![0u8; (size * size * 3) as usize];
    for (i, &id) in ids.iter().enumerate() {
        let rgb = palette[(id & 0xFF) as usize];
        pixels[3 * i..3 * i + 3].copy_from_slice(&rgb);
    }
    save_ppm(path, &pixels, size as usize, size as usize)?;
    info!(path, size, "map written");
    Ok(())
}

fn run_quadhuts(start: u64, limit: usize) -> Result<()> {
    let candidate = find_quad_candidate(start, 1, 2);
    info!(base = format_args!("{:#x}", candidate.base), "quad candidate");
    for p in &candidate.pos {
        println!("hut at {},{}", p.x, p.z);
    }
    let hits = find_quad_hut_seeds(McVersion::V1_16, candidate.base, -1, -1, limit);
    for hit in &hits {
        println!("{}", hit.seed as i64);
    }
    info!(count = hits.len(), "quad hut sweep finished");
    Ok(())
}

fn run_allbiomes(start: u64, end: u64) -> Result<()> {
    let area = Area {
        x: -1024,
        z: -1024,
        w: 2048,
        h: 2048,
    };
    let stop = AtomicBool::new(false);
    match find_all_biomes_seed_par(McVersion::V1_12, start, end, area, &stop) {
        Some(seed) => println!("{}", seed as i64),
        None => info!("no all-biomes seed in range"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("map") => {
            let seed = parse_seed(args.get(2).unwrap_or_else(|| usage()))?;
            let size: i32 = args.get(3).map_or(Ok(512), |s| s.parse())?;
            let path = args.get(4).map_or("map.ppm", String::as_str);
            render_map(seed, size, path)
        }
        Some("quadhuts") => {
            let start = parse_seed(args.get(2).unwrap_or_else(|| usage()))?;
            let limit = args.get(3).map_or(Ok(16), |s| s.parse())?;
            run_quadhuts(start, limit)
        }
        Some("allbiomes") => {
            let start = parse_seed(args.get(2).unwrap_or_else(|| usage()))?;
            let end = parse_seed(args.get(3).unwrap_or_else(|| usage()))?;
            run_allbiomes(start, end)
        }
        _ => usage(),
    }
}
