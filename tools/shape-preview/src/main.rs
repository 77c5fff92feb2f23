// Preview CLI for display-shapes scenes.
//
// Usage:
//   shape-preview render <scene> [params...] -o <output.bmp>
//   shape-preview compare <file_a> <file_b> [-d <diff.bmp>]
//   shape-preview list

use shape_preview::{compare_buffers, generate_diff_image, load_bmp, save_bmp};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "render" => cmd_render(&args[2..]),
        "compare" => cmd_compare(&args[2..]),
        "list" => cmd_list(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("shape-preview - render and compare display-shapes scenes");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render <scene> [params...] -o <output.bmp>");
    eprintln!("      Render a scene onto a 320x240 white screen.");
    eprintln!();
    eprintln!("  compare <file_a> <file_b> [-d <diff.bmp>]");
    eprintln!("      Compare two renders pixel-by-pixel.");
    eprintln!();
    eprintln!("  list");
    eprintln!("      List available scene names.");
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{}", msg);
    process::exit(1);
}

fn cmd_list() {
    println!("Available scenes:");
    for name in shape_preview::render::available_scenes() {
        println!("  {}", name);
    }
}

fn cmd_render(args: &[String]) {
    if args.is_empty() {
        fail("Usage: shape-preview render <scene> [params...] -o <output.bmp>");
    }

    let scene = &args[0];
    let mut params = Vec::new();
    let mut output_path: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        if args[i] == "-o" && i + 1 < args.len() {
            output_path = Some(args[i + 1].clone());
            i += 2;
        } else {
            match args[i].parse::<i64>() {
                Ok(p) => params.push(p),
                Err(_) => fail(format!("Invalid param (must be an integer): {}", args[i])),
            }
            i += 1;
        }
    }

    let output = output_path.unwrap_or_else(|| format!("{}.bmp", scene));

    println!("Rendering '{}' with params {:?}...", scene, params);

    let fb = match shape_preview::render::render_scene(scene, &params) {
        None => fail(format!(
            "Unknown scene: '{}'. Use 'list' to see available scenes.",
            scene
        )),
        Some(Err(e)) => fail(format!("Cannot build scene '{}': {}", scene, e)),
        Some(Ok(fb)) => fb,
    };

    if let Err(e) = save_bmp(Path::new(&output), &fb) {
        fail(format!("Failed to save {}: {}", output, e));
    }
    println!("Saved: {}", output);
}

fn cmd_compare(args: &[String]) {
    if args.len() < 2 {
        fail("Usage: shape-preview compare <file_a> <file_b> [-d <diff.bmp>]");
    }

    let path_a = &args[0];
    let path_b = &args[1];
    let mut diff_path: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-d" if i + 1 < args.len() => {
                diff_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                i += 1;
            }
        }
    }

    let a = load_bmp(Path::new(path_a)).unwrap_or_else(|e| fail(format!("{}: {}", path_a, e)));
    let b = load_bmp(Path::new(path_b)).unwrap_or_else(|e| fail(format!("{}: {}", path_b, e)));

    let result = compare_buffers(&a, &b).unwrap_or_else(|e| fail(e));
    println!("{}", result);

    if let Some(dp) = diff_path {
        let diff = generate_diff_image(&a, &b);
        if let Err(e) = save_bmp(Path::new(&dp), &diff) {
            fail(format!("Failed to save diff image {}: {}", dp, e));
        }
        println!("Diff saved: {}", dp);
    }

    if !result.identical() {
        process::exit(1);
    }
}
