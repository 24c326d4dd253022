// Only compile UI modules when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::Path;

use career_map::Catalog;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "validate" {
        // Validation mode: report catalog malformations to the operator
        run_validate(args.get(2))?;
    } else {
        // UI mode (default)
        run_ui_mode(args.get(1))?;
    }

    Ok(())
}

/// Load the catalog from a file path, or fall back to the embedded dataset
fn load_catalog(path: Option<&String>) -> Result<Catalog> {
    match path {
        Some(p) => Catalog::load(Path::new(p)),
        None => Catalog::embedded(),
    }
}

fn run_validate(path: Option<&String>) -> Result<()> {
    println!("🔍 Catalog validation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let source = path.map(String::as_str).unwrap_or("<embedded dataset>");
    println!("\n📂 Loading catalog from {}...", source);

    let catalog = load_catalog(path)?;
    println!("✓ Parsed {} businesses", catalog.len());

    match catalog.validate() {
        Ok(()) => {
            println!("\n✅ Catalog is well-formed");
        }
        Err(errors) => {
            eprintln!("\n❌ Catalog is malformed ({} issues):", errors.len());
            for error in &errors {
                eprintln!("   - {}", error);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(path: Option<&String>) -> Result<()> {
    println!("🗺️  Loading Career Path Map...\n");

    let catalog = load_catalog(path)?;

    // Startup-time validation: malformed data never reaches the UI
    if let Err(errors) = catalog.validate() {
        eprintln!("❌ Catalog is malformed ({} issues):", errors.len());
        for error in &errors {
            eprintln!("   - {}", error);
        }
        eprintln!("\n   Fix the dataset or run: career-map validate <path>");
        std::process::exit(1);
    }

    println!("✓ Loaded {} partner businesses\n", catalog.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_path: Option<&String>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
