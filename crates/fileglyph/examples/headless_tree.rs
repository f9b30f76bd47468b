//! Headless file tree example.
//!
//! Loads an icon theme into an in-memory surface, resolves a few file names
//! the way a file tree would while rendering, and prints the class names and
//! the generated stylesheet.
//!
//! Run with: cargo run -p fileglyph --example headless_tree [theme.json]
//!
//! The optional argument is a verbose-encoded theme document; a small
//! built-in theme is used otherwise.

use std::sync::Arc;

use fileglyph::prelude::*;
use serde_json::json;

const FILES: &[&str] = &[
    "package.json",
    "webpack.config.js",
    "index.js",
    ".babel.json",
    "main.py",
    "Cargo.toml",
    "README.md",
    "LICENSE",
];

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let source: Arc<dyn ThemeSource> = match std::env::args().nth(1) {
        Some(path) => Arc::new(JsonFileSource::new(path)),
        None => Arc::new(InlineSource::new(json!({
            "iconDefinitions": {
                "1": { "fontCharacter": "\\E01E", "fontColor": "#cbcb41" },
                "2": { "fontCharacter": "\\E01E", "fontColor": "#f5de19" },
                "3": { "iconPath": "webpack.svg" },
                "6": { "iconPath": "npm.svg" },
                "7": { "fontCharacter": "\\E0A1", "fontColor": "#519aba" }
            },
            "fileExtensions": { "json": 1, "babel.json": 2, "js": 2 },
            "fileNames": { "package.json": 6, "webpack.config.js": 3 },
            "languageIds": { "python": 7 }
        }))),
    };

    let mut descriptor = ThemeDescriptor::new("demo", "Demo", InlineSource::empty())
        .with_css_url("assets/demo.css")
        .with_root_url("icons")
        .with_encoding(ThemeEncoding::Verbose);
    descriptor.source = source;

    let surface = Arc::new(InMemorySurface::new());
    let manager = IconThemeManager::new(surface.clone(), Arc::new(ModeTable::builtin()));
    let hook = manager.load(Some(&descriptor)).await;

    println!("Theme state: {:?}", manager.state());
    println!();
    for file in FILES {
        println!("{:<20} {}", file, hook.class_names(file));
    }
    println!();
    print!("{}", surface.stylesheet());
}
