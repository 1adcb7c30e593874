//! フォームローカライズのデモ
//!
//! 使用方法:
//! ```
//! cargo run --example bind_form -- de-DE
//! ```

use persogenius_i18n::document::MemoryDocument;
use persogenius_i18n::{
    BindOptions,
    localize,
};

/// Element ids the real page template provides.
const PAGE_ELEMENT_IDS: &[&str] = &[
    "fieldset-legend",
    "input-field-1-label",
    "input-field-2-label",
    "input-field-3-label",
    "input-field-4-label",
    "input-field-5-label",
    "button-reset",
    "button-random",
    "output-field-label",
    "privacy-link",
    "privacy-notice",
];

fn main() {
    // tracing を初期化（DEBUG レベル）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let locale = std::env::args().nth(1);

    let mut document = MemoryDocument::new();
    for id in PAGE_ELEMENT_IDS {
        if let Err(e) = document.insert_element(*id, "placeholder") {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    localize(&mut document, locale.as_deref(), BindOptions::default());

    println!("=== Document after binding ===");
    println!("lang: {}", document.language_tag().unwrap_or("-"));
    for meta in document.metas() {
        println!("meta[{}]: {}", meta.name, meta.content);
    }
    for id in PAGE_ELEMENT_IDS {
        println!("#{}: {}", id, document.element_text(id).unwrap_or("-"));
    }
}
