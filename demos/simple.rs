use std::error::Error;

use stemmy::{ENG, NLD, Stemmer, Stemmy, all_langs};

fn main() -> Result<(), Box<dyn Error>> {
    // ────────────────────────────────────────────────────────────────
    // ENGLISH – Porter2 with exception tables
    // ────────────────────────────────────────────────────────────────
    let eng = Stemmy::new(ENG)?;
    for word in ["Caresses", "connection", "hopefully", "skies", "dying", "dog's"] {
        println!("English : {word:<12} → {}", eng.stem(word));
    }
    // → caress, connect, hope, sky, die, dog

    // ────────────────────────────────────────────────────────────────
    // DUTCH – accents are folded, kdt doubles undone
    // ────────────────────────────────────────────────────────────────
    let nld = Stemmy::new(NLD)?;
    for word in ["vliegtuigen", "katten", "mogelijkheden", "Café", "betaalbaar"] {
        println!("Dutch   : {word:<12} → {}", nld.stem(word));
    }
    // → vliegtuig, kat, mogelijk, caf, betal

    // ────────────────────────────────────────────────────────────────
    // Builder: resolve by code, tweak the language entry
    // ────────────────────────────────────────────────────────────────
    let no_guard = Stemmy::builder()
        .lang_code("eng")?
        .modify_lang(|e| e.min_len = 0)
        .build()?;
    println!("No length guard: as → {}", no_guard.stem("as"));

    // ────────────────────────────────────────────────────────────────
    // Trait objects: one stemmer per supported language
    // ────────────────────────────────────────────────────────────────
    let stemmers = all_langs()
        .iter()
        .map(|&lang| Stemmy::new(lang).map(|s| Box::new(s) as Box<dyn Stemmer>))
        .collect::<Result<Vec<_>, _>>()?;
    for s in &stemmers {
        println!("{:<8}: running → {}", s.name(), s.stem("running"));
    }

    Ok(())
}
