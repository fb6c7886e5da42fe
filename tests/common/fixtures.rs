//! Static seed corpora used across harnesses.

use std::path::{Path, PathBuf};

/// Header row carrying exactly the required columns.
pub const HEADER: &str = "title,excerpt,views,published,author";

/// Two rows, one unpublished with a blank author.
pub const CSV_MIXED_PUBLISHED: &str =
    "title,excerpt,views,published,author\nA,,5,true,Bob\nB,,0,false,";

/// Realistic seed covering quoting, escapes, coercion and defaults.
pub const CSV_BLOG: &str = r#"title,excerpt,views,published,author,lang
"Interfaces & traits en PHP","Contrats, mixins et réutilisation",120,true,Amine,fr
Organiser avec namespaces & PSR-4,Autoload propre,  42 ,1,Sara,fr
"Exceptions ""utiles""",Quand lever quoi,-7,false,,fr

API REST lisible,"Ressources \"claires\"",n/a,yes,Nadia,en
,,,,,
"#;

/// Same titles under different punctuation: every row collides on slug.
pub const CSV_SLUG_COLLISIONS: &str = "title,excerpt,views,published,author
Hello World,,1,true,a
hello world!,,2,true,b
HELLO -- WORLD,,3,true,c
Goodbye,,4,true,d
";

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("fixture parent directory");
    }
    std::fs::write(&path, contents).expect("fixture write");
    path
}

/// Build seed text with `n` published rows titled `Article 1..=n`.
pub fn generated_csv(n: usize) -> String {
    let mut text = String::from(HEADER);
    for i in 1..=n {
        text.push_str(&format!("\nArticle {i},Excerpt {i},{},true,Author {}", i * 10, i % 4));
    }
    text
}
