//! Build script to generate embedded word lists
//!
//! Reads the word list files under `data/` and generates Rust source with
//! const arrays. A malformed entry fails the build.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const WORD_LENGTH: usize = 5;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    let lists = [
        ("data/solutions.txt", "solutions.rs", "SOLUTIONS", "Words a game may pick as a target"),
        ("data/valid_guesses.txt", "valid_guesses.rs", "VALID_GUESSES", "Words accepted as guesses"),
    ];

    for (input, output, const_name, doc) in lists {
        let words = read_words(input);
        write_word_list(&out_dir.join(output), const_name, doc, &words)
            .unwrap_or_else(|e| panic!("Failed to write {output}: {e}"));

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

/// Non-blank, non-comment lines, checked to be five lowercase letters
fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, word)| {
            let valid = word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase());
            assert!(valid, "{input_path}:{number}: '{word}' is not a {WORD_LENGTH}-letter lowercase word");
            word.to_string()
        })
        .collect()
}

fn write_word_list(path: &Path, const_name: &str, doc_comment: &str, words: &[String]) -> io::Result<()> {
    let count = words.len();
    let mut output = BufWriter::new(fs::File::create(path)?);

    writeln!(output, "// Generated word list")?;
    writeln!(output, "//")?;
    writeln!(output, "// {doc_comment} ({count} words)")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;

    for word in words {
        writeln!(output, "    \"{word}\",")?;
    }

    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};")?;
    output.flush()
}
