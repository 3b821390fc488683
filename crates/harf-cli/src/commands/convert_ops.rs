use std::fs;
use std::io::Read;
use std::process;

use harf_core::coverage::coverage;
use harf_core::table::SubstitutionTable;
use harf_core::transliterate::transliterate;
use harf_core::unicode::contains_arabic;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Build the table for a command: custom scheme file if given, default
/// otherwise. Custom tables are owned; the default is the static singleton.
fn open_table(scheme: Option<&str>) -> SubstitutionTable {
    match scheme {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(SubstitutionTable::from_toml(&content), "Error: {}")
        }
        None => SubstitutionTable::default_scheme().clone(),
    }
}

/// Read from a file path, or from stdin when the path is "-".
fn read_input(input_file: &str) -> String {
    if input_file == "-" {
        let mut text = String::new();
        die!(
            std::io::stdin().read_to_string(&mut text),
            "Error reading stdin: {}"
        );
        text
    } else {
        die!(
            fs::read_to_string(input_file),
            "Error reading {input_file}: {}"
        )
    }
}

pub fn convert_cmd(text: &str, scheme: Option<&str>) {
    let table = open_table(scheme);
    print!("{}", transliterate(text, &table));
}

pub fn convert_file_cmd(input_file: &str, output_file: Option<&str>, scheme: Option<&str>) {
    let table = open_table(scheme);
    let text = read_input(input_file);

    if !contains_arabic(&text) {
        eprintln!("warning: input contains no Arabic characters");
    }

    let result = transliterate(&text, &table);
    match output_file {
        Some(path) => {
            die!(fs::write(path, &result), "Error writing {path}: {}");
            eprintln!("Wrote {} bytes -> {}", result.len(), path);
        }
        None => print!("{result}"),
    }
}

pub fn coverage_cmd(input_file: &str, scheme: Option<&str>, json: bool) {
    let table = open_table(scheme);
    let text = read_input(input_file);
    let report = coverage(&text, &table);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        println!("=== Coverage ===");
        println!("  Total chars:  {}", report.total_chars);
        println!("  Mapped:       {}", report.mapped);
        println!("  Pass-through: {}", report.passthrough);
        println!("  Mapped rate:  {:.1}%", report.mapped_ratio() * 100.0);
        if !report.unmapped_arabic.is_empty() {
            let chars: Vec<String> = report
                .unmapped_arabic
                .iter()
                .map(|c| format!("{c} (U+{:04X})", *c as u32))
                .collect();
            println!("  Unmapped Arabic: {}", chars.join(", "));
        }
    }
}
