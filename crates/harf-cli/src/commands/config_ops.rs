use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn scheme_export() {
    print!("{}", harf_core::table::default_toml());
}

pub fn scheme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(harf_core::config::parse_scheme_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}
