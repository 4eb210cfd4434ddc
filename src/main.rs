use spanddl::ddl::{print_ddl, Config, EmitMode};
use spanddl::dialect::Dialect;
use spanddl::schema::Schema;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema.json> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>      Output file (default: stdout)");
        eprintln!("  -d, --dialect <name>     Target dialect: googlesql, postgres, mysql (default: googlesql)");
        eprintln!("  -e, --emit <classes>     Statement classes: tables, fks, all (default: all)");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;
    let mut dialect = Dialect::default();
    let mut emit = EmitMode::All;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-d" | "--dialect" => {
                i += 1;
                if i < args.len() {
                    dialect = Dialect::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unsupported dialect: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "-e" | "--emit" => {
                i += 1;
                if i < args.len() {
                    emit = EmitMode::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid emit classes: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let schema: Schema = match serde_json::from_str(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid schema JSON: {}", e);
            process::exit(1);
        }
    };

    let ddl = match print_ddl(&schema, &Config::for_mode(emit, dialect)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("DDL generation failed: {}", e);
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &ddl) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => println!("{}", ddl),
    }
}
