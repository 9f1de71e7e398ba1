//! Protoparse Dump - inspeksi wire-level file protobuf
//!
//! File di-mmap read-only lalu di-walk tanpa schema:
//! - Varint / fixed ditampilkan sebagai angka
//! - Delimited dicoba sebagai nested message, lalu UTF-8, lalu hex
//!
//! Usage:
//!   cargo run --release --bin protoparse_dump -- [OPTIONS] <FILE>

use std::fmt::Write as _;
use std::io::{self, Write};

use protoparse::config::{DEFAULT_MAX_LENGTH, DEFAULT_RECURSION_LIMIT};
use protoparse::{MappedFile, RawField, RawFields, RawValue, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Batas byte yang ditampilkan untuk payload biner
const HEX_PREVIEW: usize = 32;

/// Dump configuration
struct DumpConfig {
    path: Option<String>,
    max_length: usize,
    depth: u32,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_length: DEFAULT_MAX_LENGTH,
            depth: DEFAULT_RECURSION_LIMIT,
        }
    }
}

fn parse_args() -> DumpConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DumpConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-length" | "-m" => {
                if i + 1 < args.len() {
                    config.max_length = args[i + 1].parse().unwrap_or(DEFAULT_MAX_LENGTH);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    config.depth = args[i + 1].parse().unwrap_or(DEFAULT_RECURSION_LIMIT);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Protoparse Dump - wire-level protobuf inspector\n");
                println!("Usage: protoparse_dump [OPTIONS] <FILE>\n");
                println!("Options:");
                println!("  -m, --max-length <BYTES>  Largest length prefix accepted (default: 64MB)");
                println!("  -d, --depth <N>           Nested message expansion depth (default: 100)");
                println!("  -h, --help                Show this help");
                println!("\nLog level via RUST_LOG (default: warn)");
                std::process::exit(0);
            }
            other => config.path = Some(other.to_owned()),
        }
        i += 1;
    }

    config
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Payload delimited sebagai nested message, jika seluruhnya valid
fn as_message(bytes: &[u8], max_length: usize) -> Option<Vec<RawField<'_>>> {
    if bytes.is_empty() {
        return None;
    }
    RawFields::with_max_length(bytes, max_length)
        .collect::<Result<Vec<_>>>()
        .ok()
}

fn hex_preview(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEX_PREVIEW * 3);
    for (i, byte) in bytes.iter().take(HEX_PREVIEW).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    if bytes.len() > HEX_PREVIEW {
        let _ = write!(out, " .. ({} bytes)", bytes.len());
    }
    out
}

fn print_fields<W: Write>(
    out: &mut W,
    fields: &[RawField<'_>],
    config: &DumpConfig,
    level: u32,
) -> io::Result<()> {
    let indent = "  ".repeat(level as usize);

    for field in fields {
        match field.value {
            RawValue::Varint(v) => writeln!(out, "{}#{} varint: {}", indent, field.number, v)?,
            RawValue::Fixed64(v) => writeln!(
                out,
                "{}#{} fixed64: {} ({})",
                indent,
                field.number,
                v,
                f64::from_bits(v)
            )?,
            RawValue::Fixed32(v) => writeln!(
                out,
                "{}#{} fixed32: {} ({})",
                indent,
                field.number,
                v,
                f32::from_bits(v)
            )?,
            RawValue::Delimited(bytes) => {
                let nested = if level < config.depth {
                    as_message(bytes, config.max_length)
                } else {
                    None
                };

                if let Some(children) = nested {
                    writeln!(out, "{}#{} message ({} bytes) {{", indent, field.number, bytes.len())?;
                    print_fields(out, &children, config, level + 1)?;
                    writeln!(out, "{}}}", indent)?;
                } else if let Ok(text) = std::str::from_utf8(bytes) {
                    writeln!(out, "{}#{} string: {:?}", indent, field.number, text)?;
                } else {
                    writeln!(
                        out,
                        "{}#{} bytes: [{}]",
                        indent,
                        field.number,
                        hex_preview(bytes)
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn run(config: DumpConfig) -> Result<()> {
    let Some(path) = config.path.as_deref() else {
        eprintln!("Usage: protoparse_dump [OPTIONS] <FILE> (see --help)");
        std::process::exit(2);
    };

    let file = MappedFile::open(path)?;
    info!(path, bytes = file.len(), "mapped input file");

    let mut fields = Vec::new();
    for field in RawFields::with_max_length(file.as_bytes(), config.max_length) {
        match field {
            Ok(field) => fields.push(field),
            Err(e) => {
                // Tampilkan apa yang sudah terbaca sebelum error
                warn!(error = %e, parsed = fields.len(), "stopped at malformed field");
                let stdout = io::stdout();
                print_fields(&mut stdout.lock(), &fields, &config, 0)?;
                return Err(e);
            }
        }
    }

    debug!(fields = fields.len(), "walk complete");
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    print_fields(&mut out, &fields, &config, 0)?;
    out.flush()?;
    Ok(())
}

fn main() {
    init_tracing();
    let config = parse_args();

    if let Err(e) = run(config) {
        eprintln!("❌ Dump error: {}", e);
        std::process::exit(1);
    }
}
