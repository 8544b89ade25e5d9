//! rime-mods - inspect Rime modifier words and key representations
//!
//! Each argument is either a modifier word (`0x40000005`, `5`) or a key
//! representation (`Control+a`).

use anyhow::{anyhow, Context, Result};
use log::{debug, info};

use rime_modifiers::constants::RESERVED_BITS;
use rime_modifiers::{format_modifiers, Config, KeyEvent, Modifiers};

/// Print help message
fn print_help() {
    println!(
        r#"rime-mods {} - inspect Rime modifier words and key representations

USAGE:
    rime-mods [OPTIONS] <WORD|KEY>...

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    -r, --raw               Do not apply config filtering to keys
    --init-config           Generate default config file
    -f, --force             Overwrite config file without confirmation
    --                      Treat remaining arguments as inputs

EXAMPLES:
    rime-mods 0x40000005               Shift+Control+Release
    rime-mods Control+a                keycode and mask of Control+a
    rime-mods --raw Lock+Shift+Return  keep ignored modifiers
    rime-mods -- -                     the minus key

    Bare numbers are read as modifier words. To inspect a key with
    no modifiers, write it as a character ("a") or with a modifier.

CONFIG FILE:
    ~/.config/rime-modifiers/config.toml (override with RIME_MODIFIERS_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Parse a decimal or 0x-prefixed hex word
fn parse_word(arg: &str) -> Option<u32> {
    match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => arg.parse().ok(),
    }
}

fn describe_word(word: u32) {
    let mods = Modifiers::from_state(word);
    println!("{:#010x}", word);
    println!("  names:       {}", names_or_none(mods));
    println!("  significant: {:#010x}", mods.significant().bits());
    let reserved = word & RESERVED_BITS;
    if reserved != 0 {
        println!("  reserved:    {:#010x}", reserved);
    }
    let unknown = word & !Modifiers::all().bits() & !RESERVED_BITS;
    if unknown != 0 {
        println!("  unknown:     {:#010x}", unknown);
    }
}

fn describe_key(arg: &str, config: Option<&Config>) -> Result<()> {
    let event: KeyEvent = arg
        .parse()
        .with_context(|| format!("Invalid argument: {}", arg))?;
    let event = match config {
        Some(config) => match config.modifiers.filter(event) {
            Some(filtered) => filtered,
            None => {
                println!("{}  (dropped: release events are not forwarded)", event);
                return Ok(());
            }
        },
        None => event,
    };
    println!("{}", event);
    println!("  keycode:     {:#x}", event.keycode);
    println!("  mask:        {:#010x}", event.mask());
    println!("  modifiers:   {}", names_or_none(event.modifiers));
    Ok(())
}

fn names_or_none(mods: Modifiers) -> String {
    let names = format_modifiers(mods);
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names
    }
}

fn init_config(force: bool) -> Result<()> {
    if let Some(path) = rime_modifiers::config::default_config_path() {
        if path.exists() && !force {
            return Err(anyhow!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    let path = Config::write_default_config()?;
    println!("Config written: {}", path.display());
    Ok(())
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    help: bool,
    version: bool,
    raw: bool,
    init_config: bool,
    force: bool,
    inputs: Vec<String>,
}

/// Split options from inputs
///
/// Everything after `--` is an input, and a bare `-` is the minus key.
/// Unknown options are errors.
fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => opts.help = true,
            "-V" | "--version" => opts.version = true,
            "-r" | "--raw" => opts.raw = true,
            "-f" | "--force" => opts.force = true,
            "--init-config" => opts.init_config = true,
            "--" => {
                opts.inputs.extend(iter.by_ref().cloned());
                break;
            }
            "-" => opts.inputs.push(arg.clone()),
            other if other.starts_with('-') => {
                return Err(anyhow!("Unknown option: {} (see --help)", other));
            }
            _ => opts.inputs.push(arg.clone()),
        }
    }
    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Check command line arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    // --help
    if args.is_empty() || opts.help {
        print_help();
        return Ok(());
    }

    // --version
    if opts.version {
        println!("rime-mods {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // --init-config
    if opts.init_config {
        return init_config(opts.force);
    }

    let config = if opts.raw { None } else { Some(Config::load()) };
    if let Some(config) = &config {
        debug!("Ignored modifiers: {}", names_or_none(config.modifiers.ignore));
    }

    if opts.inputs.is_empty() {
        return Err(anyhow!("No modifier word or key given"));
    }
    info!("Inspecting {} argument(s)", opts.inputs.len());

    for arg in &opts.inputs {
        match parse_word(arg) {
            Some(word) => describe_word(word),
            None => describe_key(arg, config.as_ref())?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let opts = parse_args(&args(&["-r", "Control+a", "0x5"])).unwrap();
        assert!(opts.raw);
        assert_eq!(opts.inputs, args(&["Control+a", "0x5"]));
    }

    #[test]
    fn test_bare_minus_is_a_key() {
        let opts = parse_args(&args(&["-"])).unwrap();
        assert_eq!(opts.inputs, args(&["-"]));
        let event: KeyEvent = opts.inputs[0].parse().unwrap();
        assert_eq!(event.keycode, '-' as u32);
    }

    #[test]
    fn test_double_dash_ends_options() {
        let opts = parse_args(&args(&["--raw", "--", "-", "--help"])).unwrap();
        assert!(opts.raw);
        assert!(!opts.help);
        assert_eq!(opts.inputs, args(&["-", "--help"]));
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!(parse_args(&args(&["--rwa", "Control+a"])).is_err());
        assert!(parse_args(&args(&["-x"])).is_err());
    }

    #[test]
    fn test_parse_word() {
        assert_eq!(parse_word("0x40000005"), Some(0x4000_0005));
        assert_eq!(parse_word("5"), Some(5));
        assert_eq!(parse_word("Control+a"), None);
    }
}
