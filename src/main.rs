//! Coffeeshop environment — CLI entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse CLI args
//!   3. Load the environment for the selected profile
//!   4. Resolve effective log level (CLI `-v` flags > env > config)
//!   5. Init logger once
//!   6. Validate the record
//!   7. Emit the record (human summary or JSON)

use tracing::info;

use coffeeshop_env::env::{self, Environment};
use coffeeshop_env::error::AppError;
use coffeeshop_env::logger;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    let environment = env::load(args.config_path.as_deref(), args.profile.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(environment.log_level.as_str());
    let force_cli_level = args.log_level.is_some();

    logger::init(effective_log_level, force_cli_level)?;

    environment.validate()?;

    if args.check {
        // Validation passed — exit silently so scripts can rely on the status code.
        return Ok(());
    }

    info!(
        production = environment.production,
        api_server_url = %environment.api_server_url,
        auth0_domain = %environment.auth0.domain(),
        audience = %environment.auth0.audience,
        callback_url = %environment.auth0.callback_url,
        configured_log_level = %environment.log_level,
        effective_log_level = %effective_log_level,
        "environment loaded"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&environment)
            .map_err(|e| AppError::Config(format!("cannot serialize environment: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    print_summary(&environment);
    Ok(())
}

fn print_summary(environment: &Environment) {
    let fit = |text: String| -> String {
        const WIDTH: usize = 60;
        let char_count = text.chars().count();
        if char_count >= WIDTH {
            let mut out = text.chars().take(WIDTH - 1).collect::<String>();
            out.push('…');
            out
        } else {
            format!("{text:<WIDTH$}")
        }
    };

    let profile_text = if environment.production {
        "production"
    } else {
        "development"
    };

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ ☕ Coffeeshop Environment                                    ║");
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ {}║", fit(format!("profile: {profile_text}")));
    println!("║ {}║", fit(format!("api server: {}", environment.api_server_url)));
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ 🔐 Auth0                                                     ║");
    println!("║ {}║", fit(format!("domain: {}", environment.auth0.domain())));
    println!("║ {}║", fit(format!("audience: {}", environment.auth0.audience)));
    println!("║ {}║", fit(format!("client id: {}", environment.auth0.client_id)));
    println!("║ {}║", fit(format!("callback: {}", environment.auth0.callback_url)));
    println!("╚══════════════════════════════════════════════════════════════╝");
}

struct CliArgs {
    log_level: Option<&'static str>,
    profile: Option<String>,
    config_path: Option<String>,
    json: bool,
    check: bool,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut profile = None;
    let mut config_path = None;
    let mut json = false;
    let mut check = false;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: coffeeshop-env [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -p, --profile <NAME>       Deployment profile: development (default) or production");
                println!("  -f, --config <PATH>        Explicit config file (bypasses profile lookup)");
                println!("      --json                 Print the resolved record as JSON");
                println!("      --check                Validate only; exit non-zero on failure");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-p" | "--profile" => {
                if let Some(name) = iter.next() {
                    profile = Some(name);
                } else {
                    eprintln!("error: -p/--profile requires a name argument");
                    std::process::exit(1);
                }
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--json" => json = true,
            "--check" => check = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier from the config default:
    //   -v      → warn   (suppress info noise, show warnings+errors only)
    //   -vv     → info   (normal operational output)
    //   -vvv    → debug  (flow-level diagnostics)
    //   -vvvv+  → trace  (full payload dumps, very verbose)
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs {
        log_level,
        profile,
        config_path,
        json,
        check,
    }
}
