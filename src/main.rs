//! pwd-validator - interactive password policy checker.
//!
//! Prompts for passwords in a loop and prints which policy rules each one
//! misses. All validation is delegated to [`pwd_policy::RuleEngine`].

use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use console::{Key, Term, style};
use dialoguer::{Confirm, theme::ColorfulTheme};
use pwd_policy::{Policy, PolicyError, RuleEngine, ValidationReport};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "q"];
const GOODBYE: &str = "Thank you for using Password Validator. Goodbye!";
const PASSWORD_PROMPT: &str = "Please enter your password:";
const CONTINUE_PROMPT: &str = "Would you like to validate another password?";

/// Ctrl+D as delivered by a raw-mode key read.
const END_OF_TRANSMISSION: char = '\u{4}';

/// Interactive password policy validator
#[derive(Parser, Debug)]
#[command(name = "pwd-validator")]
#[command(version)]
#[command(about = "Interactive password policy validator", long_about = None)]
struct Cli {
    /// Exact password length (overrides PWD_REQUIRED_LENGTH)
    #[arg(long)]
    required_length: Option<usize>,

    /// Accepted special characters (overrides PWD_SPECIAL_CHARACTERS)
    #[arg(long)]
    special_characters: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Invalid policy: {0}")]
    Policy(#[from] PolicyError),
    #[error("Operation cancelled by user.")]
    Cancelled,
    #[error("Input error occurred.")]
    Input(#[source] io::Error),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::Input(err)
        }
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => CliError::from(e),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = install_interrupt_handler() {
        tracing::warn!("Failed to install Ctrl+C handler: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Cancelled) => {
            println!("\n\n{}", CliError::Cancelled);
            ExitCode::SUCCESS
        }
        Err(CliError::Input(e)) => {
            tracing::debug!("prompt failed: {}", e);
            eprintln!("\n\n{}", CliError::Input(e));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exits with the cancel message when Ctrl+C arrives between prompts.
///
/// Prompts read keys in raw mode, where Ctrl+C comes back as an
/// `Interrupted` read error instead of a signal.
fn install_interrupt_handler() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Registered before the first prompt is shown.
    #[cfg(unix)]
    let mut interrupt = {
        let _guard = runtime.enter();
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?
    };

    std::thread::spawn(move || {
        runtime.block_on(async move {
            #[cfg(unix)]
            let received = interrupt.recv().await.is_some();
            #[cfg(not(unix))]
            let received = tokio::signal::ctrl_c().await.is_ok();

            if received {
                tracing::info!("Ctrl+C received, exiting");
                let _ = Term::stderr().show_cursor();
                println!("\n\n{}", CliError::Cancelled);
                std::process::exit(0);
            }
        });
    });

    Ok(())
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("pwd_policy=debug,pwd_validator=debug,warn")
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Environment configuration, then command-line overrides.
fn build_policy(cli: &Cli) -> Result<Policy, PolicyError> {
    let base = Policy::from_env()?;
    let mut builder = Policy::builder()
        .required_length(cli.required_length.unwrap_or(base.required_length()))
        .special_characters(base.special_characters());

    if let Some(ref special) = cli.special_characters {
        builder = builder.special_characters(special);
    }

    builder.build()
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let engine = RuleEngine::with_policy(build_policy(cli)?);
    let theme = ColorfulTheme::default();
    let interactive = io::stdin().is_terminal() && Term::stderr().is_term();

    if !cli.no_banner {
        display_welcome_message();
    }
    println!("{}", engine.describe_policy());

    loop {
        let password = read_password(interactive)?;

        if is_exit_keyword(password.expose_secret()) {
            println!("\n{}", GOODBYE);
            break;
        }

        let report = engine.validate(&password);
        println!("{}", render_report(&report));

        println!();
        if !ask_again(&theme, interactive)? {
            println!("\n{}", GOODBYE);
            break;
        }
    }

    Ok(())
}

fn display_welcome_message() {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("{}", style("           PASSWORD VALIDATOR APPLICATION").bold());
    println!("{rule}");
    println!("Welcome to the Password Security Validator!");
    println!("This application will help you create secure passwords");
    println!("that meet enterprise security standards.");
    println!("{rule}");
}

/// Prompts for a password, hidden when stdin is a terminal.
///
/// End of input is an error, never an empty password.
fn read_password(interactive: bool) -> Result<SecretString, CliError> {
    let term = Term::stderr();
    term.write_str(&format!("\n{} ", style(PASSWORD_PROMPT).bold()))?;

    let input = if interactive {
        let line = read_hidden_line(|| term.read_key())?;
        term.write_line("")?;
        line
    } else {
        read_piped_line(&mut io::stdin().lock())?
    };

    Ok(SecretString::new(input.trim().to_string().into()))
}

/// Collects keys into a line without echoing them.
fn read_hidden_line(
    mut next_key: impl FnMut() -> io::Result<Key>,
) -> Result<String, CliError> {
    let mut line = String::new();
    loop {
        match next_key()? {
            Key::Enter | Key::Char('\r') | Key::Char('\n') => return Ok(line),
            Key::Backspace | Key::Char('\u{7f}') | Key::Char('\u{8}') => {
                line.pop();
            }
            Key::Char(END_OF_TRANSMISSION) if line.is_empty() => {
                return Err(CliError::Input(io::ErrorKind::UnexpectedEof.into()));
            }
            Key::Char(c) if !c.is_control() => line.push(c),
            _ => {}
        }
    }
}

/// Reads one line from a non-terminal input, without its line ending.
fn read_piped_line(reader: &mut impl BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(CliError::Input(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn ask_again(theme: &ColorfulTheme, interactive: bool) -> Result<bool, CliError> {
    if interactive {
        let again = Confirm::with_theme(theme)
            .with_prompt(CONTINUE_PROMPT)
            .default(false)
            .interact()?;
        return Ok(again);
    }

    println!("{CONTINUE_PROMPT}");
    print!("Enter 'y' for yes, any other key to exit: ");
    io::Write::flush(&mut io::stdout())?;
    let answer = read_piped_line(&mut io::stdin().lock())?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

fn is_exit_keyword(input: &str) -> bool {
    let input = input.to_lowercase();
    EXIT_KEYWORDS.contains(&input.as_str())
}

/// Success banner, or the numbered list of unmet rules.
fn render_report(report: &ValidationReport) -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "           VALIDATION RESULTS".to_string(),
        rule.clone(),
    ];

    if report.is_valid() {
        lines.push(
            style("✅ SUCCESS: Password meets all security requirements!")
                .green()
                .to_string(),
        );
        lines.push("Your password is strong and secure.".to_string());
    } else {
        lines.push(
            style("❌ ERROR: Password does not meet the policy")
                .red()
                .to_string(),
        );
        lines.push("\nSpecific issues found:".to_string());
        lines.push("-".repeat(30));
        for (i, message) in report.messages().iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, message));
        }
    }

    lines.push(rule);
    lines.join("\n")
}
