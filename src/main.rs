use std::time::Duration;

use clap::Parser;

use terminal_progress::{CrosstermTerminal, ProgressConfig, TerminalProgress, logging};

#[derive(Parser)]
#[command(
    name = "terminal-progress",
    version,
    about = "Drive a progress bar through a simulated job."
)]
struct Cli {
    /// Number of steps in the job
    #[arg(short, long, default_value_t = 40)]
    steps: i64,

    /// Milliseconds each step takes
    #[arg(short, long, default_value_t = 100)]
    delay_ms: u64,

    /// Print a message line every N steps (0 disables)
    #[arg(short, long, default_value_t = 10)]
    message_every: i64,

    /// Step at which the job discovers more work
    #[arg(long)]
    grow_at: Option<i64>,

    /// How many steps get added at --grow-at
    #[arg(long, default_value_t = 10)]
    grow_by: i64,

    /// Disable colored fill
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Put the terminal in raw mode while drawing (Ctrl+C won't interrupt)
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = ProgressConfig {
        color: !cli.no_color,
        raw_mode: cli.raw,
        ..ProgressConfig::default()
    };
    let terminal = CrosstermTerminal::new(config.raw_mode);
    let mut bar = TerminalProgress::with_config(cli.steps, config, terminal, std::io::stdout())?;

    // Ctrl+C abandons the job but still leaves the terminal tidy
    let outcome = tokio::select! {
        result = run_job(&mut bar, &cli) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(())) => bar.print_complete().await,
        Some(Err(e)) => {
            bar.stop().await;
            println!();
            return Err(e);
        }
        None => {
            bar.stop().await;
            println!("\ninterrupted");
        }
    }

    Ok(())
}

async fn run_job(bar: &mut TerminalProgress, cli: &Cli) -> anyhow::Result<()> {
    let delay = Duration::from_millis(cli.delay_ms);
    let mut step: i64 = 0;

    while (step as u64) < bar.max() {
        step += 1;
        if cli.grow_at == Some(step) {
            bar.grow_max(cli.grow_by)?;
        }

        let message = (cli.message_every > 0 && step % cli.message_every == 0)
            .then(|| format!("finished step {step}"));
        bar.print_progress(message.as_deref());

        tokio::time::sleep(delay).await;
    }
    Ok(())
}
