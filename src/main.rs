use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_booking::{
    build_view,
    config::Config,
    console::{Command, HELP},
    notifications::ToastQueue,
    services::selection::{IgnoreReason, ToggleOutcome},
    view::Settled,
    HttpSeatBookingView,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("failed to load configuration")?;

    // Логи в stderr, схема зала в stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting theater seat booking, API at {}", config.api.base_url);

    let (mut view, toasts) = build_view(&config).context("failed to build HTTP client")?;
    view.mount();
    println!("{}", view.render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(settled) = view.process_next(), if view.has_pending() => {
                print_toasts(&toasts);
                if matches!(settled, Settled::Loaded | Settled::Submitted { .. }) {
                    println!("{}", view.render());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => handle(&mut view, command),
                    Err(e) => eprintln!("{}", e),
                }
                print_toasts(&toasts);
            }
        }
    }

    view.teardown();
    info!("Bye");
    Ok(())
}

fn handle(view: &mut HttpSeatBookingView, command: Command) {
    match command {
        Command::Rows(rows) => {
            view.set_row_count(rows);
            println!("{}", view.render());
        }
        Command::Search => view.search(),
        Command::Seat(seat) => {
            match view.click_seat(seat) {
                ToggleOutcome::Ignored(IgnoreReason::Reserved) => println!("Seat {} is reserved", seat),
                ToggleOutcome::Ignored(IgnoreReason::NotInLayout) => println!("There is no seat {}", seat),
                _ => {}
            }
            println!("{}", view.render());
        }
        Command::Submit => {
            // Ошибка валидации уже показана уведомлением, здесь только лог
            if let Err(e) = view.submit() {
                debug!("Submit rejected: {}", e);
            }
        }
        Command::Show => println!("{}", view.render()),
        Command::Json => match serde_json::to_string_pretty(&view.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{}", e),
        },
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}

fn print_toasts(toasts: &ToastQueue) {
    for toast in toasts.take_visible() {
        println!("{} {}", toast.level.icon(), toast.message);
    }
}
