//! # Swap Terminal
//!
//! Line-oriented driver for the swap form controller. Reads one command per
//! line from stdin and prints every published snapshot as a single line.
//!
//! ```text
//! amount <x>   edit the sell amount        sell <code>  choose sell currency
//! blur         leave the amount field      buy <code>   choose buy currency
//! half | max   balance shortcuts           toggle       swap direction
//! confirm      open the PIN step           pin <pin>    submit the swap
//! cancel       close the PIN step          pairs        reload supported pairs
//! quit
//! ```

use std::sync::Arc;

use swap_terminal::app::{SwapApp, SwapView};
use swap_terminal::core::ClientConfig;
use swap_terminal::services::api::ApiClient;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> swap_terminal::Result<()> {
    let _log_guard = swap_terminal::debug::init_logger();

    let config = ClientConfig::from_env()?;
    let api = Arc::new(ApiClient::new(&config)?);
    tracing::info!(base_url = %api.base_url(), "Starting swap terminal");

    let mut app = SwapApp::new(api, config);
    let mut views = app.subscribe();
    let events = app.events();
    app.load();

    print_help();
    print_view(&views.borrow_and_update());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if !run_command(&mut app, line.trim()) {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            },
            received = events.recv() => match received {
                Ok(event) => app.handle_event(event),
                Err(_) => break,
            },
        }

        if views.has_changed().unwrap_or(false) {
            print_view(&views.borrow_and_update());
        }
    }

    tracing::info!("Swap terminal exiting");
    Ok(())
}

/// Apply one command. Returns false to quit.
fn run_command(app: &mut SwapApp, line: &str) -> bool {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let outcome = match command {
        "" => Ok(()),
        "amount" => {
            if !app.input_amount(arg) {
                println!("rejected amount: {}", arg);
            }
            Ok(())
        }
        "blur" => {
            app.blur_amount();
            Ok(())
        }
        "half" | "max" => {
            let applied = if command == "half" {
                app.apply_half()
            } else {
                app.apply_max()
            };
            if !applied {
                println!("no {} balance to use", app.view().sell_currency);
            }
            Ok(())
        }
        "sell" => app.select_sell_currency(arg),
        "buy" => app.select_buy_currency(arg),
        "toggle" => {
            app.toggle_direction();
            Ok(())
        }
        "confirm" => app.open_confirmation(),
        "pin" => app.submit_pin(arg),
        "cancel" => {
            app.cancel_confirmation();
            Ok(())
        }
        "pairs" => {
            app.refresh_pairs();
            Ok(())
        }
        "help" => {
            print_help();
            Ok(())
        }
        "quit" | "exit" => return false,
        other => {
            println!("unknown command: {} (try 'help')", other);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        println!("error: {}", e.user_message());
    }
    true
}

fn print_help() {
    println!("commands: amount <x> | blur | half | max | sell <code> | buy <code> | toggle");
    println!("          confirm | pin <pin> | cancel | pairs | help | quit");
}

fn print_view(view: &SwapView) {
    let mut line = format!(
        "{} -> {} | sell {} | buy {} | {}s | [{}]",
        view.sell_currency,
        view.buy_currency,
        if view.amount_display.is_empty() { "0" } else { view.amount_display.as_str() },
        view.output_display,
        view.time_remaining,
        view.submit_label,
    );
    if let Some(price) = &view.price_display {
        line.push_str(&format!(" | {}", price));
    }
    if let Some(error) = view.quote_error.as_ref().or(view.inline_error.as_ref()) {
        line.push_str(&format!(" | ! {}", error));
    }
    if view.confirming {
        line.push_str(" | PIN required");
    }
    if let Some(error) = &view.execution_error {
        line.push_str(&format!(" | swap failed: {}", error));
    }
    if let Some(reference) = &view.last_reference {
        line.push_str(&format!(" | last swap {}", reference));
    }
    println!("{}", line);
}
