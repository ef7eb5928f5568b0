//! Chat command - the interactive splitting loop

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use tabsplit::adapters::openai::{OpenAiClient, OpenAiExtractor, OpenAiInterpreter};
use tabsplit::config::Config;
use tabsplit::core::models::ReceiptImage;
use tabsplit::core::ports::{AssignmentInterpreter, ReceiptExtractor};
use tabsplit::output::{ItemsReport, OutputMode, SummaryReport, render_message};
use tabsplit::session::{Phase, Reply, Session};

use super::input::{HELP, Input, parse};
use super::upload::{read_receipt, upload};

/// Read the receipt, then take chat messages from stdin until EOF or `/quit`
pub async fn chat(image: ReceiptImage, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let client = OpenAiClient::from_config(&config.api)?;
    log::debug!("Using model {}", client.model());
    let mut session =
        Session::new(OpenAiExtractor::new(client.clone()), OpenAiInterpreter::new(client));
    let currency = config.display.currency.as_str();

    if let Err(e) = upload(&mut session, image, mode, currency).await {
        if session.phase() != Phase::Error {
            return Err(e);
        }
        eprintln!("{e:#}");
        eprintln!("Use /reset, then /upload <path> to try another photo.");
    }
    if mode == OutputMode::Human {
        println!("\nType /help for commands.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if mode == OutputMode::Human {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse(&line) {
            Input::Empty => {},
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::Invalid(reason) => eprintln!("{reason}"),
            Input::Message(text) => send(&mut session, &text, mode, currency).await,
            Input::Items => {
                ItemsReport::new(session.ledger(), session.totals()).render(mode, currency);
            },
            Input::Summary => print_summary(&session, mode, currency),
            Input::Unassign { person, item } => match session.unassign(&person, item) {
                Ok(_) => {
                    if let Some(message) = session.transcript().last() {
                        render_message(message, mode);
                    }
                },
                Err(e) => eprintln!("{e}"),
            },
            Input::Reset => {
                session.reset();
                println!("Session cleared. Use /upload <path> to read a new receipt.");
            },
            Input::Upload(path) => {
                let result = match read_receipt(&path) {
                    Ok(image) => upload(&mut session, image, mode, currency).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    eprintln!("{e:#}");
                    if session.phase() == Phase::Error {
                        eprintln!("Use /reset to start over.");
                    }
                }
            },
        }
    }

    if session.phase() == Phase::Splitting {
        print_summary(&session, mode, currency);
    }
    Ok(())
}

async fn send<E, I>(session: &mut Session<E, I>, text: &str, mode: OutputMode, currency: &str)
where
    E: ReceiptExtractor,
    I: AssignmentInterpreter,
{
    match session.send(text).await {
        Ok(reply) => {
            if let Some(message) = session.transcript().last() {
                render_message(message, mode);
            }
            if matches!(reply, Reply::Assigned(_)) && mode == OutputMode::Human {
                ItemsReport::new(session.ledger(), session.totals()).render(mode, currency);
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}

fn print_summary<E, I>(session: &Session<E, I>, mode: OutputMode, currency: &str)
where
    E: ReceiptExtractor,
    I: AssignmentInterpreter,
{
    SummaryReport::new(&session.summary(), session.ledger(), session.totals()).render(mode, currency);
}
