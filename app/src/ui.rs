//! The interactive event loop: render, read a command, run it, repeat.

use std::{
    io::Write,
    ops::ControlFlow,
    str::FromStr,
};

use gif_portal_client::{
    gateway::Gateway,
    identity::IdentityProvider,
    logs::log_warning,
    session::Session,
    view::render,
};
use tokio::io::{
    AsyncBufReadExt,
    BufReader,
};

#[derive(Debug, PartialEq, Eq, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Keyword {
    Connect,
    Disconnect,
    Submit,
    Refresh,
    Init,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UiCommand {
    Connect,
    Disconnect,
    /// The raw contents of the submission field, possibly empty.
    Submit(String),
    Refresh,
    Init,
    Help,
    Quit,
}

impl FromStr for UiCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Only the separator after the keyword is dropped; the submission field is kept verbatim.
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let keyword = Keyword::from_str(word).map_err(|_| format!("`{word}`, try `help`"))?;

        Ok(match keyword {
            Keyword::Connect => Self::Connect,
            Keyword::Disconnect => Self::Disconnect,
            Keyword::Submit => Self::Submit(rest.to_string()),
            Keyword::Refresh => Self::Refresh,
            Keyword::Init => Self::Init,
            Keyword::Help => Self::Help,
            Keyword::Quit => Self::Quit,
        })
    }
}

const HELP: &str = "\
commands:
  connect          connect the wallet
  disconnect       forget the connected wallet
  submit <link>    add a GIF link to the shared list
  refresh          re-read the list
  init             create the storage account
  quit             exit";

pub async fn run<G: Gateway, W: IdentityProvider>(
    session: &mut Session<G, W>,
) -> anyhow::Result<()> {
    // A missing or untrusted wallet just leaves the connect action on screen.
    let _ = session.check_if_connected().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("\n{}", render(session.state()));
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<UiCommand>() {
            Ok(command) => {
                if dispatch(session, command).await.is_break() {
                    break;
                }
            }
            Err(e) => log_warning("Unknown command", e),
        }
    }

    Ok(())
}

/// Runs one command against the session. Failures are logged and recorded in the session state,
/// which the next render shows.
pub async fn dispatch<G: Gateway, W: IdentityProvider>(
    session: &mut Session<G, W>,
    command: UiCommand,
) -> ControlFlow<()> {
    match command {
        UiCommand::Connect => {
            let _ = session.connect().await;
        }
        UiCommand::Disconnect => {
            session.disconnect();
        }
        UiCommand::Submit(mut input) => {
            let _ = session.submit(&mut input).await;
        }
        UiCommand::Refresh => {
            let _ = session.refresh().await;
        }
        UiCommand::Init => {
            if session.initialize_storage().await.is_ok() {
                let _ = session.refresh().await;
            }
        }
        UiCommand::Help => println!("{HELP}"),
        UiCommand::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
