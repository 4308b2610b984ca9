//! Renders the session state for the terminal.
//!
//! [`render`] is a pure function of [`SessionState`]; printing is left to the caller through the
//! [`Display`] impl.

use std::fmt::{
    self,
    Display,
};

use colored::Colorize;
use solana_sdk::pubkey::Pubkey;

use crate::{
    logs::LogColor,
    session::{
        Identity,
        SessionState,
    },
};

pub const TITLE: &str = "🖼 GIF Portal (Testnet)";
pub const SUBTITLE: &str = "Dragonball Super GIF collection ✨";
pub const CONNECT_ACTION: &str = "Connect to Wallet";
pub const INPUT_PLACEHOLDER: &str = "Enter gif link!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridEntry {
    pub image: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// No identity: the only available action is connecting.
    ConnectAction,
    Connected {
        identity: Pubkey,
        grid: Vec<GridEntry>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub body: Body,
    pub status: Option<String>,
}

pub fn render(state: &SessionState) -> View {
    let body = match state.identity() {
        Identity::Disconnected => Body::ConnectAction,
        Identity::Connected(identity) => Body::Connected {
            identity,
            grid: state
                .items()
                .iter()
                .map(|item| GridEntry {
                    image: item.link.clone(),
                    caption: format!("Address: {}", item.submitter_address),
                })
                .collect(),
        },
    };

    View {
        body,
        status: state.last_error().map(str::to_string),
    }
}

impl View {
    pub fn shows_form(&self) -> bool {
        matches!(self.body, Body::Connected { .. })
    }

    pub fn grid(&self) -> &[GridEntry] {
        match &self.body {
            Body::ConnectAction => &[],
            Body::Connected { grid, .. } => grid,
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE.color(LogColor::Header).bold())?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;

        match &self.body {
            Body::ConnectAction => {
                writeln!(f, "[ {} ]  (type `connect`)", CONNECT_ACTION.color(LogColor::Highlight))?;
            }
            Body::Connected { identity, grid } => {
                writeln!(f, "{} {identity}", "Wallet:".color(LogColor::Gray))?;
                writeln!(f, "[ {INPUT_PLACEHOLDER} ]  (type `submit <link>`)")?;
                writeln!(f)?;
                if grid.is_empty() {
                    writeln!(f, "{}", "No gifs yet.".color(LogColor::Gray))?;
                }
                for (i, entry) in grid.iter().enumerate() {
                    writeln!(f, "{:>3}. {}", i + 1, entry.image)?;
                    writeln!(f, "     {}", entry.caption)?;
                }
            }
        }

        if let Some(status) = &self.status {
            writeln!(f)?;
            writeln!(f, "{} {status}", "!".color(LogColor::Error))?;
        }
        Ok(())
    }
}
