//! Interactive shell driving a [`Tracker`] line by line.
//!
//! Runs on the caller's runtime. Besides input lines, the loop wakes when
//! the current notification's window closes and clears it.

use std::time::Instant;

use anyhow::Result;
use learntrack_core::{ActivityFilter, ActivityId, ActivityType};
use learntrack_session::Tracker;
use learntrack_storage::ActivityStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  list               show activities under the current filter
  filter <f>         set filter (all, online class, assignment, quiz, discussion)
  new                open the create dialog
  title <text>       set the draft title
  type <t>           set the draft type
  submit             create from the draft
  cancel             close the create dialog
  open <id>          show details for an activity
  act                run the primary action of the open activity
  close              close the details dialog
  theme              toggle light/dark
  status             show dialog, filter and theme state
  help               show this text
  quit               leave the shell
";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Filter(ActivityFilter),
    New,
    Title(String),
    Type(ActivityType),
    Submit,
    Cancel,
    Open(ActivityId),
    Act,
    Close,
    Theme,
    Status,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "filter" => Command::Filter(rest.parse().map_err(|e| format!("{}", e))?),
        "new" => Command::New,
        // Empty titles are allowed here; submit rejects them.
        "title" => Command::Title(rest.to_string()),
        "type" => Command::Type(rest.parse().map_err(|e| format!("{}", e))?),
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "open" if !rest.is_empty() => Command::Open(ActivityId::new(rest)),
        "open" => return Err("usage: open <id>".to_string()),
        "act" => Command::Act,
        "close" => Command::Close,
        "theme" => Command::Theme,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(format!("unknown command {:?}; type `help`", word)),
    };
    Ok(cmd)
}

/// Apply a command and return the text to print.
pub fn apply<S: ActivityStore>(tracker: &mut Tracker<S>, cmd: Command) -> String {
    match cmd {
        Command::List => {
            let filter = tracker.view().active_filter();
            render::listing(filter, &tracker.visible())
        }
        Command::Filter(filter) => {
            tracker.select_filter(filter);
            render::listing(filter, &tracker.visible())
        }
        Command::New => {
            tracker.request_create();
            let draft = tracker.view().draft();
            format!("Create New Activity (type: {})\n", draft.activity_type)
        }
        Command::Title(title) => {
            tracker.set_draft_title(title);
            String::new()
        }
        Command::Type(t) => {
            tracker.set_draft_type(t);
            String::new()
        }
        Command::Submit => {
            let mut out = match tracker.submit_create() {
                Ok(record) => render::row(&record) + "\n",
                Err(_) => String::new(),
            };
            out.push_str(&notice(tracker));
            out
        }
        Command::Cancel => {
            tracker.cancel_create();
            String::new()
        }
        Command::Open(id) => {
            if tracker.open_details(&id) {
                tracker.selected().map(render::details).unwrap_or_default()
            } else {
                format!("No activity with id {}\n", id)
            }
        }
        Command::Act => match tracker.perform_selected_action() {
            Some(_) => notice(tracker),
            None => "No activity open\n".to_string(),
        },
        Command::Close => {
            tracker.close_details();
            String::new()
        }
        Command::Theme => format!("Theme: {}\n", tracker.toggle_theme()),
        Command::Status => {
            let view = tracker.view();
            format!(
                "filter: {}\ncreate dialog: {}\ndetails dialog: {}\nselected: {}\ntheme: {}\n",
                view.active_filter(),
                open_label(view.is_create_open()),
                open_label(view.is_details_open()),
                view.selected_id().map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                view.theme(),
            )
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}

fn open_label(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

fn notice<S: ActivityStore>(tracker: &Tracker<S>) -> String {
    tracker
        .view()
        .notification()
        .map(|text| format!("[notice] {}\n", text))
        .unwrap_or_default()
}

async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

/// Read commands from `input` until EOF or `quit`, writing replies to `out`.
pub async fn run<S, R, W>(tracker: &mut Tracker<S>, input: R, out: &mut W) -> Result<()>
where
    S: ActivityStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    out.write_all(b"> ").await?;
    out.flush().await?;

    loop {
        let deadline = tracker.view().notifier().deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    out.write_all(b"> ").await?;
                    out.flush().await?;
                    continue;
                }

                let reply = match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(cmd) => {
                        debug!("Shell command: {:?}", cmd);
                        apply(tracker, cmd)
                    }
                    Err(e) => format!("{}\n", e),
                };
                out.write_all(reply.as_bytes()).await?;
                out.write_all(b"> ").await?;
                out.flush().await?;
            }
            _ = until(deadline) => {
                // The timer only fires once the deadline has passed.
                if let Some(deadline) = deadline {
                    if tracker.tick(deadline) {
                        out.write_all(b"\n[notice dismissed]\n> ").await?;
                        out.flush().await?;
                    }
                }
            }
        }
    }

    out.flush().await?;
    Ok(())
}
