use anyhow::Result;
use chrono::NaiveDate;

use apodview::app::App;
use apodview::logging::{log, obj, v_str, Domain, Level};
use apodview::record::ISO_DATE_FMT;
use apodview::source::SourceKind;
use apodview::state::Config;
use apodview::view::ConsoleView;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let kind = SourceKind::from_env();
    let source = kind.build(&cfg)?;
    log(
        Level::Info,
        Domain::System,
        "startup",
        obj(&[("source", v_str(&format!("{kind:?}").to_lowercase()))]),
    );

    let mut app = App::new(source, ConsoleView);
    app.load(cfg.start_date).await;

    // Stands in for the date picker and load button: one command per line.
    println!("commands: <YYYY-MM-DD> | load [YYYY-MM-DD] | open <n> | empty line quits");
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        if let Some(rest) = input.strip_prefix("open ") {
            match rest.trim().parse::<usize>() {
                Ok(n) if n >= 1 => {
                    app.open_detail(n - 1);
                }
                _ => println!("usage: open <card number>"),
            }
        } else if input == "load" || input.starts_with("load ") {
            let rest = input.strip_prefix("load").map(str::trim).unwrap_or("");
            if rest.is_empty() {
                app.load(None).await;
            } else {
                match NaiveDate::parse_from_str(rest, ISO_DATE_FMT) {
                    Ok(start) => app.load(Some(start)).await,
                    Err(_) => println!("usage: load [YYYY-MM-DD]"),
                }
            }
        } else {
            match NaiveDate::parse_from_str(input, ISO_DATE_FMT) {
                Ok(reference) => app.reselect(reference),
                Err(_) => {
                    println!("enter a date as YYYY-MM-DD, 'load [date]', 'open <n>', or an empty line to quit")
                }
            }
        }
    }

    log(Level::Info, Domain::System, "shutdown", obj(&[]));
    Ok(())
}
