use std::io;

use meskerem::calendar::date::GregorianDate;
use meskerem::runtime::Runtime;
use meskerem::state::app::AppState;
use meskerem::terminal::Terminal;
use meskerem::widgets::date_picker::DatePicker;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> io::Result<()> {
    // An optional "YYYY-MM-DD" argument seeds the initial selection.
    let initial = match std::env::args().nth(1) {
        Some(arg) => Some(
            GregorianDate::parse_iso(&arg)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?
                .to_stamp(),
        ),
        None => None,
    };

    let picker = DatePicker::new("when", "Select a date").with_instant(initial);
    let terminal = Terminal::new()?;
    let mut runtime = Runtime::new(AppState::new(picker), terminal);

    if let Some(selection) = runtime.run()? {
        let json = serde_json::to_string_pretty(&selection).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}
