// AlgoTTY: step-through algorithm visualizer for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::engine::config::{algorithm_names, parse_args};
use algotty::engine::Session;
use algotty::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> [options]", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    for chunk in algorithm_names().chunks(6) {
        eprintln!("  {}", chunk.join(", "));
    }
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size N        array length or node count");
    eprintln!("  --edges N       extra edges beyond the spanning tree");
    eprintln!("  --delay MS      milliseconds between animation steps");
    eprintln!("  --seed N        seed the instance generator");
    eprintln!("  --random-tree   random tree shape instead of a balanced BST");
    eprintln!("  --cyclic        inject a cycle into the topological sort graph");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quick --size 30", program_name);
    eprintln!("  {} dijkstra --seed 7", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; redirect it (2> algotty.log) when RUST_LOG is set
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        eprintln!("Error: No algorithm given");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let (kind, config) = match parse_args(&args[1..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    let session = match Session::new(kind, config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("starting {} on a {}", kind, session.instance().describe());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
