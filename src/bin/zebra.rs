use clap::Parser;
use prettytable::{Cell, Row, Table};
use zebra::{
    puzzles::zebra as classic,
    solver::{
        attribute::{Attribute, Category},
        board::Board,
        engine::Solver,
        stats::render_stats_table,
    },
};

/// Solve the classic five-house zebra puzzle by constraint propagation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Print the final board as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Print per-clue solver statistics.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt::try_init();
    let args = Args::parse();

    let clues = classic::clues();
    let (board, stats) = Solver::new().solve(&clues, Board::new())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        println!("{}", render_board_table(&board));
        if !board.is_solved() {
            println!("(some domains are unresolved; candidates are listed)");
        }
    }

    if args.stats {
        println!("{}", render_stats_table(&stats, &clues));
    }

    Ok(())
}

fn render_board_table(board: &Board) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(
        std::iter::once(Cell::new("House"))
            .chain(Category::ALL.iter().map(|c| Cell::new(&format!("{:?}", c))))
            .collect(),
    ));

    for house in board.houses() {
        let mut cells = vec![Cell::new(&house.position().to_string())];
        for category in Category::ALL {
            let mut labels: Vec<String> =
                house.domain(category).iter().map(|a| label(*a)).collect();
            labels.sort();
            cells.push(Cell::new(&labels.join(" | ")));
        }
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

fn label(attr: Attribute) -> String {
    match attr {
        Attribute::Color(v) => format!("{:?}", v),
        Attribute::Nationality(v) => format!("{:?}", v),
        Attribute::Pet(v) => format!("{:?}", v),
        Attribute::Drink(v) => format!("{:?}", v),
        Attribute::Smoke(v) => format!("{:?}", v),
    }
}
