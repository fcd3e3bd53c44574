use std::{
    fmt,
    io::{BufRead, Write},
};

use anyhow::{bail, Context};
use clap::Parser;

mod scanner;
pub use scanner::Scanner;

/// Sums max(0, (x ^ y) - THRESHOLD) over a ROWS x COLS grid, modulo MODULUS.
///
/// Without positional arguments, reads one `ROWS COLS THRESHOLD MODULUS`
/// query after another from stdin and prints one result per line.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(requires_all = ["cols", "threshold", "modulus"])]
    pub rows: Option<u64>,

    pub cols: Option<u64>,

    pub threshold: Option<u64>,

    pub modulus: Option<u64>,

    /// Visit every cell instead of decomposing the grid
    #[arg(long, conflicts_with = "check")]
    pub naive: bool,

    /// Evaluate both ways and fail if they disagree
    #[arg(long)]
    pub check: bool,

    /// Largest grid, in cells, that --naive and --check accept
    #[arg(long, default_value_t = 1 << 24)]
    pub naive_limit: u64,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else if self.naive {
            Mode::Naive
        } else {
            Mode::Decompose
        }
    }

    fn query(&self) -> Option<Query> {
        Some(Query {
            rows: self.rows?,
            cols: self.cols?,
            threshold: self.threshold?,
            modulus: self.modulus?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub rows: u64,
    pub cols: u64,
    pub threshold: u64,
    pub modulus: u64,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} threshold={} modulus={}",
            self.rows, self.cols, self.threshold, self.modulus
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Decompose,
    Naive,
    Check,
}

pub fn evaluate(query: Query, mode: Mode, naive_limit: u64) -> anyhow::Result<u64> {
    let Query {
        rows,
        cols,
        threshold,
        modulus,
    } = query;

    let decomposed = || {
        immortal::compute(rows, cols, threshold, modulus)
            .with_context(|| format!("Invalid query {query}"))
    };
    let enumerated = || {
        if rows.checked_mul(cols).map_or(true, |cells| cells > naive_limit) {
            bail!("{rows}x{cols} grid exceeds the naive limit of {naive_limit} cells");
        }
        immortal::naive(rows, cols, threshold, modulus)
            .with_context(|| format!("Invalid query {query}"))
    };

    match mode {
        Mode::Decompose => decomposed(),
        Mode::Naive => enumerated(),
        Mode::Check => {
            let fast = decomposed()?;
            let slow = enumerated()?;
            if fast != slow {
                bail!("Decomposition gives {fast} but enumeration gives {slow} for {query}");
            }
            Ok(fast)
        }
    }
}

fn next_query<R: BufRead>(scanner: &mut Scanner<R>) -> anyhow::Result<Option<Query>> {
    let Some(rows) = scanner.next()? else {
        return Ok(None);
    };
    let line = scanner.line();
    let mut field = |name: &str| -> anyhow::Result<u64> {
        scanner
            .next()?
            .with_context(|| format!("Query on line {line} is missing {name}"))
    };
    Ok(Some(Query {
        rows,
        cols: field("COLS")?,
        threshold: field("THRESHOLD")?,
        modulus: field("MODULUS")?,
    }))
}

pub fn cli(args: Args, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let mode = args.mode();

    if let Some(query) = args.query() {
        writeln!(output, "{}", evaluate(query, mode, args.naive_limit)?)?;
        output.flush()?;
        return Ok(());
    }

    let mut scanner = Scanner::new(input);
    let mut answered = 0usize;
    while let Some(query) = next_query(&mut scanner)? {
        let answer = evaluate(query, mode, args.naive_limit)
            .with_context(|| format!("Query on line {}", scanner.line()))?;
        writeln!(output, "{answer}")?;
        answered += 1;
    }
    output.flush()?;
    log::info!("answered {answered} queries ({mode:?})");

    Ok(())
}

pub fn parse_cli() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::BufWriter::new(std::io::stdout().lock());
    cli(args, stdin, stdout)
}
