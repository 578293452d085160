use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use mathlogic::{Config, Evaluator, ParenPolicy};

/// Evaluates integer expressions such as `1 + 2 * 3` or `!(4 > 5) && 1`.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Expressions to evaluate. Reads one expression per line from stdin when omitted.
    expressions: Vec<String>,
    /// Print the postfix form instead of evaluating.
    #[arg(long)]
    postfix: bool,
    /// Ignore unbalanced parentheses instead of reporting them.
    #[arg(long)]
    lenient_parens: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let parens = if cli.lenient_parens {
        ParenPolicy::Lenient
    } else {
        ParenPolicy::Strict
    };
    let evaluator = Evaluator::new(Config::default().with_parens(parens));

    if !cli.expressions.is_empty() {
        let mut failed = false;
        for expression in &cli.expressions {
            failed |= !run(&evaluator, expression, cli.postfix);
        }
        if failed {
            process::exit(1);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        };
        if !line.trim().is_empty() {
            run(&evaluator, &line, cli.postfix);
        }
    }
}

fn run(evaluator: &Evaluator, expression: &str, postfix: bool) -> bool {
    let outcome = if postfix {
        evaluator.to_postfix(expression).map(|items| {
            items
                .iter()
                .map(|item| item.elem.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    } else {
        evaluator.evaluate(expression).map(|value| value.to_string())
    };
    match outcome {
        Ok(output) => {
            println!("Result: {}", output);
            true
        }
        Err(err) => {
            println!("Error: {}", err);
            println!("{}", err.render(expression));
            false
        }
    }
}
