use std::io::{self, BufRead};

use itertools::Itertools;

use hitori::{solve, Board};

fn main() {
    let lines = io::stdin().lock().lines()
        .map(|line| line.expect("could not read stdin"))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect_vec();

    let board = Board::from_lines(&lines).expect("malformed puzzle");
    println!("{}", board);
    println!();
    println!("solving...");

    let answers = solve(&board);

    println!("{} solutions found:", answers.len());
    for answer in &answers {
        println!();
        println!("{}", answer);
    }
}
